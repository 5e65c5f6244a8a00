//! Trinum CLI
//!
//! Usage:
//!   trinum --date 1990-05-15                # Compute a triangle
//!   trinum --year 1990 --month 5 --day 15   # Same, numeric fields
//!   trinum --query "year=1990&month=5&day=15"
//!   trinum --date 1990-05-15 --analysis     # With interpretation
//!   trinum --date 1990-05-15 --json         # JSON output
//!   trinum --days 2024-2                    # Valid days of a month
//!   trinum --serve                          # HTTP API server

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{error, info};

use trinum::core::api::TriangleResponse;
use trinum::core::{analyze, default_selection, month_days, run_server, DateParser, TriangleCalculator};
use trinum::logging::{default_log_level, init_logging};
use trinum::types::{BirthDate, DateError};
use trinum::{DEFAULT_ADDR, VERSION};

/// Exit status for rejected date input
const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "trinum",
    version = VERSION,
    about = "Trinum - birth-date digit triangle calculator",
    long_about = "Trinum reduces the digits of a birth date into an inner and an\n\
                  outer triangle of single digits, plus three derived codes.\n\n\
                  Date input (first match wins):\n  \
                  --date         YYYY-MM-DD, YYYY/MM/DD or YYYY.MM.DD\n  \
                  --query        year=..&month=..&day=..\n  \
                  --year/--month/--day\n  \
                  (none)         today's date\n\n\
                  Codes:\n  \
                  main          - apex O of the inner triangle\n  \
                  inner         - fixed permutation of O\n  \
                  outer         - reduce(S + R + T)\n  \
                  subconscious  - reduce(L + I + O)"
)]
struct Args {
    /// Birth date as text
    #[arg(long)]
    date: Option<String>,

    /// Birth date as a URL query string
    #[arg(long)]
    query: Option<String>,

    /// Birth year
    #[arg(short, long, allow_negative_numbers = true)]
    year: Option<i64>,

    /// Birth month
    #[arg(short, long)]
    month: Option<i64>,

    /// Birth day
    #[arg(short, long)]
    day: Option<i64>,

    /// Include interpretation sections
    #[arg(short, long)]
    analysis: bool,

    /// List valid days for YEAR-MONTH and exit
    #[arg(long, value_name = "YEAR-MONTH")]
    days: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Log level (trace|debug|info|warn|error|off)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(e) = init_logging(level) {
        eprintln!("Logging error: {}", e);
        std::process::exit(1);
    }

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref spec) = args.days {
        run_days(spec, &args);
    } else {
        run_single(&args);
    }
}

/// Pick the date from the arguments, falling back to `today`.
/// Precedence: `--date`, then `--query`, then the numeric fields.
fn resolve_date(args: &Args, parser: &DateParser, today: NaiveDate) -> Result<BirthDate, DateError> {
    if let Some(ref text) = args.date {
        return parser.parse(text);
    }
    if let Some(ref query) = args.query {
        return parser.parse_query(query);
    }
    match (args.year, args.month, args.day) {
        (None, None, None) => Ok(default_selection(today)),
        (year, month, day) => BirthDate::new(
            year.unwrap_or(0),
            month.unwrap_or(0),
            day.unwrap_or(0),
        ),
    }
}

/// Compute and print one triangle
fn run_single(args: &Args) {
    let parser = DateParser::new();
    let calculator = TriangleCalculator::new();

    let date = match resolve_date(args, &parser, Local::now().date_naive()) {
        Ok(date) => date,
        Err(e) => exit_invalid(&e),
    };
    info!("event=cli_compute date={}", date);

    let result = calculator.compute(date);
    let analysis = args.analysis.then(|| analyze(&result));

    if args.json {
        let response = TriangleResponse { result, analysis };
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("event=json_failed error={}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }
    if let Some(analysis) = analysis {
        println!();
        println!("{}", analysis.to_terminal_string(args.no_color));
    }
}

/// Parse `YEAR-MONTH` (or `YEAR/MONTH`) and list its days
fn parse_days_spec(spec: &str) -> Result<(i64, i64, Vec<u32>), DateError> {
    let (year, month) = spec
        .split_once(['-', '/'])
        .and_then(|(y, m)| Some((y.trim().parse::<i64>().ok()?, m.trim().parse::<i64>().ok()?)))
        .ok_or_else(|| DateError::Unparseable {
            input: spec.to_string(),
        })?;
    let days = month_days(year, month)?;
    Ok((year, month, days))
}

/// Print the valid days of a month
fn run_days(spec: &str, args: &Args) {
    let (year, month, days) = match parse_days_spec(spec) {
        Ok(parsed) => parsed,
        Err(e) => exit_invalid(&e),
    };

    if args.json {
        println!("{}", serde_json::json!({ "year": year, "month": month, "days": days }));
    } else {
        let list: Vec<String> = days.iter().map(|d| d.to_string()).collect();
        println!("{:04}-{:02}: {}", year, month, list.join(" "));
    }
}

/// Report rejected input and exit with `EXIT_INVALID_INPUT`
fn exit_invalid(err: &DateError) -> ! {
    error!("event=input_rejected code={} message={}", err.code(), err);
    eprintln!("Invalid date: {} ({})", err, err.code());
    std::process::exit(EXIT_INVALID_INPUT);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!("Trinum v{} API server", VERSION);
    println!();

    if let Err(e) = run_server(&args.addr).await {
        error!("event=server_failed error={}", e);
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
