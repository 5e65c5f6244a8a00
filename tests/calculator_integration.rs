//! Integration tests for the calculator
//!
//! Tests the full path: text → DateParser → TriangleCalculator → analysis

use pretty_assertions::assert_eq;
use trinum::core::{analyze, compute_triangle, DateParser, TriangleCalculator};
use trinum::types::{BirthDate, DateDigits, InnerTriangle, SectionKind};

/// Test the full path from text to interpreted result
#[test]
fn test_full_path() {
    let parser = DateParser::new();
    let calculator = TriangleCalculator::new();

    let date = parser.parse("1990-05-15").unwrap();
    let result = calculator.compute(date);
    let analysis = analyze(&result);

    assert_eq!(result.main_code(), 3);
    assert_eq!(analysis.sections.len(), 4);
    assert_eq!(
        analysis.section(SectionKind::MainPersonality).unwrap().code,
        result.inner.o
    );
}

#[test]
fn test_example_1990_05_15() {
    let result = compute_triangle(1990, 5, 15);
    assert_eq!(
        result.original_date,
        DateDigits { a: 1, b: 5, c: 0, d: 5, e: 1, f: 9, g: 9, h: 0 }
    );
    assert_eq!(
        result.inner,
        InnerTriangle { i: 6, j: 5, k: 1, l: 9, m: 2, n: 1, o: 3 }
    );
}

/// L = reduce(0 + 0) stays 0 for years ending in 00
#[test]
fn test_example_2000_01_01_keeps_zero() {
    let result = compute_triangle(2000, 1, 1);
    assert_eq!(
        result.original_date,
        DateDigits { a: 0, b: 1, c: 0, d: 1, e: 2, f: 0, g: 0, h: 0 }
    );
    assert_eq!((result.inner.i, result.inner.j, result.inner.k, result.inner.l), (1, 1, 2, 0));
    assert!(result.all_nodes().iter().all(|&v| v <= 9));
}

/// Query input and text input agree
#[test]
fn test_query_and_text_agree() {
    let parser = DateParser::new();
    let calculator = TriangleCalculator::new();

    let from_text = calculator.compute(parser.parse("1985/11/3").unwrap());
    let from_query = calculator.compute(parser.parse_query("year=1985&month=11&day=3").unwrap());
    assert_eq!(from_text, from_query);
}

/// Same input always gives byte-identical output
#[test]
fn test_determinism_json() {
    let a = serde_json::to_string(&compute_triangle(1977, 7, 27)).unwrap();
    let b = serde_json::to_string(&compute_triangle(1977, 7, 27)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_json_shape() {
    let date = BirthDate::new(1990, 5, 15).unwrap();
    let result = TriangleCalculator::new().compute(date);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["birth_date"]["year"], 1990);
    assert_eq!(json["original_date"]["A"], 1);
    assert_eq!(json["inner"]["O"], 3);
    assert_eq!(json["outer"]["R"], 9);
    assert_eq!(json["core"]["inner_code"], 6);
    assert_eq!(json["core"]["outer_code"], 6);
    assert_eq!(json["core"]["subconscious_code"], 9);
    assert_eq!(json["readings"]["father"], "652");
}

#[test]
fn test_parseable_output() {
    let result = compute_triangle(1990, 5, 15);
    assert_eq!(
        result.to_parseable_string(),
        "date=1990-05-15 | main=3 | inner=6 | outer=6 | subconscious=9 \
         | inner_nodes=6,5,1,9,2,1,3 | outer_nodes=5,4,9,8,7,6,2,1,3"
    );
}

#[test]
fn test_terminal_output_mentions_every_code() {
    colored::control::set_override(false);
    let text = compute_triangle(1990, 5, 15).to_terminal_string();
    assert!(text.contains("1990-05-15"));
    assert!(text.contains("O=3"));
    assert!(text.contains("subconscious=9"));
    assert!(text.contains("father=652"));
}

#[test]
fn test_analysis_plain_output() {
    let analysis = analyze(&compute_triangle(1990, 5, 15));
    let text = analysis.to_terminal_string(true);
    assert!(text.starts_with("Main personality: 3"));
    assert!(text.contains("Outer code: 6"));
}

/// Calculator is a stateless value usable from many threads
#[test]
fn test_concurrent_use() {
    let calculator = TriangleCalculator::new();
    let expected = calculator.compute(BirthDate::new(1990, 5, 15).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                calculator.compute(BirthDate::new(1990, 5, 15).unwrap())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
