//! Output formatting for terminal display

use colored::Colorize;

use crate::types::{Analysis, TriangleResult};

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl TriangleResult {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let d = &self.original_date;
        let i = &self.inner;
        let o = &self.outer;
        let c = &self.core;

        let mut lines = Vec::new();
        lines.push(format!(
            "{}  {} {} | {} {} | {} {} {}",
            self.birth_date.to_string().bold(),
            "day".dimmed(),
            d.day_label(),
            "month".dimmed(),
            d.month_label(),
            "year".dimmed(),
            d.year_head_label(),
            d.year_tail_label(),
        ));
        lines.push(format!(
            "{} I={} J={} K={} L={} | M={} N={} | O={}",
            "inner".cyan(),
            i.i,
            i.j,
            i.k,
            i.l,
            i.m,
            i.n,
            i.o.to_string().red().bold(),
        ));
        lines.push(format!(
            "{} P={} Q={} R={} | S={} T={} U={} | V={} W={} X={}",
            "outer".cyan(),
            o.p,
            o.q,
            o.r,
            o.s,
            o.t,
            o.u,
            o.v,
            o.w,
            o.x,
        ));
        lines.push(format!(
            "{} main={} inner={} outer={} subconscious={}",
            "codes".green(),
            self.main_code().to_string().red().bold(),
            c.inner_code,
            c.outer_code,
            c.subconscious_code,
        ));
        let r = &self.readings;
        lines.push(format!(
            "{} father={} mother={} work={} family={} elder={}",
            "lines".yellow(),
            r.father,
            r.mother,
            r.work,
            r.family,
            r.elder,
        ));
        lines.join("\n")
    }

    /// Format for parseable output (no colors, single line)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "date={} | main={} | inner={} | outer={} | subconscious={} | inner_nodes={} | outer_nodes={}",
            self.birth_date,
            self.main_code(),
            self.core.inner_code,
            self.core.outer_code,
            self.core.subconscious_code,
            join(&self.inner.nodes()),
            join(&self.outer.nodes()),
        )
    }
}

impl Analysis {
    /// Format for terminal display
    pub fn to_terminal_string(&self, no_color: bool) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let heading = format!("{}: {}", section.title, section.code);
            if no_color {
                out.push_str(&heading);
            } else {
                out.push_str(&heading.bold().to_string());
            }
            out.push('\n');
            if !section.summary.is_empty() {
                out.push_str("  ");
                out.push_str(section.summary);
                out.push('\n');
            }
            out.push_str("  ");
            out.push_str(section.text);
            out.push_str("\n\n");
        }
        out.trim_end().to_string()
    }
}
