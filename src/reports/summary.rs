//! Summary and table reporters for terminal output.

use super::{MatchReport, ReportError, ReportFormat, ReportGenerator};
use crate::matching::Verdict;
use unicode_width::UnicodeWidthStr;

/// Wrap `text` in an ANSI escape for `color` when `colored` is set.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Strong => "green",
        Verdict::Good => "cyan",
        Verdict::Possible => "yellow",
        Verdict::Weak => "red",
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn render_report(&self, report: &MatchReport, lines: &mut Vec<String>) {
        lines.push(format!(
            "{} {} {} {}",
            self.color("Matches for", "bold"),
            report.query_kind,
            self.color(&report.query_id.to_string(), "bold"),
            report.query_name
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} {} (top {}, threshold {:.1})",
            self.color("Pool:", "cyan"),
            report.pool_size,
            plural(report.pool_size, "candidate", "candidates"),
            report.config.top_n,
            report.config.threshold
        ));

        if report.matches.is_empty() {
            lines.push(format!("  {}", self.color("No matches", "dim")));
            return;
        }

        for m in &report.matches {
            let verdict = m.matched.explanation.verdict;
            lines.push(format!(
                "  {}. {} {}  {}",
                m.rank,
                self.color(&m.matched.candidate.candidate_id.to_string(), "bold"),
                m.name,
                self.color(&format!("{:.1}%", m.matched.candidate.confidence), verdict_color(verdict))
            ));
            lines.push(format!(
                "     {} / {}",
                self.color(&m.category, "dim"),
                self.color(&m.location, "dim")
            ));
            for line in m.matched.explanation.detailed().lines() {
                lines.push(format!("     {line}"));
            }
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, reports: &[MatchReport]) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        if reports.is_empty() {
            lines.push(self.color("No query items", "dim"));
            return Ok(lines.join("\n"));
        }

        for (idx, report) in reports.iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            self.render_report(report, &mut lines);
        }

        if reports.len() > 1 {
            let with_matches = reports.iter().filter(|r| r.has_matches()).count();
            lines.push(String::new());
            lines.push(format!(
                "{}  {with_matches} of {} {} matched",
                self.color("Total:", "cyan"),
                reports.len(),
                plural(reports.len(), "item", "items")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Compact aligned table, one row per ranked candidate.
pub struct TableReporter {
    colored: bool,
}

const TABLE_HEADERS: [&str; 8] = ["QUERY", "RANK", "MATCH", "NAME", "CONF", "DESC", "CAT", "LOC"];

impl TableReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Pad by display width so wide characters stay aligned.
    fn pad(text: &str, width: usize) -> String {
        let padding = width.saturating_sub(text.width());
        format!("{text}{}", " ".repeat(padding))
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(&self, reports: &[MatchReport]) -> Result<String, ReportError> {
        let mut rows: Vec<(Verdict, [String; 8])> = Vec::new();
        for report in reports {
            for m in &report.matches {
                let c = &m.matched.candidate;
                rows.push((
                    m.matched.explanation.verdict,
                    [
                        report.query_id.to_string(),
                        m.rank.to_string(),
                        c.candidate_id.to_string(),
                        m.name.clone(),
                        format!("{:.1}", c.confidence),
                        format!("{:.1}", c.description),
                        format!("{:.1}", c.category),
                        format!("{:.1}", c.location),
                    ],
                ));
            }
        }

        if rows.is_empty() {
            return Ok(ansi_color("No matches", "dim", self.colored));
        }

        let mut widths = TABLE_HEADERS.map(|h| h.width());
        for (_, cells) in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.width());
            }
        }

        let header: Vec<String> = TABLE_HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| Self::pad(h, w))
            .collect();
        let mut lines = vec![ansi_color(header.join("  ").trim_end(), "bold", self.colored)];

        for (verdict, cells) in &rows {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(idx, (cell, w))| {
                    let text = Self::pad(cell, w);
                    // colour only the confidence column
                    if idx == 4 {
                        ansi_color(&text, verdict_color(*verdict), self.colored)
                    } else {
                        text
                    }
                })
                .collect();
            lines.push(padded.join("  ").trim_end().to_string());
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{ItemMatcher, MatchConfig, TfidfMatcher};
    use crate::model::Item;

    fn sample_report() -> MatchReport {
        let query = Item::lost(1, "Electronics", "Phone", "Student Center")
            .with_description("black phone with cracked screen");
        let pool = vec![
            Item::found(20, "Electronics", "Phone", "Student Center")
                .with_description("black phone with cracked screen"),
            Item::found(21, "Clothing", "Scarf", "Gym"),
        ];
        let matcher = TfidfMatcher::new(MatchConfig::default());
        MatchReport::new(&query, &pool, matcher.config(), matcher.find_explained_matches(&query, &pool))
    }

    #[test]
    fn test_summary_no_color() {
        let output = SummaryReporter::new()
            .no_color()
            .generate(&[sample_report()])
            .unwrap();
        assert!(output.contains("Matches for lost #1 Phone"));
        assert!(output.contains("1. #20 Phone"));
        assert!(output.contains("strong match"));
        assert!(output.contains("+ exact category match"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_summary_empty_matches() {
        let query = Item::lost(1, "Books", "Novel", "Library");
        let report = MatchReport::new(&query, &[], MatchConfig::default(), Vec::new());
        let output = SummaryReporter::new().no_color().generate(&[report]).unwrap();
        assert!(output.contains("No matches"));
        assert!(output.contains("0 candidates"));
    }

    #[test]
    fn test_summary_colored_output() {
        let output = SummaryReporter::new().generate(&[sample_report()]).unwrap();
        assert!(output.contains("\x1b[1m"));
    }

    #[test]
    fn test_table_alignment() {
        let output = TableReporter::new().no_color().generate(&[sample_report()]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("QUERY"));
        let header_conf = lines[0].find("CONF").unwrap();
        assert_eq!(&lines[1][header_conf..header_conf + 5], "100.0");
    }

    #[test]
    fn test_table_empty() {
        let output = TableReporter::new().no_color().generate(&[]).unwrap();
        assert_eq!(output, "No matches");
    }
}
