//! Report generation for sweep results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::SweepResult;

/// CSV exporter for sweep results.
///
/// One row per beam width with attempt, success and rate columns.
///
/// # Example
///
/// ```
/// use queenbeam_bench::{CsvExporter, SweepResult};
///
/// let result = SweepResult::new(8);
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.contains("beam_width,attempts,successes,success_rate"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a sweep result to a CSV string.
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();

        writeln!(output, "beam_width,attempts,successes,success_rate").unwrap();
        for tally in &result.widths {
            writeln!(
                output,
                "{},{},{},{:.4}",
                tally.beam_width,
                tally.attempts,
                tally.successes,
                tally.success_rate(),
            )
            .unwrap();
        }

        output
    }

    /// Exports a sweep result to a CSV file.
    pub fn to_file(result: &SweepResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a sweep result as CSV to a writer.
    pub fn write<W: Write>(result: &SweepResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a human-readable summary with one table row per beam width.
///
/// # Example
///
/// ```
/// use queenbeam_bench::{MarkdownReport, SweepResult, WidthResult};
///
/// let mut result = SweepResult::new(8);
/// let mut tally = WidthResult::new(10);
/// tally.record(true);
/// tally.record(false);
/// result.push(tally);
///
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Beam Width Sweep"));
/// assert!(md.contains("| Beam width |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &SweepResult) -> String {
        let mut output = String::new();

        writeln!(output, "# Beam Width Sweep").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "- **Board size**: {} queens", result.board_size).unwrap();
        writeln!(output, "- **Widths tested**: {}", result.widths.len()).unwrap();
        writeln!(output).unwrap();

        if result.widths.is_empty() {
            writeln!(output, "*No widths swept.*").unwrap();
            return output;
        }

        writeln!(output, "| Beam width | Attempts | Successes | Success rate |").unwrap();
        writeln!(output, "|------------|----------|-----------|--------------|").unwrap();
        for tally in &result.widths {
            writeln!(
                output,
                "| {} | {} | {} | {:.1}% |",
                tally.beam_width,
                tally.attempts,
                tally.successes,
                tally.success_rate() * 100.0,
            )
            .unwrap();
        }

        if let Some(best) = result.best_width() {
            writeln!(output).unwrap();
            writeln!(
                output,
                "Best width: **{}** at {:.1}% success.",
                best.beam_width,
                best.success_rate() * 100.0
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(result: &SweepResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(result: &SweepResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::WidthResult;

    fn sample_result() -> SweepResult {
        let mut result = SweepResult::new(8);
        let mut narrow = WidthResult::new(1);
        narrow.record(false);
        narrow.record(true);
        let mut wide = WidthResult::new(50);
        wide.record(true);
        wide.record(true);
        result.push(narrow);
        result.push(wide);
        result
    }

    #[test]
    fn test_csv_layout() {
        let csv = CsvExporter::to_string(&sample_result());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "beam_width,attempts,successes,success_rate");
        assert_eq!(lines[1], "1,2,1,0.5000");
        assert_eq!(lines[2], "50,2,2,1.0000");
    }

    #[test]
    fn test_markdown_contains_table_and_best_width() {
        let md = MarkdownReport::to_string(&sample_result());

        assert!(md.contains("# Beam Width Sweep"));
        assert!(md.contains("| 1 | 2 | 1 | 50.0% |"));
        assert!(md.contains("| 50 | 2 | 2 | 100.0% |"));
        assert!(md.contains("Best width: **50**"));
    }

    #[test]
    fn test_markdown_empty_result() {
        let md = MarkdownReport::to_string(&SweepResult::new(4));
        assert!(md.contains("*No widths swept.*"));
    }
}
