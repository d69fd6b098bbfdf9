use crate::comparison::{DiffReport, MatchResult, SignatureMismatch};
use crate::formatting::{create_formatter, FormattingConfig, OutputFormatter, PlainFormatter};
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DiffReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DiffReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Human-readable report: mismatch diagnostics first, then the two
/// name lists, then a one-line summary.
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, Box::new(PlainFormatter))
    }

    fn write_mismatches(&mut self, result: &MatchResult) -> anyhow::Result<()> {
        let name = self.formatter.function_name(&result.function_name);
        for mismatch in &result.mismatches {
            match mismatch {
                SignatureMismatch::ReturnType { expected, found } => writeln!(
                    self.writer,
                    "[{name}]: ret types differ: `{}` != `{}`",
                    self.formatter.expected(expected),
                    self.formatter.found(found)
                )?,
                SignatureMismatch::Parameters { expected, found } => {
                    writeln!(self.writer, "[{name}]: params differ:")?;
                    writeln!(self.writer, "=> `{}`", self.formatter.expected(expected))?;
                    writeln!(self.writer, "-> `{}`", self.formatter.found(found))?;
                }
            }
        }
        Ok(())
    }

    fn write_name_list<'a>(
        &mut self,
        title: &str,
        names: impl IntoIterator<Item = &'a String>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.section(title))?;
        for name in names {
            writeln!(self.writer, "{name}")?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &DiffReport) -> anyhow::Result<()> {
        let counts = format!(
            "{} checked, {} mismatched, {} not bound, {} extra",
            report.checked,
            report.mismatched.len(),
            report.missing.len(),
            report.extra.len()
        );
        let line = if report.is_clean() {
            self.formatter.success(&format!("OK: {counts}"))
        } else {
            self.formatter.failure(&format!("FAILED: {counts}"))
        };
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DiffReport) -> anyhow::Result<()> {
        for result in &report.mismatched {
            self.write_mismatches(result)?;
        }
        self.write_name_list("==> Not bound functions:", &report.missing)?;
        writeln!(self.writer)?;
        self.write_name_list("==> Extra (unrecognized) bindings:", &report.extra)?;
        self.write_summary(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writer for `format`, sending output to `destination` or stdout.
///
/// File output is never colored.
pub fn create_writer(
    format: OutputFormat,
    destination: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let (sink, formatting): (Box<dyn Write>, FormattingConfig) = match destination {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            (Box::new(BufWriter::new(file)) as Box<dyn Write>, FormattingConfig::plain())
        }
        None => (Box::new(std::io::stdout()) as Box<dyn Write>, formatting),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, create_formatter(formatting))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn sample_report() -> DiffReport {
        DiffReport {
            missing: BTreeSet::from(["GEOSFunc".to_string(), "GEOSArea".to_string()]),
            extra: BTreeSet::from(["G".to_string()]),
            mismatched: vec![MatchResult::new(
                "F",
                vec![
                    SignatureMismatch::ReturnType {
                        expected: "c_int".to_string(),
                        found: "c_uint".to_string(),
                    },
                    SignatureMismatch::Parameters {
                        expected: "*const c_double".to_string(),
                        found: "*mut c_double".to_string(),
                    },
                ],
            )],
            checked: 1,
        }
    }

    fn render_terminal(report: &DiffReport) -> String {
        let mut buffer = Vec::new();
        TerminalWriter::plain(&mut buffer).write_report(report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_report_layout() {
        assert_eq!(
            render_terminal(&sample_report()),
            indoc! {"
                [F]: ret types differ: `c_int` != `c_uint`
                [F]: params differ:
                => `*const c_double`
                -> `*mut c_double`
                ==> Not bound functions:
                GEOSArea
                GEOSFunc

                ==> Extra (unrecognized) bindings:
                G
                FAILED: 1 checked, 1 mismatched, 2 not bound, 1 extra
            "}
        );
    }

    #[test]
    fn test_terminal_clean_report() {
        let report = DiffReport {
            checked: 3,
            ..Default::default()
        };
        assert_eq!(
            render_terminal(&report),
            indoc! {"
                ==> Not bound functions:

                ==> Extra (unrecognized) bindings:
                OK: 3 checked, 0 mismatched, 0 not bound, 0 extra
            "}
        );
    }

    #[test]
    fn test_json_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["missing"], serde_json::json!(["GEOSArea", "GEOSFunc"]));
        assert_eq!(value["extra"], serde_json::json!(["G"]));
        assert_eq!(value["checked"], 1);
        let mismatches = &value["mismatched"][0]["mismatches"];
        assert_eq!(mismatches[0]["kind"], "return_type");
        assert_eq!(mismatches[1]["kind"], "parameters");
        assert_eq!(mismatches[1]["found"], "*mut c_double");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("terminal"), Some(OutputFormat::Terminal));
        assert_eq!(OutputFormat::parse("markdown"), None);
    }

    #[test]
    fn test_file_destination() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        {
            let mut writer =
                create_writer(OutputFormat::Terminal, Some(&path), FormattingConfig::default())
                    .unwrap();
            writer.write_report(&sample_report()).unwrap();
        }
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[F]: ret types differ"));
        assert!(!written.contains('\u{1b}'));
    }
}
