use std::io::{self, Write};
use std::time::SystemTime;

use acmewin_client::WindowId;
use acmewin_engine::WindowRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<label>\t<name>` lines.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// How the dirty state is spelled in human output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// `true` / `false`
    #[default]
    Bool,
    /// `dirty` / `clean`
    DirtyClean,
}

impl LabelStyle {
    pub fn label(self, dirty: bool) -> &'static str {
        match (self, dirty) {
            (LabelStyle::Bool, true) => "true",
            (LabelStyle::Bool, false) => "false",
            (LabelStyle::DirtyClean, true) => "dirty",
            (LabelStyle::DirtyClean, false) => "clean",
        }
    }
}

/// Configuration for printing a window report.
#[derive(Debug, Clone, Default)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub label: LabelStyle,
    /// Emit one empty line before the listing (human output only).
    pub leading_blank: bool,
}

/// Static context about a print run.
#[derive(Debug)]
pub struct ReportContext<'a> {
    /// Name of the command producing the report
    pub kind: &'a str,
}

/// One row in the report.
#[derive(Debug)]
pub struct ReportRow<'a> {
    /// 1-based position in the ranked listing.
    pub rank: usize,
    pub record: &'a WindowRecord,
}

/// Trait for printing window reports.
///
/// Implementations receive the ranked rows one at a time and are
/// responsible for formatting them.
pub trait ReportPrinter {
    /// Called once before any rows are printed.
    fn begin(&mut self, ctx: &ReportContext) -> io::Result<()>;

    fn print_row(&mut self, row: &ReportRow<'_>, ctx: &ReportContext) -> io::Result<()>;

    /// Called once after all rows are printed.
    fn finish(&mut self, ctx: &ReportContext) -> io::Result<()>;
}

pub struct HumanPrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        Self { out, cfg }
    }
}

impl<W: Write> ReportPrinter for HumanPrinter<W> {
    fn begin(&mut self, _ctx: &ReportContext) -> io::Result<()> {
        if self.cfg.leading_blank {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn print_row(&mut self, row: &ReportRow<'_>, _ctx: &ReportContext) -> io::Result<()> {
        writeln!(
            self.out,
            "{}\t{}",
            self.cfg.label.label(row.record.dirty),
            row.record.name
        )
    }

    fn finish(&mut self, _ctx: &ReportContext) -> io::Result<()> {
        self.out.flush()
    }
}

pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    kind: &'a str,
    rank: usize,
    id: WindowId,
    name: &'a str,
    dirty: bool,
    /// RFC 3339, UTC; `null` when the window has no file on disk.
    mtime: Option<String>,
}

fn format_mtime(t: SystemTime) -> String {
    DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl<W: Write> ReportPrinter for JsonPrinter<W> {
    fn begin(&mut self, _ctx: &ReportContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &ReportRow<'_>, ctx: &ReportContext) -> io::Result<()> {
        let obj = JsonRow {
            kind: ctx.kind,
            rank: row.rank,
            id: row.record.id,
            name: &row.record.name,
            dirty: row.record.dirty,
            mtime: row.record.mod_time.map(format_mtime),
        };
        serde_json::to_writer(&mut self.out, &obj)?;
        writeln!(self.out)
    }

    fn finish(&mut self, _ctx: &ReportContext) -> io::Result<()> {
        self.out.flush()
    }
}

/// Render the whole report in memory so nothing is emitted if a later step
/// fails.
pub fn render(kind: &str, records: &[WindowRecord], cfg: &PrinterConfig) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut printer: Box<dyn ReportPrinter + '_> = match cfg.format {
            OutputFormat::Human => Box::new(HumanPrinter::new(&mut buf, cfg.clone())),
            OutputFormat::Json => Box::new(JsonPrinter::new(&mut buf)),
        };

        let ctx = ReportContext { kind };

        printer.begin(&ctx)?;
        for (i, record) in records.iter().enumerate() {
            let row = ReportRow { rank: i + 1, record };
            printer.print_row(&row, &ctx)?;
        }
        printer.finish(&ctx)?;
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
