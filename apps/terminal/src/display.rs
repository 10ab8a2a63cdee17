//! # Terminal Display
//!
//! Writes snapshots, notices and errors to an output stream, either as a
//! human-readable block or as one JSON object per line.
//!
//! ## Text Output
//! ```text
//! Check amount:      $50.00
//! Tip:               15%
//! Number of people:  2
//! Tip amount:        $7.50
//! Grand total:       $57.50
//! Amount per person: $28.75
//! ```
//!
//! ## JSON Output
//! ```json
//! {"currencyCode":"USD","inputs":{...},"totals":{...}}
//! ```

use serde::Serialize;
use std::io::Write;

use crate::error::{AppError, AppResult};
use crate::state::{AppConfig, DisplaySink, OutputFormat, SplitSnapshot};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSnapshot<'a> {
    currency_code: &'a str,
    #[serde(flatten)]
    snapshot: &'a SplitSnapshot,
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a AppError,
}

#[derive(Serialize)]
struct JsonNotice<'a> {
    notice: &'a str,
}

/// Display collaborator backed by any `Write`.
pub struct TerminalDisplay<W: Write> {
    out: W,
    config: AppConfig,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, config: AppConfig) -> Self {
        TerminalDisplay { out, config }
    }

    /// Writes an informational message (help text, tip list).
    pub fn notice(&mut self, message: &str) -> AppResult<()> {
        match self.config.output {
            OutputFormat::Text => writeln!(self.out, "{}", message)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonNotice { notice: message })?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes a rejected-input error.
    pub fn error(&mut self, err: &AppError) -> AppResult<()> {
        match self.config.output {
            OutputFormat::Text => writeln!(self.out, "error: {}", err.message)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonError { error: err })?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Hands back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_text(&mut self, snapshot: &SplitSnapshot) -> AppResult<()> {
        let inputs = &snapshot.inputs;
        let totals = &snapshot.totals;

        let amount = self.config.format_amount(inputs.check_amount.value())?;
        let tip_amount = self.config.format_amount(totals.tip_amount)?;
        let grand_total = self.config.format_amount(totals.grand_total)?;
        let per_person = self.config.format_amount(totals.amount_per_person)?;

        writeln!(self.out, "Check amount:      {}", amount)?;
        writeln!(self.out, "Tip:               {}", inputs.tip_percentage)?;
        writeln!(self.out, "Number of people:  {}", inputs.party_size.count())?;
        writeln!(self.out, "Tip amount:        {}", tip_amount)?;
        writeln!(self.out, "Grand total:       {}", grand_total)?;
        writeln!(self.out, "Amount per person: {}", per_person)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn render_json(&mut self, snapshot: &SplitSnapshot) -> AppResult<()> {
        let payload = JsonSnapshot {
            currency_code: &self.config.currency_code,
            snapshot,
        };
        serde_json::to_writer(&mut self.out, &payload)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn render(&mut self, snapshot: &SplitSnapshot) -> AppResult<()> {
        match self.config.output {
            OutputFormat::Text => self.render_text(snapshot)?,
            OutputFormat::Json => self.render_json(snapshot)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
