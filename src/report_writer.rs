use crate::error::Result;
use crate::types::EnvReport;

use csv::Writer;
use std::io::Write;
use std::str::FromStr;
use tabular::{Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!(
                "unknown report format '{other}' (expected table, json or csv)"
            )),
        }
    }
}

pub struct ReportWriter;

impl ReportWriter {
    ///
    /// # write
    /// Write a presence report in the requested format.
    ///
    /// ## Arguments
    /// * `report` - Report to write
    /// * `format` - Output format
    /// * `out` - Destination
    pub fn write<W: Write>(report: &EnvReport, format: ReportFormat, out: &mut W) -> Result<()> {
        match format {
            ReportFormat::Table => Self::write_table(report, out),
            ReportFormat::Json => Self::write_json(report, out),
            ReportFormat::Csv => Self::write_csv(report, out),
        }
    }

    ///
    /// # write_table
    /// Write the report as aligned `KEY  SERVICE  STATUS` columns.
    fn write_table<W: Write>(report: &EnvReport, out: &mut W) -> Result<()> {
        let mut table = Table::new("{:<}  {:<}  {:<}");
        table.add_row(
            Row::new()
                .with_cell("KEY")
                .with_cell("SERVICE")
                .with_cell("STATUS"),
        );

        for status in &report.keys {
            table.add_row(
                Row::new()
                    .with_cell(&status.key)
                    .with_cell(status.service)
                    .with_cell(status.status_label()),
            );
        }

        write!(out, "{table}")?;
        Ok(())
    }

    ///
    /// # write_json
    /// Write the report as pretty-printed JSON.
    fn write_json<W: Write>(report: &EnvReport, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }

    ///
    /// # write_csv
    /// Write one `key,service,present` row per required key.
    fn write_csv<W: Write>(report: &EnvReport, out: &mut W) -> Result<()> {
        let mut writer = Writer::from_writer(out);

        for status in &report.keys {
            writer.serialize(status)?;
        }

        writer.flush()?;
        Ok(())
    }
}
