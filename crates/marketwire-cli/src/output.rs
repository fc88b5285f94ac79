use std::io::{self, Write};

use serde::Serialize;
use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct EnvelopeMeta {
    pub command: &'static str,
    pub generated_at: String,
    pub latency_ms: u64,
    pub row_count: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub meta: EnvelopeMeta,
    pub data: Value,
}

impl Envelope {
    pub fn new(command: &'static str, result: CommandResult) -> Self {
        let row_count = match &result.data {
            Value::Array(rows) => rows.len(),
            Value::Null => 0,
            _ => 1,
        };
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"));

        Self {
            meta: EnvelopeMeta {
                command,
                generated_at,
                latency_ms: result.latency_ms,
                row_count,
                warnings: result.warnings,
            },
            data: result.data,
        }
    }
}

pub fn render(envelope: &Envelope, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => render_ndjson(&mut out, envelope)?,
        OutputFormat::Table => render_table(&mut out, envelope)?,
    }

    for warning in &envelope.meta.warnings {
        log::warn!("{warning}");
    }
    Ok(())
}

fn render_ndjson(out: &mut impl Write, envelope: &Envelope) -> Result<(), CliError> {
    match &envelope.data {
        Value::Array(rows) => {
            for row in rows {
                writeln!(out, "{}", serde_json::to_string(row)?)?;
            }
        }
        other => writeln!(out, "{}", serde_json::to_string(other)?)?,
    }
    Ok(())
}

fn render_table(out: &mut impl Write, envelope: &Envelope) -> Result<(), CliError> {
    match &envelope.data {
        Value::Array(rows) => render_rows(out, rows)?,
        Value::Object(record) => render_record(out, record)?,
        other => writeln!(out, "{}", cell(other))?,
    }

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }
    Ok(())
}

/// Columns come from the first row; every row is expected to share them.
fn render_rows(out: &mut impl Write, rows: &[Value]) -> Result<(), CliError> {
    let Some(Value::Object(first)) = rows.first() else {
        writeln!(out, "(no rows)")?;
        return Ok(());
    };

    let columns = first.keys().cloned().collect::<Vec<_>>();
    let cells = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column).map(cell).unwrap_or_default())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].len())
                .chain(std::iter::once(column.len()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    write_line(out, columns.iter().map(String::as_str), &widths)?;
    for row in &cells {
        write_line(out, row.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn render_record(out: &mut impl Write, record: &Map<String, Value>) -> Result<(), CliError> {
    let width = record.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in record {
        writeln!(out, "{key:<width$} : {}", cell(value))?;
    }
    Ok(())
}

fn write_line<'a>(
    out: &mut impl Write,
    values: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> Result<(), CliError> {
    let line = values
        .zip(widths.iter().copied())
        .map(|(value, width)| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
