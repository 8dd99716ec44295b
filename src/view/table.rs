use crate::domain::model::ServiceRecord;
use crate::utils::error::Result;
use serde_json::Value;

pub const HEADERS: [&str; 2] = ["Service Name", "Usage"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRow {
    pub key: String,
    pub cells: [String; 2],
}

/// The services table: one row per record, in the order received.
#[derive(Debug, Clone)]
pub struct ServiceTable {
    records: Vec<ServiceRecord>,
    rows: Vec<ServiceRow>,
}

impl ServiceTable {
    pub fn from_services(services: &[ServiceRecord]) -> Self {
        let rows = services
            .iter()
            .map(|svc| ServiceRow {
                key: svc.display_key().to_string(),
                cells: [
                    cell_text(svc.field("serviceName")),
                    cell_text(svc.usage()),
                ],
            })
            .collect();

        Self {
            records: services.to_vec(),
            rows,
        }
    }

    pub fn rows(&self) -> &[ServiceRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text table with a header and a separator line.
    pub fn render(&self) -> Vec<String> {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_line(&HEADERS.map(str::to_string), &widths));
        lines.push(format!(
            "{}-+-{}",
            "-".repeat(widths[0]),
            "-".repeat(widths[1])
        ));
        for row in &self.rows {
            lines.push(format_line(&row.cells, &widths));
        }
        lines
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADERS)?;
        for row in &self.rows {
            writer.write_record(&row.cells)?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// Records as received, pretty-printed.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

fn format_line(cells: &[String; 2], widths: &[usize; 2]) -> String {
    let line = format!(
        "{:<w0$} | {:<w1$}",
        cells[0],
        cells[1],
        w0 = widths[0],
        w1 = widths[1]
    );
    line.trim_end().to_string()
}

/// 儲存格文字：字串不加引號，缺值為空白
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.split_whitespace().collect::<Vec<_>>().join(" "),
        Some(other) => other.to_string(),
    }
}
