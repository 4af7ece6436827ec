use crate::utils::error::{Result, SolidError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// One dispatch result, labelled with the entity it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub index: usize,
    pub entity: String,
    pub value: String,
}

impl ReportRow {
    pub fn new(index: usize, entity: impl Into<String>, value: impl ToString) -> Self {
        Self {
            index,
            entity: entity.into(),
            value: value.to_string(),
        }
    }
}

pub fn render(rows: &[ReportRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}\n", row.value))
            .collect()),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in rows {
                writer.serialize(row)?;
            }
            let bytes = writer.into_inner().map_err(|e| SolidError::Io(e.into_error()))?;
            String::from_utf8(bytes).map_err(|e| SolidError::Config {
                message: format!("CSV output is not UTF-8: {}", e),
            })
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow::new(0, "Leo", "roar"),
            ReportRow::new(1, "Jerry", "squeak"),
        ]
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&rows(), OutputFormat::Text).unwrap(), "roar\nsqueak\n");
    }

    #[test]
    fn test_render_csv_has_header() {
        let csv = render(&rows(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["index,entity,value", "0,Leo,roar", "1,Jerry,squeak"]);
    }

    #[test]
    fn test_render_json() {
        let json = render(&rows(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1]["value"], "squeak");
        assert_eq!(parsed[0]["entity"], "Leo");
    }
}
