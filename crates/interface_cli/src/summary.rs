//! Information summary shown at the end of a session

use domain_identity::{Field, RecordBuilder, ValidatedRecord};
use serde::Serialize;

use crate::config::SummaryFormat;
use crate::error::SessionError;

/// State of one field in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Valid,
    Failed,
    NotCollected,
}

impl FieldStatus {
    fn mark(&self) -> &'static str {
        match self {
            FieldStatus::Valid => "✓",
            FieldStatus::Failed => "❌",
            FieldStatus::NotCollected => "-",
        }
    }
}

/// One line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub field: Field,
    pub value: Option<String>,
    pub status: FieldStatus,
}

/// Per-field overview of what was collected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    /// Summary of a completed session: every field valid
    pub fn completed(record: &ValidatedRecord) -> Self {
        let lines = Field::COLLECTION_ORDER
            .into_iter()
            .map(|field| SummaryLine {
                field,
                value: Some(record.display_value(field)),
                status: FieldStatus::Valid,
            })
            .collect();
        Self { lines }
    }

    /// Summary of a session aborted on `failed`
    pub fn aborted(collected: &RecordBuilder, failed: Field) -> Self {
        let lines = Field::COLLECTION_ORDER
            .into_iter()
            .map(|field| {
                let value = collected.display_value(field);
                let status = if field == failed {
                    FieldStatus::Failed
                } else if value.is_some() {
                    FieldStatus::Valid
                } else {
                    FieldStatus::NotCollected
                };
                SummaryLine {
                    field,
                    value,
                    status,
                }
            })
            .collect();
        Self { lines }
    }

    /// Returns the line for `field`
    pub fn line(&self, field: Field) -> Option<&SummaryLine> {
        self.lines.iter().find(|line| line.field == field)
    }

    /// Renders the summary in the requested format
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Serialize` if JSON rendering fails
    pub fn render(&self, format: SummaryFormat) -> Result<String, SessionError> {
        match format {
            SummaryFormat::Text => Ok(self.render_text()),
            SummaryFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Renders the `Information Summary:` block
    pub fn render_text(&self) -> String {
        let mut text = String::from("Information Summary:");
        for line in &self.lines {
            let value = line.value.as_deref().unwrap_or("-");
            match line.status {
                FieldStatus::NotCollected => {
                    text.push_str(&format!("\n{}: {}", line.field, value));
                }
                status => {
                    text.push_str(&format!("\n{}: {} {}", line.field, value, status.mark()));
                }
            }
        }
        text
    }
}
