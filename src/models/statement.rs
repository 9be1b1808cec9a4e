//! Statement metadata.
//!
//! Statements are generated and stored elsewhere; this service only lists
//! what exists for a user and where the document lives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a statement record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Statement {
    pub id: Uuid,

    /// User the statement was generated for
    pub user_id: Uuid,

    /// Period the statement covers; unset for statements still being generated
    pub date: Option<DateTime<Utc>>,

    /// Reference to the generated document
    pub document_path: String,
}

impl Statement {
    /// Short month label such as `"Oct, 2026"`.
    pub fn format_date(&self) -> Option<String> {
        self.date.map(|date| date.format("%b, %Y").to_string())
    }
}

/// Response body for `GET /api/v1/statements`.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "date": "2026-09-30T00:00:00Z",
///   "label": "Sep, 2026",
///   "document_path": "statements/2026-09.pdf"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct StatementResponse {
    pub id: Uuid,
    pub date: Option<DateTime<Utc>>,
    pub label: Option<String>,
    pub document_path: String,
}

impl From<Statement> for StatementResponse {
    fn from(statement: Statement) -> Self {
        Self {
            label: statement.format_date(),
            id: statement.id,
            date: statement.date,
            document_path: statement.document_path,
        }
    }
}
