use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chargeback or fraud dispute raised against a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispute {
    pub id: i64,

    pub refund_amount: Option<i64>,

    pub currency: Option<String>,

    /// Dispute state: `awaiting-merchant-feedback`, `resolved`, etc.
    pub status: String,

    /// Resolution outcome, e.g. `merchant-accepted` or `declined`.
    pub resolution: Option<String>,

    /// Dispute category: `chargeback` or `fraud`.
    pub category: Option<String>,

    /// Numeric transaction ID on some endpoints, an expanded object on
    /// others.
    pub transaction: Option<serde_json::Value>,

    pub customer: Option<serde_json::Value>,

    pub due_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
}
