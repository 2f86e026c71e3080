use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A refund against a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    pub id: i64,

    /// Numeric transaction ID on some endpoints, an expanded object on
    /// others.
    pub transaction: serde_json::Value,

    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,

    pub currency: Option<String>,

    /// Refund state: `pending`, `processing`, `processed`, `failed`.
    pub status: String,

    pub refunded_at: Option<DateTime<Utc>>,

    pub expected_at: Option<DateTime<Utc>>,

    pub customer_note: Option<String>,

    pub merchant_note: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}
