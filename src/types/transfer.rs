use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transfer of funds to a recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,

    pub transfer_code: String,

    pub reference: Option<String>,

    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,

    pub currency: String,

    /// Funding source, currently always `balance`.
    pub source: String,

    pub reason: Option<String>,

    /// Transfer state: `pending`, `success`, `failed`, `reversed`, etc.
    pub status: String,

    /// Numeric recipient ID on some endpoints, an expanded object on others.
    pub recipient: Option<serde_json::Value>,

    pub transferred_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
}

/// A transfer recipient created via `POST /transferrecipient`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: i64,

    pub recipient_code: String,

    /// Recipient kind: `nuban`, `mobile_money`, or `basa`.
    #[serde(rename = "type")]
    pub recipient_type: String,

    pub name: String,

    pub currency: String,

    pub active: Option<bool>,

    pub description: Option<String>,

    pub details: Option<RecipientDetails>,

    pub created_at: Option<DateTime<Utc>>,
}

/// Bank account details attached to a recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientDetails {
    pub account_number: Option<String>,

    pub account_name: Option<String>,

    pub bank_code: Option<String>,

    pub bank_name: Option<String>,
}
