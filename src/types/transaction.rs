use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Customer;

/// A transaction as returned by the `/transaction` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,

    pub domain: String,

    /// Transaction state as reported by the API: `success`, `failed`,
    /// `abandoned`, etc.
    pub status: String,

    pub reference: String,

    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,

    pub message: Option<String>,

    pub gateway_response: Option<String>,

    pub paid_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,

    pub channel: Option<String>,

    pub currency: String,

    pub ip_address: Option<String>,

    /// Free-form metadata; the API returns an empty string when unset.
    pub metadata: Option<serde_json::Value>,

    pub fees: Option<i64>,

    pub customer: Option<Customer>,

    pub authorization: Option<Authorization>,

    /// Plan reference; an empty string when the transaction is not tied to
    /// a plan, an object otherwise.
    pub plan: Option<serde_json::Value>,
}

/// Checkout handoff returned by `POST /transaction/initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionAccess {
    pub authorization_url: String,

    pub access_code: String,

    pub reference: String,
}

/// A stored card authorization, reusable for follow-up charges when
/// `reusable` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    pub authorization_code: Option<String>,

    pub bin: Option<String>,

    pub last4: Option<String>,

    pub exp_month: Option<String>,

    pub exp_year: Option<String>,

    pub channel: Option<String>,

    pub card_type: Option<String>,

    pub bank: Option<String>,

    pub country_code: Option<String>,

    pub brand: Option<String>,

    pub reusable: Option<bool>,

    pub signature: Option<String>,
}
