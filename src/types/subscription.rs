use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Authorization;

/// A subscription tying a customer to a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,

    pub subscription_code: String,

    /// Token required alongside the code to enable or disable the
    /// subscription.
    pub email_token: Option<String>,

    /// Subscription state: `active`, `non-renewing`, `cancelled`, etc.
    pub status: String,

    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,

    pub quantity: Option<i64>,

    /// Numeric customer ID on some endpoints, an expanded object on others.
    pub customer: Option<serde_json::Value>,

    /// Numeric plan ID on some endpoints, an expanded object on others.
    pub plan: Option<serde_json::Value>,

    pub authorization: Option<Authorization>,

    pub next_payment_date: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
}
