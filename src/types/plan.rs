use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A billing plan as returned by the `/plan` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,

    pub name: String,

    pub plan_code: String,

    pub description: Option<String>,

    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,

    pub interval: Interval,

    pub currency: String,

    pub send_invoices: Option<bool>,

    pub send_sms: Option<bool>,

    pub hosted_page: Option<bool>,

    pub created_at: Option<DateTime<Utc>>,
}

/// Billing interval for plans and subscriptions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}
impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Interval::Hourly => "hourly",
                Interval::Daily => "daily",
                Interval::Weekly => "weekly",
                Interval::Monthly => "monthly",
                Interval::Quarterly => "quarterly",
                Interval::Biannually => "biannually",
                Interval::Annually => "annually",
            }
        )
    }
}
