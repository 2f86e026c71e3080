use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer record, either standalone or embedded in a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,

    pub customer_code: String,

    pub email: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub phone: Option<String>,

    pub domain: Option<String>,

    pub metadata: Option<serde_json::Value>,

    /// Risk standing: `default`, `allow`, or `deny`.
    pub risk_action: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,
}
