mod client;
mod errors;
mod query;
mod resources;
mod response;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::ListQuery;
pub use self::resources::{
    ChargeAuthorizationRequest, CreateCustomerRequest, CreatePlanRequest, CreateRecipientRequest,
    CreateRefundRequest, CreateSubscriptionRequest, Customers, Disputes,
    InitializeTransactionRequest, InitiateTransferRequest, Plans, Refunds, Subscriptions,
    ToggleSubscriptionRequest, Transactions, Transfers, UpdateCustomerRequest,
    UpdateDisputeRequest,
};
pub use self::response::{Envelope, Meta, Response};
