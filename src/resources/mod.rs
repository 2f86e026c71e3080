mod customer;
pub use self::customer::{CreateCustomerRequest, Customers, UpdateCustomerRequest};

mod dispute;
pub use self::dispute::{Disputes, UpdateDisputeRequest};

mod plan;
pub use self::plan::{CreatePlanRequest, Plans};

mod refund;
pub use self::refund::{CreateRefundRequest, Refunds};

mod subscription;
pub use self::subscription::{CreateSubscriptionRequest, Subscriptions, ToggleSubscriptionRequest};

mod transaction;
pub use self::transaction::{
    ChargeAuthorizationRequest, InitializeTransactionRequest, Transactions,
};

mod transfer;
pub use self::transfer::{CreateRecipientRequest, InitiateTransferRequest, Transfers};
