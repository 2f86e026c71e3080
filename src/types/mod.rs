mod transaction;
pub use self::transaction::{Authorization, Transaction, TransactionAccess};

mod customer;
pub use self::customer::Customer;

mod plan;
pub use self::plan::{Interval, Plan};

mod subscription;
pub use self::subscription::Subscription;

mod transfer;
pub use self::transfer::{Recipient, RecipientDetails, Transfer};

mod refund;
pub use self::refund::Refund;

mod dispute;
pub use self::dispute::Dispute;
