mod alert;
mod threshold;
mod transaction;

pub use alert::{Alert, AlertSink};
pub use threshold::CategoryThreshold;
pub use transaction::Transaction;
