pub mod account;
pub mod command;
pub mod error;
pub mod money;
pub mod traits;

pub use account::Account;
pub use command::Command;
pub use error::{Error, TransactionError};
pub use money::Money;
pub use traits::{CommandStream, ErrorReporter, Screen};
