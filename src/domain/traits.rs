use futures::Stream;

use crate::domain::{Command, Error, Money};

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

/// Where successful outcomes are shown.
pub trait Screen {
    /// Refreshes the always-visible balance label.
    fn update_balance(&mut self, balance: Money);

    /// The answer to an explicit balance check.
    fn show_balance(&mut self, balance: Money);

    fn show_success(&mut self, message: &str);

    fn show_help(&mut self);
}

pub trait ErrorReporter {
    fn report(&mut self, error: &Error);
}
