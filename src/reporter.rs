use std::io::Write;

use crate::domain::{Error, ErrorReporter};

#[derive(Debug)]
pub struct StdErrReporter<W: Write> {
    err: W,
}

impl StdErrReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self {
            err: std::io::stderr(),
        }
    }
}

impl<W: Write> ErrorReporter for StdErrReporter<W> {
    fn report(&mut self, error: &Error) {
        let _ = writeln!(self.err, "Transaction Error: {}", error);
    }
}
