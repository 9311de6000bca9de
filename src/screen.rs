use std::io::Write;

use crate::domain::{Money, Screen};

const HELP: &str = "\
Commands:
  withdraw <amount>   (w)  take money out
  deposit <amount>    (d)  put money in
  balance             (b)  show the current balance
  help                (?)  show this list
  quit                (q)  leave";

/// Writes the balance label and confirmations to any writer, stdout by default.
#[derive(Debug)]
pub struct ConsoleScreen<W: Write> {
    out: W,
}

impl ConsoleScreen<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) {
        // a closed stdout leaves nothing to tell the user
        let _ = writeln!(self.out, "{}", text);
    }
}

pub fn balance_text(balance: Money) -> String {
    format!("Current Balance: ${}", balance)
}

impl<W: Write> Screen for ConsoleScreen<W> {
    fn update_balance(&mut self, balance: Money) {
        self.line(&balance_text(balance));
    }

    fn show_balance(&mut self, balance: Money) {
        self.line("Account Balance");
        self.line(&balance_text(balance));
    }

    fn show_success(&mut self, message: &str) {
        self.line(message);
    }

    fn show_help(&mut self) {
        self.line(HELP);
    }
}
