/// One user action. Amounts stay as raw text until the engine parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Withdraw { amount: String },
    Deposit { amount: String },
    CheckBalance,
    Help,
}

impl Command {
    /// Maps a keyword (either the full word or its shorthand) and optional amount text
    /// to a command. `None` for keywords nobody recognises.
    pub fn from_parts(keyword: &str, amount: Option<&str>) -> Option<Self> {
        let amount = || amount.unwrap_or_default().to_owned();
        let cmd = match keyword.trim().to_ascii_lowercase().as_str() {
            "withdraw" | "w" => Command::Withdraw { amount: amount() },
            "deposit" | "d" => Command::Deposit { amount: amount() },
            "balance" | "b" | "check" => Command::CheckBalance,
            "help" | "?" => Command::Help,
            _ => return None,
        };
        Some(cmd)
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Withdraw { amount } => write!(f, "withdraw,amount={}", amount),
            Command::Deposit { amount } => write!(f, "deposit,amount={}", amount),
            Command::CheckBalance => write!(f, "balance"),
            Command::Help => write!(f, "help"),
        }
    }
}
