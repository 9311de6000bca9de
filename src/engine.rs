use crate::domain::{
    Account, Command, Error, Money,
    traits::{CommandStream, ErrorReporter, Screen},
};

use futures::StreamExt;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct Engine<I, S, R>
where
    I: CommandStream,
    S: Screen,
    R: ErrorReporter,
{
    ingestion: I,
    account: Account,
    screen: S,
    reporter: R,
}

impl<I, S, R> Engine<I, S, R>
where
    I: CommandStream,
    S: Screen,
    R: ErrorReporter,
{
    pub fn new(ingestion: I, account: Account, screen: S, reporter: R) -> Self {
        Self {
            ingestion,
            account,
            screen,
            reporter,
        }
    }

    /// Runs every command to completion and returns the closing balance.
    pub async fn process(&mut self) -> Money {
        self.screen.update_balance(self.account.check_balance());

        let mut cmds = self.ingestion.stream();
        while let Some(cmd) = cmds.next().await {
            match cmd {
                Ok(cmd) => {
                    if let Err(e) = self.apply_command(&cmd) {
                        info!(command = %cmd, error = %e, "transaction rejected");
                        self.reporter.report(&e);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "unreadable command");
                    self.reporter.report(&e);
                }
            }
        }

        self.account.check_balance()
    }

    fn apply_command(&mut self, cmd: &Command) -> Result<(), Error> {
        match cmd {
            Command::Withdraw { amount } => self.withdraw(amount),
            Command::Deposit { amount } => self.deposit(amount),
            Command::CheckBalance => {
                self.screen.show_balance(self.account.check_balance());
                Ok(())
            }
            Command::Help => {
                self.screen.show_help();
                Ok(())
            }
        }
    }

    fn withdraw(&mut self, amount: &str) -> Result<(), Error> {
        let amount = Money::parse_amount(amount)?;
        let balance = self.account.withdraw(amount)?;
        debug!(%amount, %balance, "withdrawal applied");

        self.screen.update_balance(balance);
        self.screen.show_success("Withdrawal successful!");
        Ok(())
    }

    fn deposit(&mut self, amount: &str) -> Result<(), Error> {
        let amount = Money::parse_amount(amount)?;
        let balance = self.account.deposit(amount)?;
        debug!(%amount, %balance, "deposit applied");

        self.screen.update_balance(balance);
        self.screen.show_success("Deposit successful!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;

    use futures::stream::{self, Stream};

    use super::Engine;
    use crate::domain::traits::{CommandStream, ErrorReporter, Screen};
    use crate::domain::{Account, Command, Error, Money, TransactionError};

    struct Scripted(Option<Vec<Result<Command, Error>>>);

    impl CommandStream for Scripted {
        type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

        fn stream(&mut self) -> Self::CmdStream {
            Box::pin(stream::iter(self.0.take().unwrap_or_default()))
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Screen for Recorder {
        fn update_balance(&mut self, balance: Money) {
            self.0.push(format!("label {}", balance));
        }
        fn show_balance(&mut self, balance: Money) {
            self.0.push(format!("check {}", balance));
        }
        fn show_success(&mut self, message: &str) {
            self.0.push(message.to_owned());
        }
        fn show_help(&mut self) {
            self.0.push("help".to_owned());
        }
    }

    #[derive(Default)]
    struct Errors(Vec<Option<TransactionError>>);

    impl ErrorReporter for Errors {
        fn report(&mut self, error: &Error) {
            self.0.push(match error {
                Error::Transaction(e) => Some(*e),
                _ => None,
            });
        }
    }

    fn withdraw(amount: &str) -> Result<Command, Error> {
        Ok(Command::Withdraw { amount: amount.into() })
    }

    fn deposit(amount: &str) -> Result<Command, Error> {
        Ok(Command::Deposit { amount: amount.into() })
    }

    fn engine(
        cmds: Vec<Result<Command, Error>>,
    ) -> Engine<Scripted, Recorder, Errors> {
        Engine::new(
            Scripted(Some(cmds)),
            Account::new(),
            Recorder::default(),
            Errors::default(),
        )
    }

    #[tokio::test]
    async fn rejected_transactions_leave_balance_alone() {
        let mut engine = engine(vec![
            withdraw("200.00"),
            withdraw("900.00"),
            deposit("-5.00"),
            deposit("abc"),
            Ok(Command::CheckBalance),
        ]);

        let closing = engine.process().await;

        assert_eq!(closing, Money::from_cents(80_000));
        assert_eq!(
            engine.reporter.0,
            vec![
                Some(TransactionError::InsufficientFunds),
                Some(TransactionError::InvalidAmount),
                Some(TransactionError::ParseError),
            ]
        );
        assert_eq!(
            engine.screen.0,
            vec![
                "label 1000.00",
                "label 800.00",
                "Withdrawal successful!",
                "check 800.00",
            ]
        );
    }

    #[tokio::test]
    async fn deposit_updates_label_then_confirms() {
        let mut engine = engine(vec![deposit("0.10"), deposit("0.20"), Ok(Command::Help)]);

        assert_eq!(engine.process().await.to_string(), "1000.30");
        assert_eq!(
            engine.screen.0,
            vec![
                "label 1000.00",
                "label 1000.10",
                "Deposit successful!",
                "label 1000.30",
                "Deposit successful!",
                "help",
            ]
        );
        assert!(engine.reporter.0.is_empty());
    }

    #[tokio::test]
    async fn ingestion_errors_are_reported_and_skipped() {
        let mut engine = engine(vec![
            Err(Error::Ingestion("Unknown command: transfer".into())),
            withdraw(""),
            withdraw("1000"),
        ]);

        assert_eq!(engine.process().await, Money::ZERO);
        assert_eq!(
            engine.reporter.0,
            vec![None, Some(TransactionError::ParseError)]
        );
    }

    #[tokio::test]
    async fn empty_input_only_shows_opening_balance() {
        let mut engine = engine(Vec::new());

        assert_eq!(engine.process().await, Account::DEFAULT_OPENING_BALANCE);
        assert_eq!(engine.screen.0, vec!["label 1000.00"]);
    }
}
