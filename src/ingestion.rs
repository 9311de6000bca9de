use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::domain::traits::CommandStream;
use crate::domain::{Command, Error};

type BoxedCommands = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

/// Interactive commands, one per line: `withdraw 200`, `deposit 50`, `balance`, `help`, `quit`.
pub struct LineReader<R> {
    lines: Option<Lines<R>>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Some(reader.lines()),
        }
    }
}

#[derive(Debug)]
enum Line {
    Blank,
    Quit,
    Command(Result<Command, Error>),
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }

    // everything after the keyword is amount text, so "withdraw 1 2" fails to parse later
    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .map(|(k, r)| (k, Some(r.trim())))
        .unwrap_or((line, None));

    if matches!(
        keyword.to_ascii_lowercase().as_str(),
        "quit" | "exit" | "q"
    ) {
        return Line::Quit;
    }

    Line::Command(
        Command::from_parts(keyword, rest)
            .ok_or_else(|| Error::Ingestion(format!("Unknown command: {}", keyword))),
    )
}

impl<R: AsyncBufRead + Unpin + Send + 'static> CommandStream for LineReader<R> {
    type CmdStream = BoxedCommands;

    fn stream(&mut self) -> Self::CmdStream {
        let lines = match self.lines.take() {
            Some(l) => l,
            None => return Box::pin(stream::empty()),
        };

        // state goes to None after an I/O error so the stream ends right after reporting it
        Box::pin(stream::unfold(Some(lines), |state| async move {
            let Some(mut lines) = state else {
                return None;
            };
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => match parse_line(&line) {
                        Line::Blank => continue,
                        Line::Quit => return None,
                        Line::Command(cmd) => return Some((cmd, Some(lines))),
                    },
                    Ok(None) => return None,
                    Err(e) => return Some((Err(Error::Io(e)), None)),
                }
            }
        }))
    }
}

/// Batch commands from a CSV script with an `action,amount` header.
pub struct CsvScript<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvScript<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    action: String,
    amount: Option<String>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        Command::from_parts(&row.action, row.amount.as_deref())
            .ok_or_else(|| Error::Ingestion(format!("Invalid action: {}", row.action)))
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvScript<R> {
    type CmdStream = BoxedCommands;

    fn stream(&mut self) -> Self::CmdStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::empty()),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
