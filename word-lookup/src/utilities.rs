use std::io::{self, Write};

use dictionary::WordQuery;

/// Prompts and reads one line; `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    More,
    Help,
    Unknown(String),
    Lookup(WordQuery),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if let Some(command) = line.strip_prefix(':') {
        return match &command.to_ascii_lowercase()[..] {
            "q" | "quit" | "exit" => Command::Exit,
            "m" | "more" => Command::More,
            "h" | "help" => Command::Help,
            other => Command::Unknown(other.to_owned()),
        };
    }
    Command::Lookup(WordQuery::new(line))
}
