use crate::types::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, ErrorKind};

/// Read one line of operator input. Empty lines are returned as-is.
///
/// Returns `None` once input is exhausted (Ctrl-D, closed pipe). When stdin
/// is not a terminal the line is read plainly instead of through the prompt.
pub fn ask_chat_turn(label: &str) -> Result<Option<String>> {
    let prompt = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text();
    match prompt {
        Ok(input) => Ok(Some(input)),
        Err(dialoguer::Error::IO(err)) if err.kind() == ErrorKind::NotConnected => {
            read_plain_line(io::stdin().lock())
        }
        Err(dialoguer::Error::IO(err)) if is_end_of_input(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn is_end_of_input(err: &io::Error) -> bool {
    err.kind() == ErrorKind::UnexpectedEof
}

fn read_plain_line(mut reader: impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
