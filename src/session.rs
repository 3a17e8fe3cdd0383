//! Interactive query loop.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::dictionary::{Dictionary, Lookup};
use crate::error::Result;
use crate::hashing::KeyHash;
use crate::suggest::Suggestion;

pub const PROMPT: &str = "Enter a word or \"quit\" to quit: ";
pub const QUIT: &str = "quit";

/// "a, b, c, d, or e" for display; two words get "a or b".
pub fn join_suggestions(suggestions: &[Suggestion]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => only.word.clone(),
        [first, second] => format!("{} or {}", first.word, second.word),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(|s| s.word.as_str()).collect();
            format!("{}, or {}", head.join(", "), last.word)
        }
    }
}

/// Prompts on `output`, reads whitespace-separated words from `input` and
/// answers each one until `quit` or end of input. Every word on a line gets
/// its own prompt and answer. Queries are lower-cased before lookup.
pub fn run_session<H, R, W>(dict: &Dictionary<H>, input: R, mut output: W) -> Result<()>
where
    H: KeyHash,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut pending: VecDeque<String> = VecDeque::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        if pending.is_empty() {
            let Some(line) = lines.next() else {
                writeln!(output)?;
                return Ok(());
            };
            pending.extend(line?.split_whitespace().map(str::to_owned));
        }
        let Some(word) = pending.pop_front() else {
            continue;
        };
        let query = word.to_ascii_lowercase();
        if query == QUIT {
            return Ok(());
        }

        match dict.check(&query) {
            Lookup::Known => {
                writeln!(output, "\nThe inputted word {query} is spelled correctly.")?;
            }
            Lookup::Unknown(ranked) => {
                writeln!(output, "\nThe inputted word {query} is spelled incorrectly.")?;
                let sorted = ranked.into_sorted();
                if sorted.is_empty() {
                    writeln!(output, "No suggestions available.")?;
                } else {
                    writeln!(output, "Did you mean {}?", join_suggestions(&sorted))?;
                }
            }
        }
    }
}
