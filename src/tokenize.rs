//! Word tokenizer for dictionary files.
//!
//! A word is a maximal run of ASCII letters, ASCII digits and apostrophes.
//! Every other byte, including any non-ASCII byte, separates words. Case is
//! left untouched.

use std::io::{self, BufReader, Bytes, Read};

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'\''
}

pub struct Words<R> {
    bytes: Bytes<BufReader<R>>,
}

/// Splits everything `reader` yields into words.
pub fn words<R: Read>(reader: R) -> Words<R> {
    Words {
        bytes: BufReader::new(reader).bytes(),
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();
        for b in self.bytes.by_ref() {
            match b {
                Ok(b) if is_word_byte(b) => word.push(char::from(b)),
                Ok(_) if word.is_empty() => continue,
                Ok(_) => return Some(Ok(word)),
                Err(e) => return Some(Err(e)),
            }
        }
        if word.is_empty() {
            None
        } else {
            Some(Ok(word))
        }
    }
}
