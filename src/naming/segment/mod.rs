//! Word segmentation: the scanning state machine behind the normalizer.
//!
//! The input is decoded once into an immutable `char` buffer. A read cursor
//! walks it left to right; accepted characters are copied into the current
//! word, everything else is skipped. A word ends after an accepted character
//! when
//! - it is the last character of the buffer,
//! - the raw character that follows is `_` (an underscore run is a boundary),
//! - it is lowercase and the raw character that follows is not.
//!
//! Trailing characters the charset rejects are trimmed before scanning, so the
//! last character of the buffer is always accepted.
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use super::Charset;

/// Iterator over the words of an input string, left to right.
#[derive(Debug, Clone)]
pub struct Words {
    /// Decoded input without its rejected tail.
    chars: Vec<char>,
    /// Index of the next character to read.
    cursor: usize,
    charset: Charset,
}

impl Words {
    /// Decode `input` and position the cursor on its first character.
    pub fn new(input: &str, charset: Charset) -> Self {
        let mut chars: Vec<char> = input.chars().collect();
        while chars.last().is_some_and(|&c| !charset.accepts(c)) {
            chars.pop();
        }
        Self {
            chars,
            cursor: 0,
            charset,
        }
    }

    /// Whether the accepted character `current`, just consumed, closes a word.
    fn ends_word(&self, current: char) -> bool {
        match self.chars.get(self.cursor) {
            None | Some('_') => true,
            Some(&next) => current.is_lowercase() && !next.is_lowercase(),
        }
    }
}

impl Iterator for Words {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut word = String::new();
        while let Some(&c) = self.chars.get(self.cursor) {
            self.cursor += 1;
            if !self.charset.accepts(c) {
                continue;
            }
            word.push(c);
            if self.ends_word(c) {
                return Some(word);
            }
        }
        (!word.is_empty()).then_some(word)
    }
}

impl FusedIterator for Words {}
