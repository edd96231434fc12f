//! Common utilities

use alloc::vec::Vec;
use hashbrown::{HashMap, hash_map::Entry};

/// A line of text along with the id assigned to its contents by a [`Classifier`].
///
/// `text` includes the line terminator, if any.
#[derive(Clone, Copy, Debug)]
pub struct Token<'a> {
    pub id: u64,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// The line without its `\n` or `\r\n` terminator
    pub fn content(&self) -> &'a str {
        let line = self.text.strip_suffix('\n').unwrap_or(self.text);
        line.strip_suffix('\r').unwrap_or(line)
    }
}

/// Classifies lines, converting lines into unique `u64`s for quicker comparison
#[derive(Default)]
pub struct Classifier<'a> {
    next_id: u64,
    unique_ids: HashMap<&'a str, u64>,
}

impl<'a> Classifier<'a> {
    fn classify(&mut self, record: &'a str) -> u64 {
        match self.unique_ids.entry(record) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                let id = self.next_id;
                self.next_id += 1;
                *v.insert(id)
            }
        }
    }

    pub fn classify_lines(&mut self, text: &'a str) -> Vec<Token<'a>> {
        LineIter::new(text)
            .map(|line| Token {
                id: self.classify(line),
                text: line,
            })
            .collect()
    }
}

/// Iterator over the lines of a string, including the `\n` character.
pub struct LineIter<'a>(&'a str);

impl<'a> LineIter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }

        let end = match self.0.find('\n') {
            Some(idx) => idx + 1,
            None => self.0.len(),
        };

        let (line, remaining) = self.0.split_at(end);
        self.0 = remaining;
        Some(line)
    }
}
