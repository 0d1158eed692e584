//! Symbol Table
//!
//! Fixed mapping between characters and their Morse code groups. Entries keep
//! their definition order, which drives listing and reverse-lookup tie-breaks.

use std::collections::HashMap;

use crate::error::{Result, TranscoderError};

/// International Morse letters, digits and the three supported punctuation marks.
const INTERNATIONAL: [(char, &str); 39] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
];

/// A single character and its code group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub character: char,
    pub code: String,
}

/// Immutable, ordered character/code table with indexes for both directions.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_char: HashMap<char, usize>,
    by_code: HashMap<String, usize>,
}

impl SymbolTable {
    /// The canonical 39-entry table.
    pub fn international() -> Self {
        let mut table = Self::empty();
        for (character, code) in INTERNATIONAL {
            table.push(character, code);
        }
        table
    }

    /// Build a table from pairs in definition order.
    ///
    /// A character may only appear once. Repeated codes are allowed; reverse
    /// lookup resolves them to the earliest entry.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::empty();
        for (character, code) in pairs {
            if table.by_char.contains_key(&character) {
                return Err(TranscoderError::DuplicateSymbol(character));
            }
            table.push(character, code);
        }
        Ok(table)
    }

    fn empty() -> Self {
        Self {
            symbols: Vec::new(),
            by_char: HashMap::new(),
            by_code: HashMap::new(),
        }
    }

    fn push(&mut self, character: char, code: impl Into<String>) {
        let code = code.into();
        let position = self.symbols.len();
        self.by_char.insert(character, position);
        // first definition wins for duplicate codes
        self.by_code.entry(code.clone()).or_insert(position);
        self.symbols.push(Symbol { character, code });
    }

    /// Code group for a character, if the table defines one
    pub fn code_for(&self, character: char) -> Option<&str> {
        self.by_char
            .get(&character)
            .map(|&i| self.symbols[i].code.as_str())
    }

    /// Character whose code equals `code`, if any
    pub fn char_for(&self, code: &str) -> Option<char> {
        self.by_code.get(code).map(|&i| self.symbols[i].character)
    }

    /// Entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// One `<character> | <code>` line per entry, in definition order.
    pub fn listing(&self) -> impl Iterator<Item = String> + '_ {
        self.symbols
            .iter()
            .map(|symbol| format!("{} | {}", symbol.character, symbol.code))
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
