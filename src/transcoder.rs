//! Text/Morse transcoding over a [`SymbolTable`].
//!
//! Unmapped input is never an error: encode passes it through verbatim and
//! decode replaces it with [`UNMAPPED_MARKER`].

use crate::table::SymbolTable;
use crate::TABLE;

/// Token separating words in Morse output and input
pub const WORD_SEPARATOR: &str = "/";

/// Character emitted by decode for a group the table does not define
pub const UNMAPPED_MARKER: char = '#';

#[derive(Debug, Clone, Copy)]
pub struct Transcoder<'a> {
    table: &'a SymbolTable,
}

impl<'a> Transcoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Translate text to Morse code.
    ///
    /// Each literal space becomes ` / `. Every other character is uppercased
    /// and each resulting character is emitted as its code plus one trailing
    /// space, or verbatim when the table has no entry for it.
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 5);

        for original in text.chars() {
            // boundaries are decided on the original character, not the folded one
            if original == ' ' {
                out.push(' ');
                out.push_str(WORD_SEPARATOR);
                out.push(' ');
                continue;
            }

            for upper in original.to_uppercase() {
                match self.table.code_for(upper) {
                    Some(code) => {
                        out.push_str(code);
                        out.push(' ');
                    }
                    None => {
                        tracing::debug!("No code for {:?}, passing through", upper);
                        out.push(upper);
                    }
                }
            }
        }

        out
    }

    /// Code group for a single character after case folding.
    ///
    /// Returns `None` when the character folds to more than one character or
    /// the table has no entry for it.
    pub fn encode_char(&self, character: char) -> Option<&'a str> {
        let mut folded = character.to_uppercase();
        match (folded.next(), folded.next()) {
            (Some(upper), None) => self.table.code_for(upper),
            _ => None,
        }
    }

    /// Translate space-separated Morse groups to text.
    ///
    /// Input is split on every single space, so runs of spaces yield empty
    /// groups which decode to the unmapped marker.
    pub fn decode(&self, morse: &str) -> String {
        morse
            .split(' ')
            .map(|group| {
                if group == WORD_SEPARATOR {
                    ' '
                } else {
                    self.table.char_for(group).unwrap_or_else(|| {
                        tracing::debug!("Unknown Morse group {:?}", group);
                        UNMAPPED_MARKER
                    })
                }
            })
            .collect()
    }
}

impl Default for Transcoder<'static> {
    fn default() -> Self {
        Self::new(&TABLE)
    }
}

/// Encode with the canonical table
pub fn encode(text: &str) -> String {
    Transcoder::default().encode(text)
}

/// Decode with the canonical table
pub fn decode(morse: &str) -> String {
    Transcoder::default().decode(morse)
}
