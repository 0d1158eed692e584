pub mod console;
pub mod error;
pub mod table;
pub mod transcoder;

use once_cell::sync::Lazy;

pub use console::Console;
pub use error::{Result, TranscoderError};
pub use table::{Symbol, SymbolTable};
pub use transcoder::{decode, encode, Transcoder, UNMAPPED_MARKER, WORD_SEPARATOR};

/// Canonical symbol table (lazily initialized)
pub static TABLE: Lazy<SymbolTable> = Lazy::new(SymbolTable::international);
