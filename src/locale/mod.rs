// Language and character-set helpers
//
// Maps internal site language names to ISO-639-1 codes and validates the
// configured character set against a known-safe allow-list. Both lookups
// degrade to safe defaults instead of failing.

pub mod lang;
pub mod encoding;

pub use lang::lang_iso639_code;
pub use encoding::{encoding_object, valid_encoding, DEFAULT_ENCODING};
