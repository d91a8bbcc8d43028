//! symbol-packr: compact single-letter notation for verbose algebraic symbols
//!
//! A codec that rewrites subscripted/quoted notation tokens (like `X_"D1"` or
//! `K_"DD"`) into single lowercase letters, and back.
//!
//! ## How it works
//!
//! 1. **Table**: an ordered, immutable token ↔ symbol mapping, validated at
//!    construction
//! 2. **Encode**: replace every occurrence of each source token with its
//!    letter, in table order
//! 3. **Decode**: replace every occurrence of each letter with its source
//!    token, same order

pub mod codec;
pub mod table;

pub use codec::Codec;
pub use table::{SymbolTable, TableError};
