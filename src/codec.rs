//! Codec module: ordered literal substitution in both directions
//!
//! Each pass does an exhaustive find/replace of one table entry over the
//! whole working text. No regex, no word boundaries, no evaluation of the
//! expressions being rewritten.

use crate::table::SymbolTable;

/// Substitution codec over an immutable [`SymbolTable`].
///
/// Both operations are total: every input string produces an output string
/// and there is no error path. Correct round-tripping relies on a
/// precondition the codec cannot check: substitute symbols must not occur
/// in the untransformed portions of the input. When that is violated,
/// `decode` silently over-replaces instead of failing.
#[derive(Debug, Clone)]
pub struct Codec {
    table: SymbolTable,
}

impl Codec {
    /// Create a codec over the given table.
    pub fn new(table: SymbolTable) -> Self {
        Self { table }
    }

    /// Codec over the built-in notation table.
    pub fn notation() -> Self {
        Self::new(SymbolTable::notation())
    }

    /// The table this codec substitutes with.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Replace every occurrence of each source token with its symbol,
    /// walking the table from index 0 upward.
    pub fn encode(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, symbol) in self.table.entries() {
            result = result.replace(token.as_str(), &symbol.to_string());
        }
        result
    }

    /// Replace every occurrence of each symbol with its source token, in
    /// the same table order as [`Codec::encode`].
    pub fn decode(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, symbol) in self.table.entries() {
            result = result.replace(*symbol, token.as_str());
        }
        result
    }
}
