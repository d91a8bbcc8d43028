//! Table module: ordered token ↔ symbol mapping
//!
//! Pairs each source token positionally with a single-character substitute.
//! The order of entries is load-bearing: encode and decode both walk the
//! table from index 0 upward.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Source tokens of the built-in notation table, in substitution order.
///
/// Index position maps each token to the letter at the same index of the
/// lowercase alphabet: `X_"D1"` ↔ `a`, `u_1` ↔ `b`, and so on.
const NOTATION_TOKENS: &[&str] = &[
    "X_\"D1\"", "u_1", "X_\"D2\"", "u_2", "A_D", "K_\"DD\"", "K_\"D1\"",
    "K_\"D2\"", "K_\"12\"", "K_\"1D\"", "K_\"11\"", "K_\"2D\"", "K_\"21\"",
    "K_\"22\"",
];

/// Substitute alphabet for the built-in table.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Errors rejected at table construction time.
///
/// A table that passes construction still carries one precondition that can
/// only be judged against actual input text: substitute symbols must not
/// occur literally in the untransformed portions of the text, or decode will
/// silently over-replace. See [`crate::Codec`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Table has no entries.
    #[error("table has no entries")]
    Empty,
    /// A source token is the empty string.
    #[error("entry {index} has an empty source token")]
    EmptyToken { index: usize },
    /// The same source token appears at two indices.
    #[error("duplicate source token {token:?}")]
    DuplicateToken { token: String },
    /// The same substitute symbol appears at two indices.
    #[error("duplicate substitute symbol {symbol:?}")]
    DuplicateSymbol { symbol: char },
    /// A substitute symbol occurs literally inside a source token, so a
    /// later decode pass would rewrite material produced by an earlier one.
    #[error("substitute symbol {symbol:?} occurs inside source token {token:?}")]
    SymbolCollision { symbol: char, token: String },
}

/// Immutable ordered mapping from source tokens to single-character
/// substitutes.
///
/// Constructed once, never mutated. Serializes as a plain ordered list of
/// `[token, symbol]` pairs; deserialization re-runs construction validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: Vec<(String, char)>,
}

impl SymbolTable {
    /// The built-in 14-entry table for the subscripted physics notation.
    pub fn notation() -> Self {
        let entries = NOTATION_TOKENS
            .iter()
            .zip(ALPHABET.chars())
            .map(|(token, symbol)| (token.to_string(), symbol))
            .collect();
        Self { entries }
    }

    /// Build a custom table, rejecting configurations that cannot round-trip.
    pub fn from_pairs(pairs: Vec<(String, char)>) -> Result<Self, TableError> {
        if pairs.is_empty() {
            return Err(TableError::Empty);
        }

        for (index, (token, _)) in pairs.iter().enumerate() {
            if token.is_empty() {
                return Err(TableError::EmptyToken { index });
            }
        }

        for (i, (token, symbol)) in pairs.iter().enumerate() {
            for (other_token, other_symbol) in &pairs[i + 1..] {
                if token == other_token {
                    return Err(TableError::DuplicateToken {
                        token: token.clone(),
                    });
                }
                if symbol == other_symbol {
                    return Err(TableError::DuplicateSymbol { symbol: *symbol });
                }
            }
        }

        // A symbol inside any token (its own included) breaks decode: the
        // token text it expands to would be re-substituted by a later pass.
        for (_, symbol) in &pairs {
            for (token, _) in &pairs {
                if token.contains(*symbol) {
                    return Err(TableError::SymbolCollision {
                        symbol: *symbol,
                        token: token.clone(),
                    });
                }
            }
        }

        Ok(Self { entries: pairs })
    }

    /// Entries in substitution order.
    pub fn entries(&self) -> &[(String, char)] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty (never true for a validated table).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for SymbolTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(String, char)>::deserialize(deserializer)?;
        SymbolTable::from_pairs(pairs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_table_contents() {
        let table = SymbolTable::notation();

        assert_eq!(table.len(), 14);
        assert_eq!(table.entries()[0], ("X_\"D1\"".to_string(), 'a'));
        assert_eq!(table.entries()[1], ("u_1".to_string(), 'b'));
        assert_eq!(table.entries()[13], ("K_\"22\"".to_string(), 'n'));
    }

    #[test]
    fn test_notation_table_passes_validation() {
        let pairs = SymbolTable::notation().entries().to_vec();
        assert!(SymbolTable::from_pairs(pairs).is_ok());
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(SymbolTable::from_pairs(vec![]), Err(TableError::Empty));
    }

    #[test]
    fn test_rejects_empty_token() {
        let pairs = vec![("P_1".to_string(), 'x'), (String::new(), 'y')];
        assert_eq!(
            SymbolTable::from_pairs(pairs),
            Err(TableError::EmptyToken { index: 1 })
        );
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let pairs = vec![("P_1".to_string(), 'x'), ("P_1".to_string(), 'y')];
        assert_eq!(
            SymbolTable::from_pairs(pairs),
            Err(TableError::DuplicateToken {
                token: "P_1".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let pairs = vec![("P_1".to_string(), 'x'), ("P_2".to_string(), 'x')];
        assert_eq!(
            SymbolTable::from_pairs(pairs),
            Err(TableError::DuplicateSymbol { symbol: 'x' })
        );
    }

    #[test]
    fn test_rejects_symbol_inside_token() {
        // 'u' appears inside the token "u_1", so decoding 'u' would corrupt
        // text produced by decoding "u_1"'s own symbol.
        let pairs = vec![("u_1".to_string(), 'u'), ("P_2".to_string(), 'y')];
        assert_eq!(
            SymbolTable::from_pairs(pairs),
            Err(TableError::SymbolCollision {
                symbol: 'u',
                token: "u_1".to_string()
            })
        );
    }

    #[test]
    fn test_yaml_round_trip_preserves_order() {
        let table = SymbolTable::notation();
        let yaml = serde_yaml::to_string(&table).unwrap();
        let restored: SymbolTable = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(restored, table);
        assert_eq!(restored.entries(), table.entries());
    }

    #[test]
    fn test_yaml_rejects_invalid_table() {
        let yaml = "- [P_1, x]\n- [P_2, x]\n";
        let result: Result<SymbolTable, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
