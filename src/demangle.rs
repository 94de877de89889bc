//! Recovery of source-level names from mangled JVM identifiers.
//!
//! Clojure compiles a function such as `my-app.core/valid?` into a class named
//! `my_app.core$valid_QMARK_`: every character that is not allowed in a JVM
//! identifier is replaced by an escape sequence starting with the marker
//! character `_`. [`demangle`] reverses that substitution.
//!
//! ```
//! use causeway::demangle::demangle;
//!
//! assert_eq!(demangle("valid_QMARK_").unwrap(), "valid?");
//! assert_eq!(demangle("process_request").unwrap(), "process-request");
//! ```

use std::sync::OnceLock;

/// The character every escape sequence starts with.
pub const MARKER: char = '_';

/// The escape sequences of the default table, as `(mangled, natural)` pairs.
pub const DEFAULT_ESCAPES: &[(&str, char)] = &[
    ("_", '-'),
    ("_COLON_", ':'),
    ("_PLUS_", '+'),
    ("_GT_", '>'),
    ("_LT_", '<'),
    ("_EQ_", '='),
    ("_TILDE_", '~'),
    ("_BANG_", '!'),
    ("_CIRCA_", '@'),
    ("_SHARP_", '#'),
    ("_SINGLEQUOTE_", '\''),
    ("_DOUBLEQUOTE_", '"'),
    ("_PERCENT_", '%'),
    ("_CARET_", '^'),
    ("_AMPERSAND_", '&'),
    ("_STAR_", '*'),
    ("_BAR_", '|'),
    ("_LBRACE_", '{'),
    ("_RBRACE_", '}'),
    ("_LBRACK_", '['),
    ("_RBRACK_", ']'),
    ("_SLASH_", '/'),
    ("_BSLASH_", '\\'),
    ("_QMARK_", '?'),
];

/// A marker character was found that no table entry matches.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DemangleError {
    /// No escape sequence of the table matches `input` at byte `position`.
    #[error("unrecognized escape sequence in {input:?} at byte {position}")]
    UnrecognizedEscape {
        /// The full identifier being demangled.
        input: String,
        /// Byte offset of the unmatched marker.
        position: usize,
    },
}

/// A table of escape sequences, kept sorted longest key first.
///
/// Keys may be prefixes of one another (`_` is a prefix of every other key of
/// the default table), so lookups must always prefer the longest match. Keys
/// of equal length keep the order they were given in.
#[derive(Clone, Debug)]
pub struct MangleTable {
    entries: Vec<(&'static str, char)>,
}

impl MangleTable {
    /// Builds a table from `(mangled, natural)` pairs.
    pub fn new(escapes: &[(&'static str, char)]) -> Self {
        let mut entries = escapes.to_vec();
        // Stable sort, so ties keep table order.
        entries.sort_by_key(|(key, _)| core::cmp::Reverse(key.len()));
        Self { entries }
    }

    /// The table built from [`DEFAULT_ESCAPES`].
    pub fn global() -> &'static Self {
        static TABLE: OnceLock<MangleTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::new(DEFAULT_ESCAPES))
    }

    /// Returns the longest entry whose key is a prefix of `s`.
    fn longest_match(&self, s: &str) -> Option<(&'static str, char)> {
        self.entries
            .iter()
            .copied()
            .find(|(key, _)| s.starts_with(key))
    }

    /// Demangles `s` using this table.
    pub fn demangle(&self, s: &str) -> Result<String, DemangleError> {
        let mut out = String::with_capacity(s.len());
        let mut i = 0;
        while let Some(c) = s[i..].chars().next() {
            if c != MARKER {
                out.push(c);
                i += c.len_utf8();
                continue;
            }
            let Some((key, natural)) = self.longest_match(&s[i..]) else {
                return Err(DemangleError::UnrecognizedEscape {
                    input: s.to_owned(),
                    position: i,
                });
            };
            out.push(natural);
            i += key.len();
        }
        Ok(out)
    }

    /// Mangles `s`, the inverse of [`demangle`](Self::demangle).
    ///
    /// Characters without an entry are copied verbatim. When several keys map
    /// to the same character the shortest one is used.
    pub fn mangle(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match self.key_for(c) {
                Some(key) => out.push_str(key),
                None => out.push(c),
            }
        }
        out
    }

    fn key_for(&self, natural: char) -> Option<&'static str> {
        self.entries
            .iter()
            .filter(|&&(_, c)| c == natural)
            .min_by_key(|(key, _)| key.len())
            .map(|&(key, _)| key)
    }
}

/// Demangles `s` with the default table.
///
/// Fails with [`DemangleError::UnrecognizedEscape`] if a marker character is
/// not the start of any escape sequence. The default table maps a lone `_` to
/// `-`, so this can only happen with custom tables.
pub fn demangle(s: &str) -> Result<String, DemangleError> {
    MangleTable::global().demangle(s)
}

/// Mangles `s` with the default table.
pub fn mangle(s: &str) -> String {
    MangleTable::global().mangle(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_unchanged() {
        assert_eq!(demangle("clojure.core").unwrap(), "clojure.core");
        assert_eq!(demangle("").unwrap(), "");
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(demangle("swap_BANG_").unwrap(), "swap!");
        assert_eq!(demangle("_STAR_ns_STAR_").unwrap(), "*ns*");
        assert_eq!(demangle("_EQ__EQ_").unwrap(), "==");
        assert_eq!(demangle("my_app.db").unwrap(), "my-app.db");
        assert_eq!(demangle("__GT_record").unwrap(), "->record");
    }

    #[test]
    fn test_longest_match_wins() {
        // `_` alone is a valid escape, so a naive scan would produce `-PLUS-`.
        assert_eq!(demangle("_PLUS_").unwrap(), "+");

        let table = MangleTable::new(&[("_PLUS_", '+'), ("_PLUS_PLUS_", '#'), ("_", '-')]);
        assert_eq!(table.demangle("a_PLUS_PLUS_b").unwrap(), "a#b");
        assert_eq!(table.demangle("a_PLUS_b").unwrap(), "a+b");
        assert_eq!(table.demangle("a_PLUS_PLUSb").unwrap(), "a+PLUSb");
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = MangleTable::new(&[("_AB_", 'x'), ("_AB_", 'y')]);
        assert_eq!(table.demangle("_AB_").unwrap(), "x");
    }

    #[test]
    fn test_unrecognized_escape() {
        let table = MangleTable::new(&[("_QMARK_", '?')]);
        assert_eq!(
            table.demangle("ok_QMARK_ but_not"),
            Err(DemangleError::UnrecognizedEscape {
                input: "ok_QMARK_ but_not".to_owned(),
                position: 13,
            })
        );
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(demangle("größe_QMARK_").unwrap(), "größe?");
    }

    #[test]
    fn test_round_trip() {
        for name in [
            "valid?",
            "->Record",
            "*warn-on-reflection*",
            "a/b",
            "<=>",
            "update-in!",
            "{[|]}",
            "#'var",
            "\"quoted\"",
            "ns.with.dots",
        ] {
            let mangled = mangle(name);
            assert_eq!(demangle(&mangled).unwrap(), name, "via {mangled}");
        }
        assert_eq!(mangle("set-value!"), "set_value_BANG_");
    }
}
