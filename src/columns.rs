//! Right-justified column output.
//!
//! Sections of a report are written in two passes: first the width of every
//! column is measured with [`max_width`], then every row is written with
//! [`write_justified`] or [`write_justified_decorated`]. Only the natural
//! length of a value counts towards its width; decoration such as ANSI escape
//! codes is written around the value without being measured, so colored and
//! plain output line up identically.

use core::fmt;

/// The natural length of `s`: the number of characters a terminal shows.
pub fn display_len(s: &str) -> usize {
    s.chars().count()
}

/// Writes `count` spaces.
pub fn pad<W: fmt::Write + ?Sized>(sink: &mut W, count: usize) -> fmt::Result {
    const SPACES: &str = "                                ";
    let mut remaining = count;
    while remaining > 0 {
        let chunk = remaining.min(SPACES.len());
        sink.write_str(&SPACES[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}

/// Writes `value` right-justified in a column of `width` characters.
///
/// Values longer than the column are written in full without padding.
///
/// ```
/// let mut out = String::new();
/// causeway::columns::write_justified(&mut out, 6, "abc").unwrap();
/// assert_eq!(out, "   abc");
/// ```
pub fn write_justified<W: fmt::Write + ?Sized>(
    sink: &mut W,
    width: usize,
    value: &str,
) -> fmt::Result {
    write_justified_decorated(sink, width, "", value, "")
}

/// Writes `value` right-justified in a column of `width` characters, wrapped
/// in `prefix` and `suffix`.
///
/// The padding is written before `prefix`, and neither `prefix` nor `suffix`
/// count towards the width.
pub fn write_justified_decorated<W: fmt::Write + ?Sized>(
    sink: &mut W,
    width: usize,
    prefix: &str,
    value: &str,
    suffix: &str,
) -> fmt::Result {
    pad(sink, width.saturating_sub(display_len(value)))?;
    sink.write_str(prefix)?;
    sink.write_str(value)?;
    sink.write_str(suffix)
}

/// The widest natural length of `selector(row)` over all rows, or 0 when
/// there are no rows.
///
/// ```
/// use causeway::columns::max_width;
///
/// let rows = ["a", "abc", "ab"];
/// assert_eq!(max_width(rows, |row| row), 3);
/// assert_eq!(max_width(Vec::<&str>::new(), |row| row), 0);
/// ```
pub fn max_width<I, F, S>(rows: I, mut selector: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|row| display_len(selector(row).as_ref()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leading_spaces(line: &str) -> usize {
        line.len() - line.trim_start_matches(' ').len()
    }

    #[test]
    fn test_pads_to_shared_width() {
        let names = ["abc", "abcdefg", "a"];
        let width = max_width(names, |name| name);
        assert_eq!(width, 7);

        let pads: Vec<usize> = names
            .iter()
            .map(|name| {
                let mut line = String::new();
                write_justified(&mut line, width, name).unwrap();
                leading_spaces(&line)
            })
            .collect();
        assert_eq!(pads, [4, 0, 6]);
    }

    #[test]
    fn test_decoration_does_not_affect_padding() {
        let mut plain = String::new();
        let mut decorated = String::new();
        write_justified(&mut plain, 7, "abc").unwrap();
        write_justified_decorated(&mut decorated, 7, "\x1b[1;31m", "abc", "\x1b[0m").unwrap();

        assert_eq!(plain, "    abc");
        assert_eq!(decorated, "    \x1b[1;31mabc\x1b[0m");
    }

    #[test]
    fn test_overlong_values_are_not_truncated() {
        let mut out = String::new();
        write_justified(&mut out, 2, "overflow").unwrap();
        assert_eq!(out, "overflow");
    }

    #[test]
    fn test_width_counts_characters() {
        assert_eq!(display_len("größe"), 5);
        assert_eq!(max_width(["größe", "ab"], |s| s.to_owned()), 5);

        let mut out = String::new();
        pad(&mut out, 70).unwrap();
        assert_eq!(out.len(), 70);
        assert!(out.chars().all(|c| c == ' '));
    }
}
