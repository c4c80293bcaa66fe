//! Table emission and the loader for emitted tables.

use crate::transfer::transfer;
use parse_int::parse;
use std::fs::read_to_string;
use std::io::{Error, ErrorKind, Result, Write};
use std::path::Path;

/// One entry per index of the 16-bit domain, endpoint included.
pub const TABLE_LEN: usize = 65537;

/// All table entries in ascending index order.
pub fn entries() -> impl Iterator<Item = u16> {
    (0..TABLE_LEN as u32).map(transfer)
}

/// Writes the table as decimal values, each followed by a single space
/// (the final entry included), with no newline.
pub fn write_table<W: Write>(out: &mut W) -> Result<()> {
    for value in entries() {
        write!(out, "{} ", value)?;
    }

    Ok(())
}

fn parse_entry(token: &str) -> Result<u16> {
    parse::<u16>(token).map_err(|err| Error::new(ErrorKind::Other, err))
}

/// A table loaded back from its emitted text form.
pub struct CurveTable {
    values: Box<[u16]>,
}

impl CurveTable {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&read_to_string(path)?)
    }

    /// Parses the space-separated text form, enforcing the exact entry
    /// count.
    pub fn parse(text: &str) -> Result<Self> {
        let values = text
            .split_whitespace()
            .map(parse_entry)
            .collect::<Result<Vec<u16>>>()?
            .into_boxed_slice();

        if values.len() != TABLE_LEN {
            return Err(Error::new(
                ErrorKind::Other,
                format!("expected {} entries, found {}", TABLE_LEN, values.len()),
            ));
        }

        Ok(Self { values })
    }

    /// Looks up the value for one index.
    pub fn get(&self, index: u32) -> Option<u16> {
        self.values.get(index as usize).copied()
    }

    pub fn values(&self) -> &[u16] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::{FULL_SCALE, FULL_SCALE_INDEX};

    fn emit() -> Vec<u8> {
        let mut out = Vec::new();
        write_table(&mut out).unwrap();
        out
    }

    #[test]
    fn entry_count() {
        assert_eq!(entries().count(), TABLE_LEN);
    }

    #[test]
    fn emitted_format() {
        let out = emit();

        assert!(out.starts_with(b"0 0 0 "));
        assert_eq!(out.last(), Some(&b' '));
        assert!(!out.contains(&b'\n'));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.split_whitespace().count(), TABLE_LEN);
    }

    #[test]
    fn emitted_length() {
        assert_eq!(emit().len(), 193_678);
    }

    #[test]
    fn emission_is_deterministic() {
        assert_eq!(emit(), emit());
    }

    #[test]
    fn parse_round_trip() {
        let text = String::from_utf8(emit()).unwrap();
        let table = CurveTable::parse(&text).unwrap();

        assert!(table.values().iter().copied().eq(entries()));
    }

    #[test]
    fn lookup() {
        let text = String::from_utf8(emit()).unwrap();
        let table = CurveTable::parse(&text).unwrap();

        assert_eq!(table.get(0), Some(0));
        assert_eq!(table.get(FULL_SCALE_INDEX), Some(FULL_SCALE));
        assert_eq!(table.get(65536), Some(0));
        assert_eq!(table.get(65537), None);
    }

    #[test]
    fn parse_rejects_short_tables() {
        assert!(CurveTable::parse("0 1 2 ").is_err());
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert!(CurveTable::parse("0 zero 2 ").is_err());
    }
}
