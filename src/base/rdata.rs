//! Resource record data.
//!
//! Each resource record type has its own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! well-known record types live in the top-level [`crate::rdata`] module.
//!
//! Every record kind supports the same four conversions: it can be scanned
//! from presentation format tokens, written back out via `Display`, parsed
//! from the wire format, and composed into it. The wire side is expressed
//! through the traits herein: any type that represents record data
//! implements [`RecordData`]; if the data can be parsed from a message the
//! type in addition implements [`ParseRecordData`], and if it can be added
//! to one, [`ComposeRecordData`]. The presentation side consists of a
//! `scan` constructor per kind plus the `Display` impl, whose output scans
//! back to an equal value.
//!
//! The module also provides [`UnknownRecordData`], which deals with record
//! types whose specification is not known (or has not been implemented
//! yet) by carrying the raw data.

use super::iana::RecordType;
use super::scan::{ScanError, TokenScanner};
use super::wire::{ComposeError, ParseError, WireCursor};
use core::fmt;

//------------ RecordData ----------------------------------------------------

/// A type that represents record data.
pub trait RecordData {
    /// Returns the record type associated with this record data instance.
    ///
    /// This is a method rather than an associated function to allow one
    /// type to be used for several real record types.
    fn rtype(&self) -> RecordType;
}

impl<T: RecordData> RecordData for &T {
    fn rtype(&self) -> RecordType {
        (*self).rtype()
    }
}

//------------ ParseRecordData -----------------------------------------------

/// A record data type that can be parsed from a message.
pub trait ParseRecordData: RecordData + Sized {
    /// Parses the record data.
    ///
    /// The record data is for a record of type `rtype` and is declared to
    /// be `rdlen` bytes long, starting at the position of `cursor`. The
    /// function may decide whether it wants to parse data for that type and
    /// should return `Ok(None)` if it doesn't.
    ///
    /// The implementation must never read beyond `rdlen` bytes or past the
    /// end of the buffer. On success the position has advanced by exactly
    /// the bytes consumed; on failure, and when declining the type, it has
    /// not moved at all.
    fn parse_rdata(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Option<Self>, ParseError>;
}

//------------ ComposeRecordData ---------------------------------------------

/// A type of record data that can be composed into a message.
pub trait ComposeRecordData: RecordData {
    /// Appends the wire format of the record data to `cursor`.
    ///
    /// Returns the number of bytes emitted. The caller derives the length
    /// field of the record from this count rather than asking the data
    /// separately, so the two can never disagree. On failure the buffer and
    /// the position are unchanged.
    fn compose_rdata(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<u16, ComposeError>;
}

impl<T: ComposeRecordData> ComposeRecordData for &T {
    fn compose_rdata(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<u16, ComposeError> {
        (*self).compose_rdata(cursor)
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// Record data of an unknown or unimplemented record type.
///
/// This type accepts any record type and stores the plain, unparsed record
/// data. It is the fallback the dispatcher uses when it has no handler for
/// a type, which keeps a single strange record from failing a whole
/// message.
///
/// Because some record types allow compressed domain names in their record
/// data, the raw data is not necessarily position independent; this is the
/// price of not knowing the structure of the content.
///
/// The presentation format is the generic form of [RFC 3597]: a `\#` token,
/// the data length, and the data in hexadecimal.
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: RecordType,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates generic record data from the data octets.
    pub fn from_octets(
        rtype: RecordType,
        data: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        if data.len() > 0xFFFF {
            Err(LongRecordData)
        } else {
            Ok(UnknownRecordData { rtype, data })
        }
    }

    /// Returns a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Parses the record data.
    ///
    /// Takes the full `rdlen` bytes at the position of `cursor` as they
    /// are. Since there is no structure to check, this only fails if fewer
    /// bytes are available, in which case the position does not move.
    pub fn parse(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        cursor
            .parse_octets(usize::from(rdlen))
            .map(|data| UnknownRecordData { rtype, data })
    }

    /// Scans the record data in the generic RFC 3597 form.
    ///
    /// This isn't implemented via a plain `scan` because we need the record
    /// type.
    pub fn scan(
        rtype: RecordType,
        scanner: &mut TokenScanner,
    ) -> Result<Self, ScanError> {
        if scanner.scan_str()? != "\\#" {
            return Err(ScanError::custom("'\\#' expected"));
        }
        let len = scanner.scan_u16()?;

        // The data may be split into any number of tokens.
        let mut digits = String::new();
        while let Some(token) = scanner.opt_str() {
            digits.push_str(token);
        }
        let data = decode_hex(&digits)
            .ok_or_else(|| ScanError::custom("invalid hex data"))?;
        if data.len() != usize::from(len) {
            return Err(ScanError::custom(
                "generic data has incorrect length",
            ));
        }
        Ok(UnknownRecordData { rtype, data })
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

impl RecordData for UnknownRecordData {
    fn rtype(&self) -> RecordType {
        self.rtype
    }
}

impl ParseRecordData for UnknownRecordData {
    fn parse_rdata(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Option<Self>, ParseError> {
        Self::parse(rtype, cursor, rdlen).map(Some)
    }
}

impl ComposeRecordData for UnknownRecordData {
    fn compose_rdata(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<u16, ComposeError> {
        cursor.append_slice(&self.data);
        Ok(self.data.len() as u16)
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in &self.data {
            write!(f, " {:02x}", ch)?
        }
        Ok(())
    }
}

//--- Debug

impl fmt::Debug for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("UnknownRecordData(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ LongRecordData ------------------------------------------------

/// The octets sequence to be used for record data is too long.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData;

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

impl std::error::Error for LongRecordData {}

//------------ Helper Functions ----------------------------------------------

/// Decodes a string of hex digits into bytes.
///
/// Returns `None` if the string has odd length or contains a non-hex
/// character.
fn decode_hex(digits: &str) -> Option<Vec<u8>> {
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = char::from(pair[0]).to_digit(16)?;
            let lo = char::from(pair[1]).to_digit(16)?;
            Some((hi << 4 | lo) as u8)
        })
        .collect()
}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use core::fmt::Debug;

    /// Checks that composing and parsing are reverse operations.
    ///
    /// The data is composed into a fresh cursor, the emitted count checked
    /// against the buffer, and the buffer parsed back into a value that
    /// must equal the input.
    pub fn test_compose_parse<T, F>(data: &T, parse: F)
    where
        T: ComposeRecordData + PartialEq + Debug,
        F: FnOnce(&mut WireCursor, u16) -> Result<T, ParseError>,
    {
        let mut cursor = WireCursor::new();
        let written = data.compose_rdata(&mut cursor).unwrap();
        assert_eq!(usize::from(written), cursor.len());
        cursor.seek(0);
        let parsed = parse(&mut cursor, written).unwrap();
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(*data, parsed);
    }

    /// Checks scanning, requiring all tokens to be consumed.
    pub fn test_scan<T, F>(tokens: &[&str], scan: F, expected: &T)
    where
        T: Debug + PartialEq,
        F: FnOnce(&mut TokenScanner) -> Result<T, ScanError>,
    {
        let mut scanner = TokenScanner::new(tokens);
        assert_eq!(*expected, scan(&mut scanner).unwrap());
        assert!(scanner.is_exhausted());
    }

    #[test]
    fn unknown_round_trip() {
        let data = UnknownRecordData::from_octets(
            RecordType::from_int(9999),
            vec![1, 2, 3],
        )
        .unwrap();
        test_compose_parse(&data, |cursor, rdlen| {
            UnknownRecordData::parse_rdata(
                RecordType::from_int(9999),
                cursor,
                rdlen,
            )
            .map(Option::unwrap)
        });
        assert_eq!(format!("{}", data), "\\# 3 01 02 03");
        test_scan(
            &["\\#", "3", "01", "0203"],
            |scanner| {
                UnknownRecordData::scan(RecordType::from_int(9999), scanner)
            },
            &data,
        );
    }

    #[test]
    fn unknown_scan_rejects_bad_data() {
        let rtype = RecordType::from_int(9999);
        let mut scanner = TokenScanner::new(&["\\#", "2", "012"]);
        assert!(UnknownRecordData::scan(rtype, &mut scanner).is_err());
        let mut scanner = TokenScanner::new(&["\\#", "2", "01"]);
        assert!(UnknownRecordData::scan(rtype, &mut scanner).is_err());
        let mut scanner = TokenScanner::new(&["2", "0102"]);
        assert!(UnknownRecordData::scan(rtype, &mut scanner).is_err());
    }
}
