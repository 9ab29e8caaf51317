//! Resource records.
//!
//! Resource records are the basic units of information stored in DNS. This
//! module provides the [`Record`] type combining the common header fields
//! every record starts with and the type specific record data behind them.

use super::iana::{RecordClass, RecordType};
use super::name::Name;
use super::rdata::{ComposeRecordData, RecordData};
use super::scan::{ScanError, TokenScanner};
use super::wire::{ComposeError, ParseError, WireCursor};
use crate::rdata::Rdata;
use core::fmt;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// A record combines the header fields all records share, the owner name,
/// class, and time-to-live, with the type specific record data. The record
/// type is determined by the data and therefore not a separate field.
///
/// The wire format additionally carries the length of the record data
/// between header and data. That length is never stored in a value of this
/// type: composing measures the emitted data and patches the measured
/// count into the length field, while parsing requires the data to cover
/// exactly the declared length. The two can therefore not drift apart.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    owner: Name,
    class: RecordClass,
    ttl: u32,
    data: Rdata,
}

impl Record {
    /// Creates a new record from its components.
    #[must_use]
    pub fn new(
        owner: Name,
        class: RecordClass,
        ttl: u32,
        data: Rdata,
    ) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    /// Returns the owner name of the record.
    #[must_use]
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> RecordType {
        self.data.rtype()
    }

    /// Returns the class of the record.
    #[must_use]
    pub fn class(&self) -> RecordClass {
        self.class
    }

    /// Returns the time-to-live of the record in seconds.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the time-to-live of the record.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }

    /// Returns a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &Rdata {
        &self.data
    }

    /// Converts the record into its record data.
    #[must_use]
    pub fn into_data(self) -> Rdata {
        self.data
    }

    /// Parses a record from the position of `cursor`.
    ///
    /// Reads the common header, dispatches the record data by the type
    /// found there, and requires the data to consume exactly the length
    /// the header declared. On any failure the position does not move.
    pub fn parse(cursor: &mut WireCursor) -> Result<Self, ParseError> {
        let mark = cursor.pos();
        let res = Self::parse_parts(cursor);
        if res.is_err() {
            cursor.seek(mark);
        }
        res
    }

    fn parse_parts(cursor: &mut WireCursor) -> Result<Self, ParseError> {
        let owner = cursor.parse_name()?;
        let rtype = RecordType::parse(cursor)?;
        let class = RecordClass::parse(cursor)?;
        let ttl = cursor.parse_u32()?;
        let rdlen = cursor.parse_u16()?;
        cursor.check_len(usize::from(rdlen))?;
        let start = cursor.pos();
        let data = Rdata::parse(rtype, cursor, rdlen)?;
        if cursor.pos() - start != usize::from(rdlen) {
            tracing::trace!(
                rtype = %rtype,
                rdlen,
                "record data shorter than its declared length"
            );
            return Err(ParseError::form_error(
                "trailing data in record data",
            ));
        }
        Ok(Record {
            owner,
            class,
            ttl,
            data,
        })
    }

    /// Appends the wire format of the record to `cursor`.
    ///
    /// The length field is written as a placeholder first and patched once
    /// the record data has reported its emitted byte count. Returns the
    /// total number of bytes appended for the whole record. On failure the
    /// buffer is rolled back to where it was.
    pub fn compose(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<usize, ComposeError> {
        let mark = cursor.len();
        cursor.append_name(&self.owner);
        self.rtype().compose(cursor);
        self.class.compose(cursor);
        cursor.append_u32(self.ttl);
        let len_pos = cursor.len();
        cursor.append_u16(0);
        match self.data.compose_rdata(cursor) {
            Ok(rdlen) => {
                cursor.patch_u16(len_pos, rdlen);
                Ok(cursor.len() - mark)
            }
            Err(err) => {
                cursor.truncate(mark);
                Err(err)
            }
        }
    }

    /// Scans a record from the record data tokens of one entry.
    ///
    /// The header fields are set by the surrounding entry context before
    /// any record data is read, so they arrive as arguments; only the
    /// record data itself comes from the scanner.
    pub fn scan(
        owner: Name,
        class: RecordClass,
        ttl: u32,
        rtype: RecordType,
        scanner: &mut TokenScanner,
    ) -> Result<Self, ScanError> {
        Rdata::scan(rtype, scanner).map(|data| Record {
            owner,
            class,
            ttl,
            data,
        })
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::charstr::CharStr;
    use crate::rdata::{Eui48, Isdn};

    fn eui48_record() -> Record {
        Record::new(
            "host.example.com".parse().unwrap(),
            RecordClass::IN,
            3600,
            Rdata::Eui48(Eui48::new([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e])),
        )
    }

    #[test]
    fn wire_round_trip() {
        let record = eui48_record();
        let mut cursor = WireCursor::new();
        let written = record.compose(&mut cursor).unwrap();
        assert_eq!(written, cursor.len());

        // The patched length field covers exactly the record data.
        let rdlen_pos = cursor.len() - 6 - 2;
        assert_eq!(&cursor.as_slice()[rdlen_pos..rdlen_pos + 2], b"\x00\x06");

        cursor.seek(0);
        assert_eq!(Record::parse(&mut cursor).unwrap(), record);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn isdn_record_round_trip() {
        let record = Record::new(
            "example.com".parse().unwrap(),
            RecordClass::IN,
            600,
            Rdata::Isdn(Isdn::new(
                CharStr::from_octets(b"150862028003".as_slice()).unwrap(),
                CharStr::from_octets(b"04".as_slice()).unwrap(),
            )),
        );
        let mut cursor = WireCursor::new();
        record.compose(&mut cursor).unwrap();
        cursor.seek(0);
        assert_eq!(Record::parse(&mut cursor).unwrap(), record);
    }

    #[test]
    fn parse_rejects_undeclared_trailing_data() {
        // An ISDN record whose declared length is one byte more than its
        // two character strings cover.
        let mut cursor = WireCursor::new();
        cursor.append_name(&"example.com".parse().unwrap());
        RecordType::ISDN.compose(&mut cursor);
        RecordClass::IN.compose(&mut cursor);
        cursor.append_u32(600);
        cursor.append_u16(8);
        cursor.append_slice(b"\x03abc\x0204\x00");
        cursor.seek(0);
        assert!(Record::parse(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn parse_rejects_short_record_data() {
        let mut cursor = WireCursor::new();
        cursor.append_name(&"example.com".parse().unwrap());
        RecordType::EUI48.compose(&mut cursor);
        RecordClass::IN.compose(&mut cursor);
        cursor.append_u32(600);
        cursor.append_u16(6);
        cursor.append_slice(b"\x00\x1a");
        cursor.seek(0);
        assert_eq!(
            Record::parse(&mut cursor).unwrap_err(),
            ParseError::ShortInput
        );
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn compose_failure_rolls_back() {
        let record = Record::new(
            "example.com".parse().unwrap(),
            RecordClass::IN,
            600,
            Rdata::Isdn(Isdn::new(CharStr::empty(), CharStr::empty())),
        );
        let mut cursor = WireCursor::new();
        cursor.append_slice(b"prefix");
        assert_eq!(
            record.compose(&mut cursor).unwrap_err(),
            ComposeError::EmptyRecordData
        );
        assert_eq!(cursor.as_slice(), b"prefix");
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", eui48_record()),
            "host.example.com. 3600 IN EUI48 00-1a-2b-3c-4d-5e"
        );
    }

    #[test]
    fn scan() {
        let mut scanner = TokenScanner::new(&["00-1a-2b-3c-4d-5e"]);
        let record = Record::scan(
            "host.example.com".parse().unwrap(),
            RecordClass::IN,
            3600,
            RecordType::EUI48,
            &mut scanner,
        )
        .unwrap();
        assert_eq!(record, eui48_record());
        assert!(scanner.is_exhausted());
    }
}
