//! Record data for the EUI48 record.
//!
//! This is a private module. Its content is re-exported by the parent.

use crate::base::iana::RecordType;
use crate::base::rdata::{
    ComposeRecordData, ParseRecordData, RecordData,
};
use crate::base::scan::{ScanError, TokenScanner};
use crate::base::wire::{ComposeError, ParseError, WireCursor};
use core::fmt;

//------------ Eui48 ---------------------------------------------------------

/// Eui48 record data.
///
/// An Eui48 record carries a 48 bit extended unique identifier, in practice
/// the MAC address of a network interface. The record data is the six
/// address octets; the presentation format writes them as six two-digit
/// lowercase hexadecimal numbers separated by hyphens.
///
/// The Eui48 record type is defined in [RFC 7043, section 3.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc7043#section-3.1
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Eui48([u8; 6]);

impl Eui48 {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: RecordType = RecordType::EUI48;

    /// Creates new record data from the six address octets.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Eui48(octets)
    }

    /// Returns the address octets.
    #[must_use]
    pub const fn octets(self) -> [u8; 6] {
        self.0
    }

    /// Parses the record data.
    ///
    /// The record data of an Eui48 record is exactly six octets. The
    /// length is not part of the data itself, so the declared length must
    /// be six and the six octets must be available; otherwise parsing
    /// fails without moving the position.
    pub fn parse(
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        if rdlen != 6 {
            return Err(ParseError::form_error(
                "invalid EUI48 record data length",
            ));
        }
        let mut octets = [0u8; 6];
        octets.copy_from_slice(cursor.parse_slice(6)?);
        Ok(Eui48(octets))
    }

    /// Scans the record data.
    ///
    /// The address must be a single token of six hyphen-separated
    /// hexadecimal numbers. Input case does not matter; the stored value
    /// is the same either way and presents itself in lowercase.
    pub fn scan(scanner: &mut TokenScanner) -> Result<Self, ScanError> {
        let token = scanner.scan_str()?;
        let mut groups = token.split('-');
        let mut octets = [0u8; 6];
        for octet in octets.iter_mut() {
            let group = groups.next().ok_or_else(|| {
                ScanError::custom("expected six hyphen-separated groups")
            })?;
            *octet = u8::from_str_radix(group, 16).map_err(|_| {
                ScanError::custom("expected a hexadecimal number")
            })?;
        }
        if groups.next().is_some() {
            return Err(ScanError::custom(
                "expected six hyphen-separated groups",
            ));
        }
        Ok(Eui48(octets))
    }
}

//--- From

impl From<[u8; 6]> for Eui48 {
    fn from(octets: [u8; 6]) -> Self {
        Eui48(octets)
    }
}

impl From<Eui48> for [u8; 6] {
    fn from(addr: Eui48) -> Self {
        addr.0
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

impl RecordData for Eui48 {
    fn rtype(&self) -> RecordType {
        Eui48::RTYPE
    }
}

impl ParseRecordData for Eui48 {
    fn parse_rdata(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Option<Self>, ParseError> {
        if rtype == Eui48::RTYPE {
            Self::parse(cursor, rdlen).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl ComposeRecordData for Eui48 {
    fn compose_rdata(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<u16, ComposeError> {
        cursor.append_slice(&self.0);
        Ok(6)
    }
}

//--- Display

impl fmt::Display for Eui48 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02x}-{:02x}-{:02x}-{:02x}-{:02x}-{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

//--- Debug

impl fmt::Debug for Eui48 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Eui48(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_scan};

    #[test]
    fn eui48_compose_parse_scan() {
        let rdata = Eui48::new([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        test_compose_parse(&rdata, Eui48::parse);
        test_scan(&["00-1a-2b-3c-4d-5e"], Eui48::scan, &rdata);
    }

    #[test]
    fn eui48_display_scans_back() {
        let rdata = Eui48::new([0xab, 0xcd, 0xef, 0x01, 0x23, 0x45]);
        let text = format!("{}", rdata);
        assert_eq!(text, "ab-cd-ef-01-23-45");
        test_scan(&[&text], Eui48::scan, &rdata);
    }

    #[test]
    fn eui48_scan_ignores_case() {
        let lower = &["aa-bb-cc-dd-ee-ff"];
        let upper = &["AA-BB-CC-DD-EE-FF"];
        let mut lower = TokenScanner::new(lower);
        let mut upper = TokenScanner::new(upper);
        assert_eq!(
            Eui48::scan(&mut lower).unwrap(),
            Eui48::scan(&mut upper).unwrap()
        );
    }

    #[test]
    fn eui48_scan_rejects_bad_addresses() {
        for token in
            ["aa-bb-cc-dd-ee", "aa-bb-cc-dd-ee-ff-00", "aa-bb-cc-dd-ee-zz"]
        {
            let tokens = &[token];
            let mut scanner = TokenScanner::new(tokens);
            assert!(Eui48::scan(&mut scanner).is_err(), "{}", token);
        }
    }

    #[test]
    fn eui48_parse_checks_length() {
        let mut cursor = WireCursor::from_slice(b"\x00\x1a\x2b\x3c\x4d\x5e");
        assert!(Eui48::parse(&mut cursor, 5).is_err());
        assert_eq!(cursor.pos(), 0);

        let mut cursor = WireCursor::from_slice(b"\x00\x1a\x2b");
        assert_eq!(
            Eui48::parse(&mut cursor, 6).unwrap_err(),
            ParseError::ShortInput
        );
        assert_eq!(cursor.pos(), 0);
    }
}
