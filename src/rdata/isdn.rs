//! Record data for the ISDN record.
//!
//! This is a private module. Its content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::iana::RecordType;
use crate::base::rdata::{
    ComposeRecordData, ParseRecordData, RecordData,
};
use crate::base::scan::{ScanError, TokenScanner};
use crate::base::wire::{ComposeError, ParseError, WireCursor};
use core::fmt;

//------------ Isdn ----------------------------------------------------------

/// Isdn record data.
///
/// An Isdn record maps the owner name to an ISDN number, optionally
/// followed by a subaddress. The record data is one or two character
/// strings: the mandatory address and, if anything remains of the record
/// data after it, the subaddress.
///
/// An empty subaddress stands in for an absent one. Since an empty
/// subaddress is left out when composing, the two cases become
/// indistinguishable once a record has traveled over the wire. This
/// asymmetry is inherent to the wire format and deliberately kept.
///
/// The Isdn record type is defined in [RFC 1183, section 3.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1183#section-3.2
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Isdn {
    address: CharStr,
    subaddress: CharStr,
}

impl Isdn {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: RecordType = RecordType::ISDN;

    /// Creates new record data from the components.
    #[must_use]
    pub fn new(address: CharStr, subaddress: CharStr) -> Self {
        Isdn {
            address,
            subaddress,
        }
    }

    /// The ISDN address of the owner.
    #[must_use]
    pub fn address(&self) -> &CharStr {
        &self.address
    }

    /// The subaddress, empty if there is none.
    #[must_use]
    pub fn subaddress(&self) -> &CharStr {
        &self.subaddress
    }

    /// Parses the record data.
    ///
    /// Reads the address and, if the declared length says there is more,
    /// the subaddress. Either character string claiming more bytes than
    /// the declared length covers is malformed. On failure the position
    /// does not move.
    pub fn parse(
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        let mark = cursor.pos();
        let res = Self::parse_fields(cursor, rdlen);
        if res.is_err() {
            cursor.seek(mark);
        }
        res
    }

    fn parse_fields(
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        if rdlen == 0 {
            return Err(ParseError::form_error("empty ISDN record data"));
        }
        let rdlen = usize::from(rdlen);
        let address_len = usize::from(cursor.peek_u8()?);
        if 1 + address_len > rdlen {
            return Err(ParseError::form_error(
                "ISDN address exceeds record data length",
            ));
        }
        let address = CharStr::parse(cursor)?;
        let used = 1 + address_len;
        let subaddress = if used < rdlen {
            let subaddress_len = usize::from(cursor.peek_u8()?);
            if used + 1 + subaddress_len > rdlen {
                return Err(ParseError::form_error(
                    "ISDN subaddress exceeds record data length",
                ));
            }
            CharStr::parse(cursor)?
        } else {
            CharStr::empty()
        };
        Ok(Isdn {
            address,
            subaddress,
        })
    }

    /// Scans the record data.
    ///
    /// The first token is the address, an optional second token the
    /// subaddress.
    pub fn scan(scanner: &mut TokenScanner) -> Result<Self, ScanError> {
        let address = scanner.scan_charstr()?;
        let subaddress = scanner.opt_charstr()?.unwrap_or_default();
        Ok(Isdn {
            address,
            subaddress,
        })
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

impl RecordData for Isdn {
    fn rtype(&self) -> RecordType {
        Isdn::RTYPE
    }
}

impl ParseRecordData for Isdn {
    fn parse_rdata(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Option<Self>, ParseError> {
        if rtype == Isdn::RTYPE {
            Self::parse(cursor, rdlen).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl ComposeRecordData for Isdn {
    fn compose_rdata(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<u16, ComposeError> {
        if self.address.is_empty() {
            return Err(ComposeError::EmptyRecordData);
        }
        self.address.compose(cursor);
        let mut written = self.address.compose_len();
        if !self.subaddress.is_empty() {
            self.subaddress.compose(cursor);
            written += self.subaddress.compose_len();
        }
        Ok(written)
    }
}

//--- Display

impl fmt::Display for Isdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.address, self.subaddress)
    }
}

//--- Debug

impl fmt::Debug for Isdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Isdn")
            .field("address", &self.address)
            .field("subaddress", &self.subaddress)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_scan};

    fn charstr(data: &[u8]) -> CharStr {
        CharStr::from_octets(data).unwrap()
    }

    #[test]
    fn isdn_compose_parse_scan() {
        let rdata =
            Isdn::new(charstr(b"150862028003"), charstr(b"04"));
        test_compose_parse(&rdata, Isdn::parse);
        test_scan(&["150862028003", "04"], Isdn::scan, &rdata);
    }

    #[test]
    fn isdn_without_subaddress() {
        let rdata = Isdn::new(charstr(b"150862028003"), CharStr::empty());
        test_compose_parse(&rdata, Isdn::parse);
        test_scan(&["150862028003"], Isdn::scan, &rdata);
    }

    #[test]
    fn isdn_single_field_wire() {
        let mut cursor = WireCursor::from_slice(b"\x03abc");
        let rdata = Isdn::parse(&mut cursor, 4).unwrap();
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(rdata.address().as_slice(), b"abc");
        assert!(rdata.subaddress().is_empty());

        // Re-encoding yields the identical bytes.
        let mut cursor = WireCursor::new();
        assert_eq!(rdata.compose_rdata(&mut cursor).unwrap(), 4);
        assert_eq!(cursor.as_slice(), b"\x03abc");
    }

    #[test]
    fn isdn_empty_and_absent_subaddress_agree() {
        let explicit =
            Isdn::new(charstr(b"150862028003"), CharStr::empty());
        let mut cursor = WireCursor::new();
        let written = explicit.compose_rdata(&mut cursor).unwrap();
        assert_eq!(usize::from(written), cursor.len());
        assert_eq!(cursor.as_slice(), b"\x0c150862028003");
    }

    #[test]
    fn isdn_display() {
        let rdata = Isdn::new(charstr(b"150862028003"), charstr(b"04"));
        assert_eq!(format!("{}", rdata), "\"150862028003\" \"04\"");
        let rdata = Isdn::new(charstr(b"150862028003"), CharStr::empty());
        assert_eq!(format!("{}", rdata), "\"150862028003\" \"\"");
    }

    #[test]
    fn isdn_compose_requires_address() {
        let rdata = Isdn::new(CharStr::empty(), charstr(b"04"));
        let mut cursor = WireCursor::new();
        assert_eq!(
            rdata.compose_rdata(&mut cursor).unwrap_err(),
            ComposeError::EmptyRecordData
        );
        assert!(cursor.is_empty());
    }

    #[test]
    fn isdn_parse_rejects_bad_lengths() {
        // Empty record data.
        let mut cursor = WireCursor::from_slice(b"");
        assert!(Isdn::parse(&mut cursor, 0).is_err());

        // Address claims more than the record data holds.
        let mut cursor = WireCursor::from_slice(b"\x05abc");
        assert!(Isdn::parse(&mut cursor, 4).is_err());
        assert_eq!(cursor.pos(), 0);

        // Subaddress claims more than the record data holds.
        let mut cursor = WireCursor::from_slice(b"\x03abc\x0504");
        assert!(Isdn::parse(&mut cursor, 7).is_err());
        assert_eq!(cursor.pos(), 0);

        // Subaddress truncated in the buffer itself.
        let mut cursor = WireCursor::from_slice(b"\x03abc\x0404");
        assert_eq!(
            Isdn::parse(&mut cursor, 9).unwrap_err(),
            ParseError::ShortInput
        );
        assert_eq!(cursor.pos(), 0);
    }
}
