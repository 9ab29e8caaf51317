//! Record data implementations.
//!
//! This module contains the record data implementations for the record
//! types this crate supports, one private module per type with the type
//! re-exported here, plus the [`Rdata`] enum that combines them behind a
//! single dispatch surface.
//!
//! Adding a record type means implementing the record data traits of
//! [`crate::base::rdata`] in a new module here and registering the type in
//! [`crate::base::registry`]; the dispatcher itself never changes. Types
//! nothing has been registered for are carried as
//! [`UnknownRecordData`][crate::base::rdata::UnknownRecordData].

pub mod eui48;
pub mod isdn;

pub use self::eui48::Eui48;
pub use self::isdn::Isdn;

use crate::base::iana::RecordType;
use crate::base::rdata::{
    ComposeRecordData, ParseRecordData, RecordData, UnknownRecordData,
};
use crate::base::registry::{HandlerId, Registry};
use crate::base::scan::{ScanError, TokenScanner};
use crate::base::wire::{ComposeError, ParseError, WireCursor};
use core::fmt;

//------------ Rdata ---------------------------------------------------------

/// The record data of any record type.
///
/// This enum joins the implemented record data types and the opaque
/// fallback for everything else into one value that the record layer can
/// hold without knowing the type up front.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Rdata {
    Eui48(Eui48),
    Isdn(Isdn),
    Unknown(UnknownRecordData),
}

impl Rdata {
    /// Parses the record data for a record of type `rtype`.
    ///
    /// The registry decides which implementation handles the type. A type
    /// without a handler parses into the opaque variant rather than
    /// failing: a message is allowed to carry record types this crate has
    /// never heard of.
    pub fn parse(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        match Registry::global().handler(rtype) {
            Some(HandlerId::Eui48) => {
                Eui48::parse(cursor, rdlen).map(Rdata::Eui48)
            }
            Some(HandlerId::Isdn) => {
                Isdn::parse(cursor, rdlen).map(Rdata::Isdn)
            }
            None => {
                tracing::debug!(
                    rtype = %rtype,
                    rdlen,
                    "no handler for record type, keeping raw record data"
                );
                UnknownRecordData::parse(rtype, cursor, rdlen)
                    .map(Rdata::Unknown)
            }
        }
    }

    /// Scans the record data for a record of type `rtype`.
    ///
    /// Types without a handler expect the generic RFC 3597 form.
    pub fn scan(
        rtype: RecordType,
        scanner: &mut TokenScanner,
    ) -> Result<Self, ScanError> {
        match Registry::global().handler(rtype) {
            Some(HandlerId::Eui48) => {
                Eui48::scan(scanner).map(Rdata::Eui48)
            }
            Some(HandlerId::Isdn) => Isdn::scan(scanner).map(Rdata::Isdn),
            None => {
                UnknownRecordData::scan(rtype, scanner).map(Rdata::Unknown)
            }
        }
    }
}

//--- From

impl From<Eui48> for Rdata {
    fn from(data: Eui48) -> Self {
        Rdata::Eui48(data)
    }
}

impl From<Isdn> for Rdata {
    fn from(data: Isdn) -> Self {
        Rdata::Isdn(data)
    }
}

impl From<UnknownRecordData> for Rdata {
    fn from(data: UnknownRecordData) -> Self {
        Rdata::Unknown(data)
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

impl RecordData for Rdata {
    fn rtype(&self) -> RecordType {
        match *self {
            Rdata::Eui48(ref data) => data.rtype(),
            Rdata::Isdn(ref data) => data.rtype(),
            Rdata::Unknown(ref data) => data.rtype(),
        }
    }
}

impl ParseRecordData for Rdata {
    fn parse_rdata(
        rtype: RecordType,
        cursor: &mut WireCursor,
        rdlen: u16,
    ) -> Result<Option<Self>, ParseError> {
        Self::parse(rtype, cursor, rdlen).map(Some)
    }
}

impl ComposeRecordData for Rdata {
    fn compose_rdata(
        &self,
        cursor: &mut WireCursor,
    ) -> Result<u16, ComposeError> {
        match *self {
            Rdata::Eui48(ref data) => data.compose_rdata(cursor),
            Rdata::Isdn(ref data) => data.compose_rdata(cursor),
            Rdata::Unknown(ref data) => data.compose_rdata(cursor),
        }
    }
}

//--- Display

impl fmt::Display for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Rdata::Eui48(ref data) => data.fmt(f),
            Rdata::Isdn(ref data) => data.fmt(f),
            Rdata::Unknown(ref data) => data.fmt(f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_dispatches_by_type() {
        let mut cursor =
            WireCursor::from_slice(b"\x00\x1a\x2b\x3c\x4d\x5e");
        let data =
            Rdata::parse(RecordType::EUI48, &mut cursor, 6).unwrap();
        assert!(matches!(data, Rdata::Eui48(_)));
        assert_eq!(data.rtype(), RecordType::EUI48);

        let mut cursor = WireCursor::from_slice(b"\x03abc\x0204");
        let data = Rdata::parse(RecordType::ISDN, &mut cursor, 7).unwrap();
        assert!(matches!(data, Rdata::Isdn(_)));
    }

    #[test]
    fn unknown_type_falls_back() {
        let rtype = RecordType::from_int(9999);
        let mut cursor = WireCursor::from_slice(b"\x01\x02\x03");
        let data = Rdata::parse(rtype, &mut cursor, 3).unwrap();
        match data {
            Rdata::Unknown(ref unknown) => {
                assert_eq!(unknown.data(), b"\x01\x02\x03")
            }
            ref other => panic!("unexpected dispatch: {:?}", other),
        }
        assert_eq!(data.rtype(), rtype);
    }

    #[test]
    fn scan_dispatches_by_type() {
        let mut scanner = TokenScanner::new(&["00-1a-2b-3c-4d-5e"]);
        let data = Rdata::scan(RecordType::EUI48, &mut scanner).unwrap();
        assert_eq!(format!("{}", data), "00-1a-2b-3c-4d-5e");

        let mut scanner = TokenScanner::new(&["\\#", "1", "ff"]);
        let data =
            Rdata::scan(RecordType::from_int(9999), &mut scanner).unwrap();
        assert_eq!(format!("{}", data), "\\# 1 ff");
    }
}
