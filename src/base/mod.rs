//! Basics.
//!
//! This module provides the foundation the record data implementations in
//! [`crate::rdata`] are built on:
//!
//! * [iana](iana/index.html) for the numeric parameter namespaces and their
//!   canonical assignments,
//! * [registry](registry/index.html) for the process-wide lookup registry
//!   derived from those assignments,
//! * [wire](wire/index.html) for the cursor shared by all wire-format
//!   parsing and composing within one message buffer,
//! * [name](name/index.html) for domain names,
//! * [charstr](charstr/index.html) for DNS character strings,
//! * [scan](scan/index.html) for reading presentation-format tokens,
//! * [rdata](rdata/index.html) for the record data traits and the opaque
//!   fallback representation,
//! * [record](record/index.html) for resource records including their
//!   common header fields.

pub mod charstr;
pub mod iana;
pub mod name;
pub mod rdata;
pub mod record;
pub mod registry;
pub mod scan;
pub mod wire;

pub use self::charstr::CharStr;
pub use self::name::Name;
pub use self::rdata::{ComposeRecordData, ParseRecordData, RecordData};
pub use self::record::Record;
pub use self::registry::Registry;
pub use self::scan::TokenScanner;
pub use self::wire::WireCursor;
