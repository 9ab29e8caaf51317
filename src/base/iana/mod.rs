//! Parameter namespaces for DNS.
//!
//! This module contains one type per numeric parameter namespace used by
//! resource records: record types, record classes, DNSSEC algorithms and
//! digest types, IP protocol numbers, and response codes.
//!
//! All types follow the same basic structure. They wrap the raw integer
//! code, carry the well-defined values as associated constants, and convert
//! between raw integers, mnemonics, and wire format. The canonical
//! `(mnemonic, value)` assignments of each namespace are available as the
//! `ASSIGNMENTS` constant, which is also what [`crate::base::registry`]
//! derives its lookup tables from. Reproducing the assigned values exactly
//! is a correctness requirement: real DNS software interoperates through
//! the numbers, not through internal consistency.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here.

pub use self::class::RecordClass;
pub use self::digestalg::DigestType;
pub use self::protocol::Protocol;
pub use self::rcode::ResponseCode;
pub use self::rtype::RecordType;
pub use self::secalg::Algorithm;

#[macro_use]
mod macros;

pub mod class;
pub mod digestalg;
pub mod protocol;
pub mod rcode;
pub mod rtype;
pub mod secalg;
