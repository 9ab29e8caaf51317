//! A DNS resource record codec library.
//!
//! This crate converts DNS resource records between their three
//! representations: the wire format carried inside DNS messages, the
//! presentation format used in zone files, and typed in-memory values. It
//! consists of two parts:
//!
//! * The [base] module provides the foundation: the registry of RFC-assigned
//!   numeric codes in [`base::iana`] and [`base::registry`], the shared
//!   [`base::wire::WireCursor`] used for parsing and composing, character
//!   strings, domain names, and the record data traits.
//!
//! * The [rdata] module provides the record data implementations themselves,
//!   dispatched through the [`rdata::Rdata`] sum type. Record types without
//!   an implementation fall back to an opaque representation that carries
//!   the raw data.
//!
//! In order to distinguish the two conversion directions, we use the term
//! *parsing* for extracting data from the wire format and *composing* for
//! producing it, while *scanning* reads the presentation format and the
//! `Display` impls write it.
//!
//! [base]: base/index.html
//! [rdata]: rdata/index.html

pub mod base;
pub mod rdata;
