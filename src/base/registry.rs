//! The process-wide parameter registry.
//!
//! The registry holds the lookup tables tying the parameter namespaces of
//! [`crate::base::iana`] together: mnemonic to value and back for every
//! namespace, the diagnostic messages for response codes, the marker sets
//! for query-only and meta-record types, and the map from record type to
//! the record data implementation handling it.
//!
//! The reverse tables are derived by inverting the canonical assignment
//! slices when the registry is built. The inversion verifies that every
//! table is a bijection: a duplicate name or value means an entry would be
//! silently lost, which is a defect in the tables themselves and reported
//! as [`RegistryError`] rather than tolerated.
//!
//! A [`Registry`] is built once, single-threaded, before any parsing or
//! composing activity, and is immutable afterwards. The [`Registry::global`]
//! accessor provides the shared instance; since it is read-only, any number
//! of concurrent operations may use it without synchronization.

use super::iana::{
    Algorithm, DigestType, Protocol, RecordClass, RecordType, ResponseCode,
};
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;
use std::sync::OnceLock;

//------------ HandlerId -----------------------------------------------------

/// Identifies the record data implementation for a record type.
///
/// Record types without a handler are represented by
/// [`UnknownRecordData`][crate::base::rdata::UnknownRecordData] instead.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HandlerId {
    /// [`crate::rdata::Eui48`]
    Eui48,

    /// [`crate::rdata::Isdn`]
    Isdn,
}

/// The record types that have a record data implementation.
const HANDLERS: &[(u16, HandlerId)] = &[
    (RecordType::ISDN.to_int(), HandlerId::Isdn),
    (RecordType::EUI48.to_int(), HandlerId::Eui48),
];

//------------ Registry ------------------------------------------------------

/// The lookup registry derived from the canonical assignments.
pub struct Registry {
    types: Table<u16>,
    qtypes: Table<u16>,
    metatypes: Table<u16>,
    classes: Table<u16>,
    algorithms: Table<u8>,
    digests: Table<u8>,
    protocols: Table<u8>,
    rcode_messages: HashMap<u16, &'static str>,
    handlers: HashMap<u16, HandlerId>,
    initial_id: u16,
}

impl Registry {
    /// Builds the registry from the canonical assignments.
    ///
    /// Apart from deriving the lookup tables, this draws the pseudo-random
    /// starting point for outbound transaction identifiers. The seed only
    /// serves to avoid identifier collisions between consecutive runs; it
    /// is explicitly not a security measure.
    pub fn new() -> Result<Self, RegistryError> {
        let mut rcode_messages =
            HashMap::with_capacity(ResponseCode::MESSAGES.len());
        for &(value, message) in ResponseCode::MESSAGES {
            if rcode_messages.insert(value, message).is_some() {
                return Err(RegistryError::duplicate(
                    "response code",
                    value.to_string(),
                ));
            }
        }
        let res = Registry {
            types: Table::build("record type", RecordType::ASSIGNMENTS)?,
            qtypes: Table::build("query type", RecordType::QTYPES)?,
            metatypes: Table::build("meta type", RecordType::METATYPES)?,
            classes: Table::build("class", RecordClass::ASSIGNMENTS)?,
            algorithms: Table::build("algorithm", Algorithm::ASSIGNMENTS)?,
            digests: Table::build("digest type", DigestType::ASSIGNMENTS)?,
            protocols: Table::build("protocol", Protocol::ASSIGNMENTS)?,
            rcode_messages,
            handlers: HANDLERS.iter().copied().collect(),
            initial_id: rand::random(),
        };
        tracing::debug!(
            types = res.types.len(),
            handlers = res.handlers.len(),
            initial_id = res.initial_id,
            "initialized DNS parameter registry"
        );
        Ok(res)
    }

    /// Returns the shared registry instance.
    ///
    /// The instance is built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the canonical assignments contain a duplicate. That is a
    /// defect in the tables compiled into this crate, not a runtime
    /// condition.
    #[must_use]
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| match Registry::new() {
            Ok(registry) => registry,
            Err(err) => panic!("broken registry tables: {}", err),
        })
    }

    /// Looks up a record type by its mnemonic.
    #[must_use]
    pub fn type_by_name(&self, name: &str) -> Option<RecordType> {
        self.types.value(name).map(RecordType::from_int)
    }

    /// Looks up the mnemonic of a record type.
    #[must_use]
    pub fn type_name(&self, rtype: RecordType) -> Option<&'static str> {
        self.types.name(rtype.to_int())
    }

    /// Looks up a class by its mnemonic.
    #[must_use]
    pub fn class_by_name(&self, name: &str) -> Option<RecordClass> {
        self.classes.value(name).map(RecordClass::from_int)
    }

    /// Looks up the mnemonic of a class.
    #[must_use]
    pub fn class_name(&self, class: RecordClass) -> Option<&'static str> {
        self.classes.name(class.to_int())
    }

    /// Looks up a security algorithm by its mnemonic.
    #[must_use]
    pub fn algorithm_by_name(&self, name: &str) -> Option<Algorithm> {
        self.algorithms.value(name).map(Algorithm::from_int)
    }

    /// Looks up the mnemonic of a security algorithm.
    #[must_use]
    pub fn algorithm_name(&self, alg: Algorithm) -> Option<&'static str> {
        self.algorithms.name(alg.to_int())
    }

    /// Looks up a digest type by its mnemonic.
    #[must_use]
    pub fn digest_by_name(&self, name: &str) -> Option<DigestType> {
        self.digests.value(name).map(DigestType::from_int)
    }

    /// Looks up the mnemonic of a digest type.
    #[must_use]
    pub fn digest_name(&self, digest: DigestType) -> Option<&'static str> {
        self.digests.name(digest.to_int())
    }

    /// Looks up an IP protocol by its mnemonic.
    #[must_use]
    pub fn protocol_by_name(&self, name: &str) -> Option<Protocol> {
        self.protocols.value(name).map(Protocol::from_int)
    }

    /// Looks up the mnemonic of an IP protocol.
    #[must_use]
    pub fn protocol_name(&self, proto: Protocol) -> Option<&'static str> {
        self.protocols.name(proto.to_int())
    }

    /// Returns the diagnostic message for a response code.
    #[must_use]
    pub fn rcode_message(
        &self,
        rcode: ResponseCode,
    ) -> Option<&'static str> {
        self.rcode_messages.get(&rcode.to_int()).copied()
    }

    /// Returns whether a record type may only appear in questions.
    #[must_use]
    pub fn is_qtype(&self, rtype: RecordType) -> bool {
        self.qtypes.contains(rtype.to_int())
    }

    /// Returns whether a record type denotes a protocol-control record.
    ///
    /// Records of such types must never be treated as storable zone data.
    #[must_use]
    pub fn is_metatype(&self, rtype: RecordType) -> bool {
        self.metatypes.contains(rtype.to_int())
    }

    /// Returns the record data implementation for a record type.
    ///
    /// Returns `None` for types without one, in which case callers fall
    /// back to the opaque representation.
    #[must_use]
    pub fn handler(&self, rtype: RecordType) -> Option<HandlerId> {
        self.handlers.get(&rtype.to_int()).copied()
    }

    /// Returns the starting point for outbound transaction identifiers.
    #[must_use]
    pub fn initial_transaction_id(&self) -> u16 {
        self.initial_id
    }
}

//------------ Table ---------------------------------------------------------

/// The forward and reverse lookup maps of one namespace.
struct Table<T> {
    by_name: HashMap<&'static str, T>,
    by_value: HashMap<T, &'static str>,
}

impl<T: Copy + Eq + Hash> Table<T> {
    /// Builds both maps from the canonical assignments.
    ///
    /// Fails if any name or value appears twice.
    fn build(
        table: &'static str,
        entries: &[(&'static str, T)],
    ) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_value = HashMap::with_capacity(entries.len());
        for &(name, value) in entries {
            if by_name.insert(name, value).is_some()
                || by_value.insert(value, name).is_some()
            {
                return Err(RegistryError::duplicate(table, name.into()));
            }
        }
        Ok(Table { by_name, by_value })
    }

    fn len(&self) -> usize {
        self.by_name.len()
    }

    fn value(&self, name: &str) -> Option<T> {
        self.by_name.get(name).copied()
    }

    fn name(&self, value: T) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    fn contains(&self, value: T) -> bool {
        self.by_value.contains_key(&value)
    }
}

//------------ RegistryError -------------------------------------------------

/// A duplicate entry was found while deriving the lookup tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryError {
    table: &'static str,
    entry: String,
}

impl RegistryError {
    fn duplicate(table: &'static str, entry: String) -> Self {
        RegistryError { table, entry }
    }
}

//--- Display and Error

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "duplicate entry '{}' in the {} table",
            self.entry, self.table
        )
    }
}

impl std::error::Error for RegistryError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bijection() {
        let registry = Registry::global();
        for &(name, value) in RecordType::ASSIGNMENTS {
            let rtype = RecordType::from_int(value);
            assert_eq!(registry.type_by_name(name), Some(rtype));
            assert_eq!(registry.type_name(rtype), Some(name));
        }
        for &(name, value) in RecordClass::ASSIGNMENTS {
            let class = RecordClass::from_int(value);
            assert_eq!(registry.class_by_name(name), Some(class));
            assert_eq!(registry.class_name(class), Some(name));
        }
        for &(name, value) in Algorithm::ASSIGNMENTS {
            let alg = Algorithm::from_int(value);
            assert_eq!(registry.algorithm_by_name(name), Some(alg));
            assert_eq!(registry.algorithm_name(alg), Some(name));
        }
        for &(name, value) in DigestType::ASSIGNMENTS {
            let digest = DigestType::from_int(value);
            assert_eq!(registry.digest_by_name(name), Some(digest));
            assert_eq!(registry.digest_name(digest), Some(name));
        }
        for &(name, value) in Protocol::ASSIGNMENTS {
            let proto = Protocol::from_int(value);
            assert_eq!(registry.protocol_by_name(name), Some(proto));
            assert_eq!(registry.protocol_name(proto), Some(name));
        }
    }

    #[test]
    fn collision_detected() {
        assert!(Table::build("test", &[("A", 1u16), ("B", 1)]).is_err());
        assert!(Table::build("test", &[("A", 1u16), ("A", 2)]).is_err());
        assert!(Table::build("test", &[("A", 1u16), ("B", 2)]).is_ok());
    }

    #[test]
    fn marker_sets_disjoint() {
        let registry = Registry::global();
        for &(_, value) in RecordType::QTYPES {
            let rtype = RecordType::from_int(value);
            assert!(registry.is_qtype(rtype));
            assert!(!registry.is_metatype(rtype));
        }
        for &(_, value) in RecordType::METATYPES {
            let rtype = RecordType::from_int(value);
            assert!(registry.is_metatype(rtype));
            assert!(!registry.is_qtype(rtype));
        }
        assert!(!registry.is_qtype(RecordType::A));
        assert!(!registry.is_metatype(RecordType::A));
    }

    #[test]
    fn handlers() {
        let registry = Registry::global();
        assert_eq!(
            registry.handler(RecordType::EUI48),
            Some(HandlerId::Eui48)
        );
        assert_eq!(registry.handler(RecordType::ISDN), Some(HandlerId::Isdn));
        assert_eq!(registry.handler(RecordType::from_int(9999)), None);
    }

    #[test]
    fn rcode_messages() {
        let registry = Registry::global();
        assert_eq!(
            registry.rcode_message(ResponseCode::NOERROR),
            Some("The request completed successfully.")
        );
        assert_eq!(
            registry.rcode_message(ResponseCode::BADSIG),
            Some("TSIG Signature Failure.")
        );
        assert_eq!(
            registry.rcode_message(ResponseCode::from_int(12)),
            None
        );
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
    }
}
