//! DNS CLASSes.

//------------ RecordClass ---------------------------------------------------

code_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class has its own separate
    /// record tree starting at the root. In practice, only the IN class is
    /// really relevant.
    ///
    /// In addition, there are query classes or QCLASSes that are used in
    /// questions or UPDATE queries, namely NONE and ANY.
    ///
    /// Classes are represented by a 16 bit value, which this type wraps.
    ///
    /// See [RFC 1034] for the introduction of classes and the
    /// [DNS CLASSes IANA registry] for an overview of assigned values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    RecordClass, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// Chaosnet (CH).
    ///
    /// A network protocol developed at MIT in the 1970s. Reused by BIND for
    /// built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information protocol part of MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class None.
    ///
    /// Defined in RFC 2136, this class is used in UPDATE queries to
    /// require that an RRset does not exist prior to the update.
    (NONE => 254, "NONE")

    /// Query class Any.
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 255, "ANY")
}

code_enum_str_with_prefix!(RecordClass, "CLASS", u16, "unknown class");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::RecordClass;

    #[test]
    fn str_round_trip() {
        assert_eq!(format!("{}", RecordClass::IN), "IN");
        assert_eq!(format!("{}", RecordClass::from_int(5)), "CLASS5");
        assert_eq!("in".parse::<RecordClass>().unwrap(), RecordClass::IN);
        assert_eq!(
            "CLASS5".parse::<RecordClass>().unwrap(),
            RecordClass::from_int(5)
        );
    }
}
