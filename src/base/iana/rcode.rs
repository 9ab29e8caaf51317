//! DNS response codes.

//------------ ResponseCode --------------------------------------------------

code_enum! {
    /// DNS response codes.
    ///
    /// The response code of a response indicates what happened on the
    /// server when trying to answer the query. The original specification
    /// in [RFC 1035] reserved four header bits for it; [RFC 6891] extended
    /// the code to twelve bits via the OPT pseudo-record, and the TSIG and
    /// TKEY records of [RFC 2845] and [RFC 2930] use a full sixteen bits.
    /// All of these codes share one definition space, which this type wraps
    /// as a 16 bit value.
    ///
    /// The diagnostic message for a code is available through
    /// [`crate::base::registry::Registry::rcode_message`].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 2845]: https://tools.ietf.org/html/rfc2845
    /// [RFC 2930]: https://tools.ietf.org/html/rfc2930
    /// [RFC 6891]: https://tools.ietf.org/html/rfc6891
    =>
    ResponseCode, u16;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name referenced in the query does not exist.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refuses to perform the specified operation for
    /// policy reasons.
    (REFUSED => 5, "REFUSED")

    /// Name exists when it should not.
    ///
    /// Defined in RFC 2136.
    (YXDOMAIN => 6, "YXDOMAIN")

    /// RR set exists when it should not.
    ///
    /// Defined in RFC 2136.
    (YXRRSET => 7, "YXRRSET")

    /// RR set that should exist does not.
    ///
    /// Defined in RFC 2136.
    (NXRRSET => 8, "NXRRSET")

    /// Server not authoritative for zone.
    ///
    /// Defined in RFC 2136.
    (NOTAUTH => 9, "NOTAUTH")

    /// Name not contained in zone.
    ///
    /// Defined in RFC 2136.
    (NOTZONE => 10, "NOTZONE")

    /// DSO-TYPE not implemented.
    ///
    /// Defined in RFC 8490.
    (DSOTYPENI => 11, "DSOTYPENI")

    /// TSIG signature failure.
    ///
    /// Defined in RFC 2845. RFC 6891 assigns the same value to BADVERS;
    /// since the two share the value, converting 16 back to a mnemonic
    /// yields `BADSIG`.
    (BADSIG => 16, "BADSIG")

    /// Bad OPT version.
    ///
    /// Defined in RFC 6891 with the same value as BADSIG.
    (BADVERS => 16, "BADVERS")

    /// Key not recognized.
    ///
    /// Defined in RFC 2845.
    (BADKEY => 17, "BADKEY")

    /// Signature out of time window.
    ///
    /// Defined in RFC 2845.
    (BADTIME => 18, "BADTIME")

    /// Bad TKEY mode.
    ///
    /// Defined in RFC 2930.
    (BADMODE => 19, "BADMODE")

    /// Duplicate key name.
    ///
    /// Defined in RFC 2930.
    (BADNAME => 20, "BADNAME")

    /// Algorithm not supported.
    ///
    /// Defined in RFC 2930.
    (BADALG => 21, "BADALG")

    /// Bad truncation.
    ///
    /// Defined in RFC 4635.
    (BADTRUNC => 22, "BADTRUNC")

    /// Bad or missing server cookie.
    ///
    /// Defined in RFC 7873.
    (BADCOOKIE => 23, "BADCOOKIE")
}

code_enum_str_with_decimal!(ResponseCode, u16, "unknown response code");

impl ResponseCode {
    /// The diagnostic messages for the codes that have one.
    ///
    /// This is the table behind
    /// [`Registry::rcode_message`][crate::base::registry::Registry::rcode_message];
    /// it is keyed by code value so the shared BADSIG/BADVERS value maps to
    /// a single message.
    pub const MESSAGES: &'static [(u16, &'static str)] = &[
        (0, "The request completed successfully."),
        (1, "The name server was unable to interpret the query."),
        (
            2,
            "The name server was unable to process this query due to a \
             problem with the name server.",
        ),
        (3, "The domain name referenced in the query does not exist."),
        (
            4,
            "The name server does not support the requested kind of query.",
        ),
        (
            5,
            "The name server refuses to perform the specified operation \
             for policy reasons.",
        ),
        (6, "Name Exists when it should not."),
        (7, "RR Set Exists when it should not."),
        (8, "RR Set that should exist does not."),
        (9, "Server Not Authoritative for zone."),
        (10, "Name not contained in zone."),
        (16, "TSIG Signature Failure."),
        (17, "Key not recognized."),
        (18, "Signature out of time window."),
        (19, "Bad TKEY Mode."),
        (20, "Duplicate key name."),
        (21, "Algorithm not supported."),
        (22, "Bad truncation."),
    ];
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::ResponseCode;

    #[test]
    fn shared_value() {
        assert_eq!(ResponseCode::BADSIG, ResponseCode::BADVERS);
        assert_eq!(ResponseCode::BADSIG.to_mnemonic(), Some("BADSIG"));
        assert_eq!(
            ResponseCode::from_mnemonic("BADVERS"),
            Some(ResponseCode::BADSIG)
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", ResponseCode::NXDOMAIN), "NXDOMAIN");
        assert_eq!(format!("{}", ResponseCode::from_int(12)), "12");
    }
}
