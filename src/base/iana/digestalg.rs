//! DNSSEC digest types.

//------------ DigestType ----------------------------------------------------

code_enum! {
    /// Delegation signer digest types.
    ///
    /// These numbers identify the message digest algorithm used in DS
    /// records and their relatives.
    ///
    /// For the currently registered values see the [IANA registration].
    ///
    /// [IANA registration]: https://www.iana.org/assignments/ds-rr-types/ds-rr-types.xhtml#ds-rr-types-1
    =>
    DigestType, u8;

    /// Reserved.
    (RES => 0, "RES")

    /// SHA-1.
    ///
    /// Defined in RFC 3658.
    (SHA1 => 1, "SHA-1")

    /// SHA-256.
    ///
    /// Defined in RFC 4509.
    (SHA256 => 2, "SHA-256")

    /// GOST R 34.11-94.
    ///
    /// Defined in RFC 5933.
    (GOST => 3, "GOST-R-34.11-94")

    /// SHA-384.
    ///
    /// Defined in RFC 6605.
    (SHA384 => 4, "SHA-384")
}

code_enum_str_with_decimal!(DigestType, u8, "unknown digest type");
