//! DNSSEC algorithm numbers.

//------------ Algorithm -----------------------------------------------------

code_enum! {
    /// Security algorithm numbers.
    ///
    /// These numbers are used in various security related record types,
    /// such as DNSKEY, RRSIG, and DS records.
    ///
    /// For the currently registered values see the [IANA registration].
    ///
    /// [IANA registration]: http://www.iana.org/assignments/dns-sec-alg-numbers/dns-sec-alg-numbers.xhtml#dns-sec-alg-numbers-1
    =>
    Algorithm, u8;

    /// Reserved.
    (RES => 0, "RES")

    /// RSA/MD5.
    ///
    /// Described in RFC 2537, deprecated due to weaknesses of the MD5 hash
    /// algorithm by RFC 3110 which suggests RSA/SHA-1 instead.
    (RSAMD5 => 1, "RSAMD5")

    /// Diffie-Hellman.
    ///
    /// Described in RFC 2539 for storing Diffie-Hellman keys in DNS
    /// resource records.
    (DH => 2, "DH")

    /// DSA/SHA-1.
    ///
    /// Described in RFC 2536.
    (DSA => 3, "DSA")

    /// Elliptic curve crypto.
    ///
    /// (Reserved, never standardized.)
    (ECC => 4, "ECC")

    /// RSA/SHA-1.
    ///
    /// Described in RFC 3110, mandatory for DNSSEC implementations.
    (RSASHA1 => 5, "RSASHA1")

    /// DSA-NSEC3-SHA1.
    ///
    /// An alias for DSA for use within NSEC3 records.
    (DSA_NSEC3_SHA1 => 6, "DSA-NSEC3-SHA1")

    /// RSASHA1-NSEC3-SHA1.
    ///
    /// An alias for RSASHA1 for use within NSEC3 records.
    (RSASHA1_NSEC3_SHA1 => 7, "RSASHA1-NSEC3-SHA1")

    /// RSA/SHA-256.
    ///
    /// Described in RFC 5702.
    (RSASHA256 => 8, "RSASHA256")

    /// RSA/SHA-512.
    ///
    /// Described in RFC 5702.
    (RSASHA512 => 10, "RSASHA512")

    /// GOST R 34.10-2001.
    ///
    /// Described in RFC 5933.
    (ECC_GOST => 12, "ECC-GOST")

    /// ECDSA Curve P-256 with SHA-256.
    ///
    /// Described in RFC 6605.
    (ECDSAP256SHA256 => 13, "ECDSAP256SHA256")

    /// ECDSA Curve P-384 with SHA-384.
    ///
    /// Described in RFC 6605.
    (ECDSAP384SHA384 => 14, "ECDSAP384SHA384")

    /// Ed25519.
    ///
    /// Described in RFC 8080.
    (ED25519 => 15, "ED25519")

    /// Ed448.
    ///
    /// Described in RFC 8080.
    (ED448 => 16, "ED448")

    /// Reserved for indirect keys.
    ///
    /// Reserved by RFC 4034.
    (INDIRECT => 252, "INDIRECT")

    /// A private algorithm identified by a domain name.
    ///
    /// Defined in RFC 4034.
    (PRIVATEDNS => 253, "PRIVATEDNS")

    /// A private algorithm identified by an ISO OID.
    ///
    /// Defined in RFC 4034.
    (PRIVATEOID => 254, "PRIVATEOID")
}

code_enum_str_with_decimal!(Algorithm, u8, "unknown algorithm");
