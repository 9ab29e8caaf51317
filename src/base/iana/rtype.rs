//! Resource Record (RR) TYPEs.

//------------ RecordType ----------------------------------------------------

code_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. A normal query includes the
    /// type of record information is requested for. A few additional types,
    /// called query types, are defined as well and can only be used in
    /// questions. This type represents both of these.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    RecordType, u16;

    /// A SIG(0) signature.
    ///
    /// Pseudo type, see RFC 2931.
    (SIG0 => 0, "SIG0")

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination.
    ///
    /// (Obsolete – use MX.)
    (MD => 3, "MD")

    /// A mail forwarder.
    ///
    /// (Obsolete – use MX.)
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    ///
    /// (Experimental.)
    (MB => 7, "MB")

    /// A mail group member.
    ///
    /// (Experimental.)
    (MG => 8, "MG")

    /// A mail rename domain name.
    ///
    /// (Experimental.)
    (MR => 9, "MR")

    /// A null resource record.
    ///
    /// (Experimental.)
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// For Responsible Person.
    ///
    /// See RFC 1183.
    (RP => 17, "RP")

    /// For AFS Data Base location.
    ///
    /// See RFC 1183 and RFC 5864.
    (AFSDB => 18, "AFSDB")

    /// For X.25 PSDN address.
    ///
    /// See RFC 1183.
    (X25 => 19, "X25")

    /// For ISDN address.
    ///
    /// See RFC 1183.
    (ISDN => 20, "ISDN")

    /// For Route Through.
    ///
    /// See RFC 1183.
    (RT => 21, "RT")

    /// For NSAP address, NSAP style A record.
    ///
    /// See RFC 1706.
    (NSAP => 22, "NSAP")

    /// For domain name pointer, NSAP style.
    ///
    /// See RFC 1348, RFC 1637, RFC 1706.
    (NSAP_PTR => 23, "NSAP_PTR")

    /// For security signature.
    ///
    /// See RFC 2535.
    (SIG => 24, "SIG")

    /// For security key.
    ///
    /// See RFC 2535 and RFC 2930.
    (KEY => 25, "KEY")

    /// X.400 mail mapping information.
    ///
    /// See RFC 2163.
    (PX => 26, "PX")

    /// Geographical position.
    ///
    /// See RFC 1712.
    (GPOS => 27, "GPOS")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Location information.
    ///
    /// See RFC 1876.
    (LOC => 29, "LOC")

    /// Next domain.
    ///
    /// (Obsolete, see RFC 3755.)
    (NXT => 30, "NXT")

    /// Endpoint identifier.
    (EID => 31, "EID")

    /// Nimrod locator.
    (NIMLOC => 32, "NIMLOC")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// ATM address.
    (ATMA => 34, "ATMA")

    /// Naming authority pointer.
    ///
    /// See RFC 2915.
    (NAPTR => 35, "NAPTR")

    /// Key exchanger.
    ///
    /// See RFC 2230.
    (KX => 36, "KX")

    /// Certificate record.
    ///
    /// See RFC 4398.
    (CERT => 37, "CERT")

    /// A6 address.
    ///
    /// (Downgraded to experimental by RFC 3363.)
    (A6 => 38, "A6")

    /// Non-terminal DNS name redirection.
    ///
    /// See RFC 2672.
    (DNAME => 39, "DNAME")

    /// Kitchen sink.
    (SINK => 40, "SINK")

    /// EDNS option pseudo record.
    ///
    /// See RFC 2671.
    (OPT => 41, "OPT")

    /// Address prefix list.
    ///
    /// See RFC 3123.
    (APL => 42, "APL")

    /// Delegation signer.
    ///
    /// See RFC 4034.
    (DS => 43, "DS")

    /// SSH key fingerprint.
    ///
    /// See RFC 4255.
    (SSHFP => 44, "SSHFP")

    /// IPsec keying material.
    ///
    /// See RFC 4025.
    (IPSECKEY => 45, "IPSECKEY")

    /// DNSSEC signature.
    ///
    /// See RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// Next secure record.
    ///
    /// See RFC 4034.
    (NSEC => 47, "NSEC")

    /// DNS key.
    ///
    /// See RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// DHCP identifier.
    ///
    /// See RFC 4701.
    (DHCID => 49, "DHCID")

    /// Hashed next secure record.
    ///
    /// See RFC 5155.
    (NSEC3 => 50, "NSEC3")

    /// NSEC3 parameters.
    ///
    /// See RFC 5155.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLSA certificate association.
    ///
    /// See RFC 6698.
    (TLSA => 52, "TLSA")

    /// S/MIME certificate association.
    ///
    /// See RFC 8162.
    (SMIMEA => 53, "SMIMEA")

    /// Host identity protocol.
    ///
    /// See RFC 5205.
    (HIP => 55, "HIP")

    /// NINFO.
    (NINFO => 56, "NINFO")

    /// RKEY.
    (RKEY => 57, "RKEY")

    /// Trust anchor link.
    (TALINK => 58, "TALINK")

    /// Child DS.
    ///
    /// See RFC 7344.
    (CDS => 59, "CDS")

    /// DNSKEY the child wants reflected in DS.
    ///
    /// See RFC 7344.
    (CDNSKEY => 60, "CDNSKEY")

    /// OpenPGP key.
    ///
    /// See RFC 7929.
    (OPENPGPKEY => 61, "OPENPGPKEY")

    /// Child-to-parent synchronization.
    ///
    /// See RFC 7477.
    (CSYNC => 62, "CSYNC")

    /// Message digest over zone data.
    (ZONEMD => 63, "ZONEMD")

    /// General purpose service binding.
    (SVCB => 64, "SVCB")

    /// Service binding for the HTTPS protocol.
    (HTTPS => 65, "HTTPS")

    /// Sender policy framework.
    ///
    /// See RFC 4408.
    (SPF => 99, "SPF")

    /// UINFO.
    ///
    /// (IANA reserved, no RFC.)
    (UINFO => 100, "UINFO")

    /// UID.
    ///
    /// (IANA reserved, no RFC.)
    (UID => 101, "UID")

    /// GID.
    ///
    /// (IANA reserved, no RFC.)
    (GID => 102, "GID")

    /// UNSPEC.
    ///
    /// (IANA reserved, no RFC.)
    (UNSPEC => 103, "UNSPEC")

    /// Node identifier.
    ///
    /// See RFC 6742.
    (NID => 104, "NID")

    /// 32 bit locator.
    ///
    /// See RFC 6742.
    (L32 => 105, "L32")

    /// 64 bit locator.
    ///
    /// See RFC 6742.
    (L64 => 106, "L64")

    /// Locator pointer.
    ///
    /// See RFC 6742.
    (LP => 107, "LP")

    /// An EUI-48 address.
    ///
    /// See RFC 7043.
    (EUI48 => 108, "EUI48")

    /// An EUI-64 address.
    ///
    /// See RFC 7043.
    (EUI64 => 109, "EUI64")

    /// Transaction key.
    ///
    /// See RFC 2930.
    (TKEY => 249, "TKEY")

    /// Transaction signature.
    ///
    /// See RFC 2845.
    (TSIG => 250, "TSIG")

    /// Incremental zone transfer.
    ///
    /// See RFC 1995.
    (IXFR => 251, "IXFR")

    /// Transfer of an entire zone.
    ///
    /// See RFC 1035.
    (AXFR => 252, "AXFR")

    /// A request for mailbox-related records.
    ///
    /// See RFC 883.
    (MAILB => 253, "MAILB")

    /// A request for mail agent RRs.
    ///
    /// See RFC 973.
    (MAILA => 254, "MAILA")

    /// A request for all records the server has available.
    ///
    /// See RFC 1035.
    (ANY => 255, "ANY")

    /// Uniform resource identifier.
    ///
    /// See RFC 7553.
    (URI => 256, "URI")

    /// Certification authority restriction.
    ///
    /// See RFC 8659.
    (CAA => 257, "CAA")

    /// Application visibility and control.
    (AVC => 258, "AVC")

    /// Digital object architecture.
    (DOA => 259, "DOA")

    /// Automatic multicast tunneling relay.
    ///
    /// See RFC 8777.
    (AMTRELAY => 260, "AMTRELAY")

    /// DNSSEC trust authorities.
    (TA => 32768, "TA")

    /// DNSSEC lookaside validation.
    ///
    /// See RFC 4431.
    (DLV => 32769, "DLV")

    /// Private Bind record.
    (TYPE65534 => 65534, "TYPE65534")
}

code_enum_str_with_prefix!(RecordType, "TYPE", u16, "unknown record type");

impl RecordType {
    /// The query-only types defined in RFC 2929, section 3.1.
    ///
    /// These can appear in the question section of a message but never
    /// denote storable zone data.
    pub const QTYPES: &'static [(&'static str, u16)] = &[
        ("IXFR", 251),
        ("AXFR", 252),
        ("MAILB", 253),
        ("MAILA", 254),
        ("ANY", 255),
    ];

    /// The meta-record types defined in RFC 2929, section 3.1.
    ///
    /// These denote protocol-control records rather than zone data.
    pub const METATYPES: &'static [(&'static str, u16)] =
        &[("OPT", 41), ("TKEY", 249), ("TSIG", 250)];
}

//============ Tests =========================================================
