//! IP protocol numbers.

//------------ Protocol ------------------------------------------------------

code_enum! {
    /// IP protocol numbers as assigned in RFC 1010.
    ///
    /// These are used in the service description of WKS records. Gaps in
    /// the number space were unassigned or reserved for host-internal
    /// protocols at the time of assignment.
    =>
    Protocol, u8;

    /// Internet control message protocol.
    (ICMP => 1, "ICMP")

    /// Internet group management protocol.
    (IGMP => 2, "IGMP")

    /// Gateway-to-gateway protocol.
    (GGP => 3, "GGP")

    /// Stream.
    (ST => 5, "ST")

    /// Transmission control protocol.
    (TCP => 6, "TCP")

    /// UCL.
    (UCL => 7, "UCL")

    /// Exterior gateway protocol.
    (EGP => 8, "EGP")

    /// Any private interior gateway protocol.
    (IGP => 9, "IGP")

    /// BBN RCC monitoring.
    (BBN_RCC_MON => 10, "BBN-RCC-MON")

    /// Network voice protocol.
    (NVP_II => 11, "NVP-II")

    /// PARC universal packet protocol.
    (PUP => 12, "PUP")

    /// ARGUS.
    (ARGUS => 13, "ARGUS")

    /// EMCON.
    (EMCON => 14, "EMCON")

    /// Cross net debugger.
    (XNET => 15, "XNET")

    /// Chaos.
    (CHAOS => 16, "CHAOS")

    /// User datagram protocol.
    (UDP => 17, "UDP")

    /// Multiplexing.
    (MUX => 18, "MUX")

    /// DCN measurement subsystems.
    (DCN_MEAS => 19, "DCN-MEAS")

    /// Host monitoring protocol.
    (HMP => 20, "HMP")

    /// Packet radio measurement.
    (PRM => 21, "PRM")

    /// Xerox NS IDP.
    (XNS_IDP => 22, "XNS-IDP")

    /// Trunk-1.
    (TRUNK_1 => 23, "TRUNK-1")

    /// Trunk-2.
    (TRUNK_2 => 24, "TRUNK-2")

    /// Leaf-1.
    (LEAF_1 => 25, "LEAF-1")

    /// Leaf-2.
    (LEAF_2 => 26, "LEAF-2")

    /// Reliable data protocol.
    (RDP => 27, "RDP")

    /// Internet reliable transaction protocol.
    (IRTP => 28, "IRTP")

    /// ISO transport protocol class 4.
    (ISO_TP4 => 29, "ISO-TP4")

    /// Bulk data transfer protocol.
    (NETBLT => 30, "NETBLT")

    /// MFE network services protocol.
    (MFE_NSP => 31, "MFE-NSP")

    /// MERIT internodal protocol.
    (MERIT_INP => 32, "MERIT-INP")

    /// Sequential exchange protocol.
    (SEP => 33, "SEP")

    /// CFTP.
    (CFTP => 62, "CFTP")

    /// SATNET and backroom EXPAK.
    (SAT_EXPAK => 64, "SAT-EXPAK")

    /// MIT subnet support.
    (MIT_SUBNET => 65, "MIT-SUBNET")

    /// MIT remote virtual disk protocol.
    (RVD => 66, "RVD")

    /// Internet pluribus packet core.
    (IPPC => 67, "IPPC")

    /// SATNET monitoring.
    (SAT_MON => 69, "SAT-MON")

    /// Internet packet core utility.
    (IPCV => 71, "IPCV")

    /// Backroom SATNET monitoring.
    (BR_SAT_MON => 76, "BR-SAT-MON")

    /// Wideband monitoring.
    (WB_MON => 78, "WB-MON")

    /// Wideband EXPAK.
    (WB_EXPAK => 79, "WB-EXPAK")
}

code_enum_str_with_decimal!(Protocol, u8, "unknown protocol");
