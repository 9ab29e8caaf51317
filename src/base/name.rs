//! Domain names.
//!
//! Names are kept in presentation form: dot-separated labels without the
//! trailing dot, with the root name being the empty sequence of labels.
//! When reading a name from wire format, bytes that are not printable
//! ASCII are escaped the zone-file way, a backslash followed by the three
//! digit decimal value; dots and backslashes inside a label get a plain
//! backslash escape.
//!
//! Reading from the wire follows compression pointers; writing is always
//! uncompressed. Both operations live on [`WireCursor`] since compression
//! is only meaningful relative to one message buffer.

use super::wire::{ParseError, WireCursor};
use core::fmt;
use core::str::FromStr;

//------------ Name ----------------------------------------------------------

/// A domain name.
///
/// A name consists of up to 127 labels of 1 to 63 octets each, with the
/// whole name limited to 255 octets in wire format. Values of this type
/// always satisfy these limits; construction fails otherwise.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name(String);

impl Name {
    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name(String::new())
    }

    /// Returns whether this is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the presentation form without the trailing dot.
    ///
    /// The root name yields an empty string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an iterator over the labels of the name.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|label| !label.is_empty())
    }

    /// Returns the length of the uncompressed wire format of the name.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        1 + self.labels().map(|label| 1 + label.len()).sum::<usize>()
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if s == "." {
            return Ok(Name::root());
        }
        let s = s.strip_suffix('.').unwrap_or(s);
        let mut wire_len = 1;
        for label in s.split('.') {
            if label.is_empty() {
                return Err(NameError::EmptyLabel);
            }
            if label.len() > 63 {
                return Err(NameError::LongLabel);
            }
            wire_len += 1 + label.len();
        }
        if wire_len > 255 {
            return Err(NameError::LongName);
        }
        Ok(Name(s.into()))
    }
}

//--- Display

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            f.write_str(".")
        } else {
            write!(f, "{}.", self.0)
        }
    }
}

//------------ Reading and writing through the cursor ------------------------

impl WireCursor {
    /// Takes a possibly compressed domain name from the position.
    ///
    /// Compression pointers are followed as long as each one points
    /// strictly backwards in the buffer; anything else is treated as
    /// malformed. On success the position ends up directly after the name
    /// as it appeared at the position, on failure it stays where it was.
    pub fn parse_name(&mut self) -> Result<Name, ParseError> {
        let buf = self.as_slice();
        let mut j = self.pos();
        let mut limit = self.pos();
        let mut resume = None;
        let mut out = String::new();
        let mut wire_len = 1usize;
        let end = loop {
            let &octet = buf.get(j).ok_or(ParseError::ShortInput)?;
            if octet & 0xC0 == 0xC0 {
                let &next = buf.get(j + 1).ok_or(ParseError::ShortInput)?;
                let target =
                    usize::from(u16::from_be_bytes([octet & 0x3F, next]));
                if resume.is_none() {
                    resume = Some(j + 2);
                }
                if target >= limit {
                    return Err(ParseError::form_error(
                        "compression pointer not pointing backwards",
                    ));
                }
                limit = target;
                j = target;
            } else if octet & 0xC0 != 0 {
                return Err(ParseError::form_error("unsupported label type"));
            } else if octet == 0 {
                break resume.unwrap_or(j + 1);
            } else {
                let len = usize::from(octet);
                let label = buf
                    .get(j + 1..j + 1 + len)
                    .ok_or(ParseError::ShortInput)?;
                wire_len += 1 + len;
                if wire_len > 255 {
                    return Err(ParseError::form_error(
                        "domain name too long",
                    ));
                }
                if !out.is_empty() {
                    out.push('.');
                }
                for &byte in label {
                    if byte == b'.' || byte == b'\\' {
                        out.push('\\');
                        out.push(char::from(byte));
                    } else if byte.is_ascii_graphic() {
                        out.push(char::from(byte));
                    } else {
                        out.push_str(&format!("\\{:03}", byte));
                    }
                }
                j += 1 + len;
            }
        };
        self.seek(end);
        Ok(Name(out))
    }

    /// Appends the uncompressed wire format of a name.
    ///
    /// Returns the number of bytes written.
    pub fn append_name(&mut self, name: &Name) -> usize {
        let start = self.len();
        for label in name.labels() {
            self.append_u8(label.len() as u8);
            self.append_slice(label.as_bytes());
        }
        self.append_u8(0);
        self.len() - start
    }
}

//------------ NameError -----------------------------------------------------

/// A string did not form a valid domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// The name was the empty string.
    Empty,

    /// The name contained an empty label.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The wire format of the name would exceed 255 octets.
    LongName,
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::Empty => f.write_str("empty domain name"),
            NameError::EmptyLabel => f.write_str("empty label"),
            NameError::LongLabel => f.write_str("label too long"),
            NameError::LongName => f.write_str("domain name too long"),
        }
    }
}

impl std::error::Error for NameError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str() {
        let name: Name = "example.com".parse().unwrap();
        assert_eq!(name.as_str(), "example.com");
        assert_eq!(name.labels().collect::<Vec<_>>(), ["example", "com"]);
        assert_eq!(name.wire_len(), 13);

        assert_eq!("example.com.".parse::<Name>().unwrap(), name);
        assert!("example..com".parse::<Name>().is_err());
        assert!("".parse::<Name>().is_err());
        assert!(".".parse::<Name>().unwrap().is_root());
        assert!("a".repeat(64).parse::<Name>().is_err());
    }

    #[test]
    fn display() {
        let name: Name = "example.com".parse().unwrap();
        assert_eq!(format!("{}", name), "example.com.");
        assert_eq!(format!("{}", Name::root()), ".");
    }

    #[test]
    fn wire_round_trip() {
        let name: Name = "www.example.com".parse().unwrap();
        let mut cursor = WireCursor::new();
        assert_eq!(cursor.append_name(&name), name.wire_len());
        cursor.seek(0);
        assert_eq!(cursor.parse_name().unwrap(), name);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn compressed_name() {
        // "example.com" at offset 0, "www" + pointer to it at offset 13.
        let mut cursor = WireCursor::from_slice(
            b"\x07example\x03com\x00\x03www\xc0\x00",
        );
        assert_eq!(
            cursor.parse_name().unwrap().as_str(),
            "example.com"
        );
        assert_eq!(cursor.pos(), 13);
        assert_eq!(
            cursor.parse_name().unwrap().as_str(),
            "www.example.com"
        );
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn forward_pointer_rejected() {
        let mut cursor =
            WireCursor::from_slice(b"\x03www\xc0\x06\x03com\x00");
        assert!(cursor.parse_name().is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn truncated_name() {
        let mut cursor = WireCursor::from_slice(b"\x07exam");
        assert_eq!(
            cursor.parse_name().unwrap_err(),
            ParseError::ShortInput
        );
        assert_eq!(cursor.pos(), 0);
    }
}
