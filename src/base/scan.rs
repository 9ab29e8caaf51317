//! Reading data from the presentation format.
//!
//! In the presentation format, a record is one line of text broken into
//! whitespace-separated tokens. Splitting the line, along with resolving
//! quoting and escape sequences, is the job of whatever reads the zone
//! file; the record data implementations only ever see the finished token
//! list, wrapped into a [`TokenScanner`] that hands out tokens from left to
//! right.

use super::charstr::CharStr;
use core::fmt;

//------------ TokenScanner --------------------------------------------------

/// A scanner over the tokens of one presentation format entry.
#[derive(Clone, Debug)]
pub struct TokenScanner<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    /// Creates a scanner over the given tokens.
    #[must_use]
    pub fn new(tokens: &'a [&'a str]) -> Self {
        TokenScanner { tokens, pos: 0 }
    }

    /// Returns whether all tokens have been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Takes the next token.
    pub fn scan_str(&mut self) -> Result<&'a str, ScanError> {
        self.opt_str()
            .ok_or_else(|| ScanError::custom("unexpected end of entry"))
    }

    /// Takes the next token if there is one.
    pub fn opt_str(&mut self) -> Option<&'a str> {
        let res = self.tokens.get(self.pos).copied();
        if res.is_some() {
            self.pos += 1;
        }
        res
    }

    /// Takes the next token as a character string.
    pub fn scan_charstr(&mut self) -> Result<CharStr, ScanError> {
        self.scan_str().and_then(|token| {
            CharStr::from_octets(token.as_bytes())
                .map_err(|_| ScanError::custom("character string too long"))
        })
    }

    /// Takes the next token as a character string if there is one.
    pub fn opt_charstr(&mut self) -> Result<Option<CharStr>, ScanError> {
        match self.opt_str() {
            Some(token) => CharStr::from_octets(token.as_bytes())
                .map(Some)
                .map_err(|_| ScanError::custom("character string too long")),
            None => Ok(None),
        }
    }

    /// Takes the next token as a decimal `u16`.
    pub fn scan_u16(&mut self) -> Result<u16, ScanError> {
        self.scan_str().and_then(|token| {
            token
                .parse()
                .map_err(|_| ScanError::custom("expected a 16 bit integer"))
        })
    }
}

//------------ ScanError -----------------------------------------------------

/// A token violated the grammar of the record data being scanned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanError(&'static str);

impl ScanError {
    /// Creates a new error with the given diagnostics string.
    #[must_use]
    pub fn custom(msg: &'static str) -> Self {
        ScanError(msg)
    }
}

//--- Display and Error

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for ScanError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scan_tokens() {
        let mut scanner = TokenScanner::new(&["one", "two"]);
        assert_eq!(scanner.scan_str().unwrap(), "one");
        assert!(!scanner.is_exhausted());
        assert_eq!(scanner.opt_str(), Some("two"));
        assert!(scanner.is_exhausted());
        assert_eq!(scanner.opt_str(), None);
        assert!(scanner.scan_str().is_err());
    }

    #[test]
    fn scan_charstr() {
        let mut scanner = TokenScanner::new(&["150862028003"]);
        assert_eq!(
            scanner.scan_charstr().unwrap().as_slice(),
            b"150862028003"
        );
        assert_eq!(scanner.opt_charstr().unwrap(), None);
    }
}
