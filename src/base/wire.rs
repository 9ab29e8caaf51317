//! Creating and consuming data in wire format.

use bytes::{BufMut, Bytes, BytesMut};
use core::fmt;

//------------ WireCursor ----------------------------------------------------

/// A cursor over the buffer of one DNS message.
///
/// The cursor owns the message bytes plus a single read/write position and
/// is shared by everything that parses from or composes into that message.
/// Record data never lives at a fixed place: where one record's data ends
/// is where the next record starts, so all operations on one message are
/// strictly sequential and go through the same cursor.
///
/// Every operation maintains the same discipline: on success the position
/// advances by exactly the number of bytes consumed or emitted, on failure
/// it does not move at all. All reads are bounded by the end of the buffer;
/// reads within record data are additionally bounded by the declared data
/// length, which is the caller's to enforce.
///
/// A cursor must only ever be handed to one operation at a time.
/// Independent messages use independent cursors and can be processed in
/// parallel without further ado.
#[derive(Clone, Debug, Default)]
pub struct WireCursor {
    buf: BytesMut,
    pos: usize,
}

impl WireCursor {
    /// Creates a new, empty cursor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty cursor with the given buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        WireCursor {
            buf: BytesMut::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Creates a cursor over a copy of the given message bytes.
    ///
    /// The position starts at the beginning of the buffer.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Self {
        WireCursor {
            buf: BytesMut::from(slice),
            pos: 0,
        }
    }

    /// Returns the current read/write position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns whether the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of bytes between the position and the buffer end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the complete buffer content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Converts the cursor into the underlying bytes.
    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    /// Moves the position to `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is beyond the end of the buffer.
    pub fn seek(&mut self, pos: usize) {
        assert!(pos <= self.buf.len(), "seek beyond end of buffer");
        self.pos = pos;
    }

    /// Shortens the buffer to `len` bytes.
    ///
    /// This undoes appends made past `len`. A position past the new end is
    /// pulled back onto it.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
        if self.pos > self.buf.len() {
            self.pos = self.buf.len();
        }
    }

    /// Checks that `len` more bytes are available at the position.
    pub fn check_len(&self, len: usize) -> Result<(), ParseError> {
        if self.remaining() < len {
            Err(ParseError::ShortInput)
        } else {
            Ok(())
        }
    }

    /// Returns the octet at the position without moving it.
    pub fn peek_u8(&self) -> Result<u8, ParseError> {
        self.check_len(1)?;
        Ok(self.buf[self.pos])
    }

    /// Takes a single octet from the position.
    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        self.check_len(1)?;
        let res = self.buf[self.pos];
        self.pos += 1;
        Ok(res)
    }

    /// Takes a big-endian `u16` from the position.
    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        self.check_len(2)?;
        let mut bytes = [0; 2];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 2]);
        self.pos += 2;
        Ok(u16::from_be_bytes(bytes))
    }

    /// Takes a big-endian `u32` from the position.
    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        self.check_len(4)?;
        let mut bytes = [0; 4];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 4]);
        self.pos += 4;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Takes the next `len` bytes from the position.
    pub fn parse_slice(&mut self, len: usize) -> Result<&[u8], ParseError> {
        self.check_len(len)?;
        let start = self.pos;
        self.pos += len;
        Ok(&self.buf[start..start + len])
    }

    /// Takes the next `len` bytes from the position into an owned vec.
    pub fn parse_octets(&mut self, len: usize) -> Result<Vec<u8>, ParseError> {
        self.parse_slice(len).map(|slice| slice.to_vec())
    }

    /// Appends a slice to the end of the buffer.
    ///
    /// The position moves to the new end of the buffer.
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.buf.extend_from_slice(slice);
        self.pos = self.buf.len();
    }

    /// Appends a single octet to the end of the buffer.
    pub fn append_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
        self.pos = self.buf.len();
    }

    /// Appends a big-endian `u16` to the end of the buffer.
    pub fn append_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
        self.pos = self.buf.len();
    }

    /// Appends a big-endian `u32` to the end of the buffer.
    pub fn append_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
        self.pos = self.buf.len();
    }

    /// Overwrites the two bytes at `pos` with a big-endian `u16`.
    ///
    /// This is how length fields that precede data of initially unknown
    /// size get their final value: append a placeholder, compose the data,
    /// then patch the measured length in.
    ///
    /// # Panics
    ///
    /// Panics if the two bytes at `pos` are not within the buffer.
    pub fn patch_u16(&mut self, pos: usize, value: u16) {
        assert!(
            pos + 2 <= self.buf.len(),
            "patch beyond end of buffer"
        );
        self.buf[pos..pos + 2].copy_from_slice(&value.to_be_bytes());
    }
}

//--- From

impl From<&[u8]> for WireCursor {
    fn from(slice: &[u8]) -> Self {
        Self::from_slice(slice)
    }
}

//------------ Parse and Compose ---------------------------------------------

/// A type that can extract a value of itself from a cursor.
pub trait Parse: Sized {
    /// Extracts a value from the position of `cursor`.
    fn parse(cursor: &mut WireCursor) -> Result<Self, ParseError>;
}

/// A type that can append its wire representation to a cursor.
pub trait Compose {
    /// Appends the value to the end of the buffer wrapped by `cursor`.
    fn compose(&self, cursor: &mut WireCursor);
}

impl Parse for u8 {
    fn parse(cursor: &mut WireCursor) -> Result<Self, ParseError> {
        cursor.parse_u8()
    }
}

impl Parse for u16 {
    fn parse(cursor: &mut WireCursor) -> Result<Self, ParseError> {
        cursor.parse_u16()
    }
}

impl Parse for u32 {
    fn parse(cursor: &mut WireCursor) -> Result<Self, ParseError> {
        cursor.parse_u32()
    }
}

impl Compose for u8 {
    fn compose(&self, cursor: &mut WireCursor) {
        cursor.append_u8(*self)
    }
}

impl Compose for u16 {
    fn compose(&self, cursor: &mut WireCursor) {
        cursor.append_u16(*self)
    }
}

impl Compose for u32 {
    fn compose(&self, cursor: &mut WireCursor) {
        cursor.append_u32(*self)
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the available data.
    ShortInput,

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occurred.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing record data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The in-memory value has no wire representation.
    ///
    /// This happens for record data whose mandatory parts are empty.
    EmptyRecordData,

    /// The data is longer than its length field can express.
    LongData,
}

//--- Display and Error

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::EmptyRecordData => {
                f.write_str("empty record data")
            }
            ComposeError::LongData => f.write_str("record data too long"),
        }
    }
}

impl std::error::Error for ComposeError {}

//============ Tests =========================================================
