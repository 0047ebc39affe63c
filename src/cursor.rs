use crate::codec::DecodeError;

/// Positional reader over the hex-digit representation of a PDU.
///
/// A cursor is an immutable `(digits, offset)` pair. Every read returns the
/// requested slice together with an advanced cursor, so a failed or
/// speculative read never invalidates the cursor it started from: the caller
/// keeps its old value and can retry or inspect at will.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCursor<'a> {
    digits: &'a str,
    offset: usize,
}

impl<'a> HexCursor<'a> {
    /// Position a cursor at the start of `digits`. The input must be ASCII;
    /// [`crate::parser::parse`] rejects anything else up front.
    pub fn new(digits: &'a str) -> Self {
        HexCursor { digits, offset: 0 }
    }

    /// Number of hex digits left to read.
    pub fn remaining(&self) -> usize {
        self.digits.len() - self.offset
    }

    /// Take the next `n` hex digits.
    pub fn read(self, n: usize) -> Result<(&'a str, Self), DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        // `get` instead of indexing: a multi-byte character in the input
        // must surface as an error, not a slicing panic.
        let Some(slice) = self.digits.get(self.offset..self.offset + n) else {
            return Err(DecodeError::InvalidHex { field: "pdu" });
        };
        Ok((
            slice,
            HexCursor {
                digits: self.digits,
                offset: self.offset + n,
            },
        ))
    }

    /// Take the next two digits as one octet value.
    pub fn read_octet(self, field: &'static str) -> Result<(u8, Self), DecodeError> {
        let (slice, next) = self.read(2)?;
        let value =
            u8::from_str_radix(slice, 16).map_err(|_| DecodeError::InvalidHex { field })?;
        Ok((value, next))
    }

    /// Take everything that is left.
    pub fn rest(self) -> (&'a str, Self) {
        let slice = &self.digits[self.offset..];
        (
            slice,
            HexCursor {
                digits: self.digits,
                offset: self.digits.len(),
            },
        )
    }
}
