// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt, BinResult, Endian};

use crate::{ByteSpan, Error, Result};

/// Generates a bounds-checked little-endian reader for a primitive type.
macro_rules! primitive_reader {
    ($($(#[$doc:meta])* $name:ident => $ty:ty),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self) -> Result<$ty> {
                let offset = self.position();
                self.ensure(std::mem::size_of::<$ty>())?;
                self.inner
                    .read_le::<$ty>()
                    .map_err(|err| self.convert_error(err, offset))
            }
        )+
    };
}

/// Sequential reader over an immutable byte buffer.
///
/// All reads are little-endian and fail with [`Error::OutOfBounds`] instead of reading past the end.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    inner: Cursor<ByteSpan<'a>>,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `buffer`.
    pub fn new(buffer: ByteSpan<'a>) -> ByteCursor<'a> {
        ByteCursor {
            inner: Cursor::new(buffer),
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// Whether the underlying buffer has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes left after the current position.
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position() as usize)
    }

    primitive_reader! {
        read_u8 => u8,
        read_i8 => i8,
        read_u16 => u16,
        read_i16 => i16,
        read_u32 => u32,
        read_i32 => i32,
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<ByteSpan<'a>> {
        self.ensure(len)?;

        let start = self.position() as usize;
        let buffer: ByteSpan<'a> = *self.inner.get_ref();
        self.inner.set_position((start + len) as u64);

        Ok(&buffer[start..start + len])
    }

    /// Advances past `len` bytes without looking at them.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Reads a binrw type, passing along its import arguments.
    pub(crate) fn read_args<T: BinRead>(&mut self, args: T::Args<'_>) -> Result<T> {
        let offset = self.position();
        let result = T::read_options(&mut self.inner, Endian::Little, args);
        self.finish(result, offset)
    }

    /// Runs a `#[binrw::parser]` function over this cursor.
    pub(crate) fn read_with<T, Args>(
        &mut self,
        parser: impl FnOnce(&mut Cursor<ByteSpan<'a>>, Endian, Args) -> BinResult<T>,
        args: Args,
    ) -> Result<T> {
        let offset = self.position();
        let result = parser(&mut self.inner, Endian::Little, args);
        self.finish(result, offset)
    }

    /// Rewinds to `offset` if the read failed, so a failed read never moves the cursor.
    fn finish<T>(&mut self, result: BinResult<T>, offset: u64) -> Result<T> {
        result.map_err(|err| {
            self.inner.set_position(offset);
            self.convert_error(err, offset)
        })
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(Error::OutOfBounds {
                offset: self.position(),
                len: self.len(),
            });
        }

        Ok(())
    }

    fn convert_error(&self, err: binrw::Error, offset: u64) -> Error {
        if err.is_eof() {
            Error::OutOfBounds {
                offset,
                len: self.len(),
            }
        } else {
            Error::UnreadableInput {
                reason: err.to_string(),
            }
        }
    }
}
