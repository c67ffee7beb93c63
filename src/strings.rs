// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use std::fmt;

use binrw::{BinRead, BinResult};

use crate::cursor::ByteCursor;
use crate::{ByteBuffer, Result};

/// Key for the rotating XOR cipher item names are stored with.
pub const NAME_SECRET: &[u8; 16] = b"PBG892FXX982ABC*";

/// First version that stores item names encrypted.
pub const ENCRYPTED_NAME_VERSION: u16 = 3;

/// A length-prefixed string from an items.dat file.
///
/// The game treats these as text, but nothing guarantees they are valid UTF-8 so the raw bytes are kept.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemString(ByteBuffer);

impl ItemString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> ByteBuffer {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The string as text, with invalid sequences replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<ByteBuffer> for ItemString {
    fn from(bytes: ByteBuffer) -> Self {
        ItemString(bytes)
    }
}

impl From<&str> for ItemString {
    fn from(s: &str) -> Self {
        ItemString(s.as_bytes().to_vec())
    }
}

impl PartialEq<str> for ItemString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for ItemString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Debug for ItemString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for ItemString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ItemString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

/// XORs `bytes` in place with the name keystream for `item_id`.
///
/// The keystream starts at `item_id mod 16` in [`NAME_SECRET`] and advances one key byte per input byte.
/// Applying it twice gives back the original bytes, so this both encrypts and decrypts.
pub fn apply_name_cipher(bytes: &mut [u8], item_id: i32) {
    let start = item_id.rem_euclid(NAME_SECRET.len() as i32) as usize;
    let keystream = NAME_SECRET.iter().cycle().skip(start);

    for (byte, key) in bytes.iter_mut().zip(keystream) {
        *byte ^= key;
    }
}

/// Reads a `u16` length followed by that many raw bytes.
#[binrw::parser(reader, endian)]
pub(crate) fn read_string() -> BinResult<ItemString> {
    let len = u16::read_options(reader, endian, ())?;

    let mut bytes = vec![0; len as usize];
    reader.read_exact(&mut bytes)?;

    Ok(ItemString(bytes))
}

/// Same framing as [`read_string`], but the payload is decrypted with the keystream of `item_id`.
#[binrw::parser(reader, endian)]
pub(crate) fn read_encrypted_string(item_id: i32) -> BinResult<ItemString> {
    let mut string = read_string(reader, endian, ())?;
    apply_name_cipher(&mut string.0, item_id);

    Ok(string)
}

/// Item names are plaintext before version 3 and encrypted from then on.
#[binrw::parser(reader, endian)]
pub(crate) fn read_item_name(version: u16, item_id: i32) -> BinResult<ItemString> {
    if version >= ENCRYPTED_NAME_VERSION {
        read_encrypted_string(reader, endian, (item_id,))
    } else {
        read_string(reader, endian, ())
    }
}

impl ByteCursor<'_> {
    /// Reads a length-prefixed string, advancing by `2 + length`.
    pub fn read_string(&mut self) -> Result<ItemString> {
        self.read_with(read_string, ())
    }

    /// Reads a length-prefixed string encrypted with the name keystream of `item_id`.
    pub fn read_encrypted_string(&mut self, item_id: i32) -> Result<ItemString> {
        self.read_with(read_encrypted_string, (item_id,))
    }
}
