// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use binrw::binread;
use tracing::{debug, warn};

use crate::cursor::ByteCursor;
use crate::item::{ItemRecord, MIN_RECORD_LEN};
use crate::{ByteSpan, Error, Result};

/// Newest items.dat version this crate knows the layout of.
pub const MAX_VERSION: u16 = 12;

/// Size of [`ItemsDatHeader`] on disk.
pub const HEADER_LEN: usize = 6;

#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[br(little)]
pub struct ItemsDatHeader {
    pub version: u16,
    pub item_count: i32,
}

/// A fully decoded items.dat file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemDatabase {
    version: u16,
    item_count: i32,
    items: Vec<ItemRecord>,
}

impl ItemDatabase {
    /// Decodes an existing items.dat file.
    ///
    /// Decoding is all or nothing: any structural problem fails the whole file.
    pub fn from_existing(buffer: ByteSpan) -> Result<ItemDatabase> {
        let result = Self::decode(buffer);
        if let Err(err) = &result {
            warn!(%err, "Rejected items.dat");
        }

        result
    }

    fn decode(buffer: ByteSpan) -> Result<ItemDatabase> {
        if buffer.is_empty() {
            return Err(Error::UnreadableInput {
                reason: "buffer is empty".to_string(),
            });
        }

        let mut cursor = ByteCursor::new(buffer);
        let header = cursor.read_args::<ItemsDatHeader>(())?;

        if header.version == 0 || header.version > MAX_VERSION {
            return Err(Error::UnsupportedVersion {
                version: header.version,
                max: MAX_VERSION,
            });
        }

        if header.item_count < 0 {
            return Err(Error::UnreadableInput {
                reason: format!("negative item count {}", header.item_count),
            });
        }

        debug!(
            version = header.version,
            item_count = header.item_count,
            "Decoding items.dat"
        );

        // a corrupt count shouldn't be able to reserve more than the buffer could ever hold
        let capacity = (header.item_count as usize).min(cursor.remaining() / MIN_RECORD_LEN);
        let mut items = Vec::with_capacity(capacity);

        for id in 0..header.item_count {
            items.push(ItemRecord::decode(&mut cursor, header.version, id)?);
        }

        if cursor.remaining() > 0 {
            debug!(
                trailing = cursor.remaining(),
                "Ignoring bytes after the last item"
            );
        }

        Ok(ItemDatabase {
            version: header.version,
            item_count: header.item_count,
            items,
        })
    }

    /// The format version from the header.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// The number of items the header declares, always equal to [`Self::len`].
    pub fn item_count(&self) -> i32 {
        self.item_count
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRecord> {
        self.items.iter()
    }

    /// Looks up an item by id, which is also its index.
    pub fn get(&self, id: i32) -> Option<&ItemRecord> {
        usize::try_from(id).ok().and_then(|index| self.items.get(index))
    }

    /// Finds the first item with exactly this (decrypted) name.
    pub fn find_by_name(&self, name: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Takes ownership of the decoded items.
    pub fn into_items(self) -> Vec<ItemRecord> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ItemDatabase {
    type Item = &'a ItemRecord;
    type IntoIter = std::slice::Iter<'a, ItemRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
