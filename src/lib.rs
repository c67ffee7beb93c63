// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of items.dat, the versioned item-definition table shipped with the game client.
//!
//! ```no_run
//! let buffer = std::fs::read("items.dat").unwrap();
//! let database = itemsdat::ItemDatabase::from_existing(&buffer).unwrap();
//!
//! for item in &database {
//!     println!("{} {}", item.id, item.name_lossy());
//! }
//! ```

/// Represents a continuous block of memory which is not owned, and comes either from an in-memory location or from a file.
pub type ByteSpan<'a> = &'a [u8];

/// Represents a continuous block of memory which is owned.
pub type ByteBuffer = Vec<u8>;

/// Bounds-checked sequential reading of little-endian primitives.
pub mod cursor;

/// Length-prefixed strings and the item name cipher.
pub mod strings;

/// Item records and their version-dependent layout.
pub mod item;

/// Reading whole items.dat files.
pub mod itemsdat;

mod error;

pub use error::{Error, Result};
pub use item::ItemRecord;
pub use itemsdat::{ItemDatabase, MAX_VERSION};
pub use strings::ItemString;

#[cfg(test)]
mod test_utils;
