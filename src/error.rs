// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Everything that can go wrong while decoding an items.dat buffer.
///
/// Every failure aborts the whole decode, there is no partially decoded database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be read, was empty, or its header is nonsensical.
    #[error("unreadable input: {reason}")]
    UnreadableInput {
        /// A human readable description of the problem.
        reason: String,
    },
    /// The header declares a version this decoder does not know the layout of.
    #[error("unsupported items.dat version {version} (supported: 1..={max})")]
    UnsupportedVersion {
        /// The version found in the header.
        version: u16,
        /// The newest version this decoder understands.
        max: u16,
    },
    /// A record's id field doesn't match its position in the file.
    #[error("record id mismatch: expected {expected}, found {found}")]
    RecordIdMismatch {
        /// The zero-based position of the record.
        expected: i32,
        /// The id stored in the record.
        found: i32,
    },
    /// A read would have consumed bytes past the end of the buffer.
    #[error("read at offset {offset} runs past the end of the {len} byte buffer")]
    OutOfBounds {
        /// Where the failing read started.
        offset: u64,
        /// Length of the whole buffer.
        len: usize,
    },
}

/// Result type alias for items.dat decoding.
pub type Result<T> = std::result::Result<T, Error>;
