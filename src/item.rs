// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(unused_variables)] // just binrw things with br(temp)

use std::borrow::Cow;

use binrw::binread;

use crate::cursor::ByteCursor;
use crate::strings::{read_item_name, read_string, ItemString};
use crate::{Error, Result};

/// First version with pet name, prefix and suffix.
pub const PET_INFO_VERSION: u16 = 4;
/// First version with the pet ability.
pub const PET_ABILITY_VERSION: u16 = 5;
/// First version with the animation type and string.
pub const ANIM_TYPE_VERSION: u16 = 7;
/// First version with the extended animation data and draw layers.
pub const ANIM_EXTRA_VERSION: u16 = 8;
/// First version with the second properties field.
pub const PROPERTIES2_VERSION: u16 = 9;
/// First version with the tile and pile ranges.
pub const RANGE_VERSION: u16 = 10;
/// First version with the custom punch string.
pub const CUSTOM_PUNCH_VERSION: u16 = 11;
/// First version with the trailing flags.
pub const TRAILING_FLAGS_VERSION: u16 = 12;

/// Opaque client data following `properties2`.
pub const PROPERTIES2_PAYLOAD_LEN: usize = 62;
/// Opaque flags at the end of every version 12 record.
pub const TRAILING_FLAGS_LEN: usize = 13;

/// Smallest possible record: a version 1 item with every string empty.
pub const MIN_RECORD_LEN: usize = 65;

/// One item definition.
///
/// Fields that don't exist in the file's version are left at their default value.
#[binread]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[br(little, import(version: u16, id: i32))]
pub struct ItemRecord {
    /// Also the item's index in the database.
    #[br(calc = id)]
    pub id: i32,
    pub properties: u16,
    pub item_type: u8,
    pub material: i8,
    #[br(parse_with = read_item_name, args(version, id))]
    pub name: ItemString,
    #[br(parse_with = read_string)]
    pub file_name: ItemString,
    pub file_hash: i32,
    pub visual_type: i8,
    pub cook_time: i32,
    pub tex_x: i8,
    pub tex_y: i8,
    pub storage_type: i8,
    pub layer: i8,
    pub collision_type: i8,
    pub hardness: i8,
    pub regen_time: i32,
    pub clothing_type: i8,
    pub rarity: i16,
    pub max_hold: u8,
    #[br(parse_with = read_string)]
    pub alt_file_path: ItemString,
    pub alt_file_hash: i32,
    pub anim_ms: i32,

    #[br(if(version >= PET_INFO_VERSION), parse_with = read_string)]
    pub pet_name: ItemString,
    #[br(if(version >= PET_INFO_VERSION), parse_with = read_string)]
    pub pet_prefix: ItemString,
    #[br(if(version >= PET_INFO_VERSION), parse_with = read_string)]
    pub pet_suffix: ItemString,
    #[br(if(version >= PET_ABILITY_VERSION), parse_with = read_string)]
    pub pet_ability: ItemString,

    pub seed_base: i8,
    pub seed_over: i8,
    pub tree_base: i8,
    pub tree_over: i8,
    pub bg_col: i32,
    pub fg_col: i32,
    /// Always zero.
    pub seed1: i16,
    /// Always zero.
    pub seed2: i16,
    pub bloom_time: i32,

    #[br(if(version >= ANIM_TYPE_VERSION))]
    pub anim_type: i32,
    #[br(if(version >= ANIM_TYPE_VERSION), parse_with = read_string)]
    pub anim_string: ItemString,

    #[br(if(version >= ANIM_EXTRA_VERSION), parse_with = read_string)]
    pub anim_tex: ItemString,
    #[br(if(version >= ANIM_EXTRA_VERSION), parse_with = read_string)]
    pub anim_string2: ItemString,
    #[br(if(version >= ANIM_EXTRA_VERSION))]
    pub dlayer1: i32,
    #[br(if(version >= ANIM_EXTRA_VERSION))]
    pub dlayer2: i32,

    #[br(if(version >= PROPERTIES2_VERSION))]
    pub properties2: u16,
    // TODO: figure out what the client keeps in here
    #[br(temp, if(version >= PROPERTIES2_VERSION), count = PROPERTIES2_PAYLOAD_LEN)]
    properties2_payload: Vec<u8>,

    #[br(if(version >= RANGE_VERSION))]
    pub tile_range: i32,
    #[br(if(version >= RANGE_VERSION))]
    pub pile_range: i32,

    #[br(if(version >= CUSTOM_PUNCH_VERSION), parse_with = read_string)]
    pub custom_punch: ItemString,

    #[br(temp, if(version >= TRAILING_FLAGS_VERSION), count = TRAILING_FLAGS_LEN)]
    trailing_flags: Vec<u8>,
}

impl ItemRecord {
    /// Decodes the record at the cursor, laid out for `version`.
    ///
    /// The id is read and checked against `expected_id` before anything else, since a mismatch means the
    /// rest of the record can't be trusted.
    pub fn decode(cursor: &mut ByteCursor, version: u16, expected_id: i32) -> Result<ItemRecord> {
        let id = cursor.read_i32()?;
        if id != expected_id {
            return Err(Error::RecordIdMismatch {
                expected: expected_id,
                found: id,
            });
        }

        cursor.read_args::<ItemRecord>((version, id))
    }

    /// The decrypted name as text.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}
