// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builds items.dat buffers for the unit tests.

use crate::item::{
    ItemRecord, ANIM_EXTRA_VERSION, ANIM_TYPE_VERSION, CUSTOM_PUNCH_VERSION, PET_ABILITY_VERSION,
    PET_INFO_VERSION, PROPERTIES2_PAYLOAD_LEN, PROPERTIES2_VERSION, RANGE_VERSION,
    TRAILING_FLAGS_LEN, TRAILING_FLAGS_VERSION,
};
use crate::strings::{apply_name_cipher, ItemString, ENCRYPTED_NAME_VERSION};
use crate::ByteBuffer;

/// An item with recognizable values in every field that exists in `version`.
pub(crate) fn sample_item(version: u16, id: i32, name: &str) -> ItemRecord {
    let mut item = ItemRecord {
        id,
        properties: id as u16 + 1,
        item_type: 1,
        material: -1,
        name: name.into(),
        file_name: "tiles_page1.rttex".into(),
        file_hash: 0x0BAD_F00D,
        visual_type: 2,
        cook_time: 10,
        tex_x: 3,
        tex_y: 4,
        storage_type: 5,
        layer: 6,
        collision_type: 1,
        hardness: 8,
        regen_time: 20,
        clothing_type: 0,
        rarity: 3,
        max_hold: 200,
        alt_file_path: "alt.rttex".into(),
        alt_file_hash: -5,
        anim_ms: 250,
        seed_base: 1,
        seed_over: 2,
        tree_base: 3,
        tree_over: 4,
        bg_col: -1,
        fg_col: 0x00FF00,
        bloom_time: 300,
        ..Default::default()
    };

    if version >= PET_INFO_VERSION {
        item.pet_name = format!("Pet {id}").as_str().into();
        item.pet_prefix = "Pre".into();
        item.pet_suffix = "Suf".into();
    }
    if version >= PET_ABILITY_VERSION {
        item.pet_ability = format!("Ability {id}").as_str().into();
    }
    if version >= ANIM_TYPE_VERSION {
        item.anim_type = 7;
        item.anim_string = "anim".into();
    }
    if version >= ANIM_EXTRA_VERSION {
        item.anim_tex = "anim.rttex".into();
        item.anim_string2 = "anim2".into();
        item.dlayer1 = 81;
        item.dlayer2 = 82;
    }
    if version >= PROPERTIES2_VERSION {
        item.properties2 = 0x0900 | id as u16;
    }
    if version >= RANGE_VERSION {
        item.tile_range = 100 + id;
        item.pile_range = 100 + 2 * id;
    }
    if version >= CUSTOM_PUNCH_VERSION {
        item.custom_punch = "punch".into();
    }

    item
}

fn write_string(buffer: &mut ByteBuffer, string: &ItemString) {
    buffer.extend_from_slice(&(string.len() as u16).to_le_bytes());
    buffer.extend_from_slice(string.as_bytes());
}

/// Encodes `item` the way a `version` file stores it.
pub(crate) fn write_item(item: &ItemRecord, version: u16) -> ByteBuffer {
    let mut buffer = ByteBuffer::new();

    buffer.extend_from_slice(&item.id.to_le_bytes());
    buffer.extend_from_slice(&item.properties.to_le_bytes());
    buffer.push(item.item_type);
    buffer.extend_from_slice(&item.material.to_le_bytes());

    let mut name = item.name.as_bytes().to_vec();
    if version >= ENCRYPTED_NAME_VERSION {
        apply_name_cipher(&mut name, item.id);
    }
    write_string(&mut buffer, &name.into());

    write_string(&mut buffer, &item.file_name);
    buffer.extend_from_slice(&item.file_hash.to_le_bytes());
    buffer.extend_from_slice(&item.visual_type.to_le_bytes());
    buffer.extend_from_slice(&item.cook_time.to_le_bytes());
    for byte in [
        item.tex_x,
        item.tex_y,
        item.storage_type,
        item.layer,
        item.collision_type,
        item.hardness,
    ] {
        buffer.extend_from_slice(&byte.to_le_bytes());
    }
    buffer.extend_from_slice(&item.regen_time.to_le_bytes());
    buffer.extend_from_slice(&item.clothing_type.to_le_bytes());
    buffer.extend_from_slice(&item.rarity.to_le_bytes());
    buffer.push(item.max_hold);
    write_string(&mut buffer, &item.alt_file_path);
    buffer.extend_from_slice(&item.alt_file_hash.to_le_bytes());
    buffer.extend_from_slice(&item.anim_ms.to_le_bytes());

    if version >= PET_INFO_VERSION {
        write_string(&mut buffer, &item.pet_name);
        write_string(&mut buffer, &item.pet_prefix);
        write_string(&mut buffer, &item.pet_suffix);
    }
    if version >= PET_ABILITY_VERSION {
        write_string(&mut buffer, &item.pet_ability);
    }

    for byte in [item.seed_base, item.seed_over, item.tree_base, item.tree_over] {
        buffer.extend_from_slice(&byte.to_le_bytes());
    }
    buffer.extend_from_slice(&item.bg_col.to_le_bytes());
    buffer.extend_from_slice(&item.fg_col.to_le_bytes());
    buffer.extend_from_slice(&item.seed1.to_le_bytes());
    buffer.extend_from_slice(&item.seed2.to_le_bytes());
    buffer.extend_from_slice(&item.bloom_time.to_le_bytes());

    if version >= ANIM_TYPE_VERSION {
        buffer.extend_from_slice(&item.anim_type.to_le_bytes());
        write_string(&mut buffer, &item.anim_string);
    }
    if version >= ANIM_EXTRA_VERSION {
        write_string(&mut buffer, &item.anim_tex);
        write_string(&mut buffer, &item.anim_string2);
        buffer.extend_from_slice(&item.dlayer1.to_le_bytes());
        buffer.extend_from_slice(&item.dlayer2.to_le_bytes());
    }
    if version >= PROPERTIES2_VERSION {
        buffer.extend_from_slice(&item.properties2.to_le_bytes());
        buffer.extend_from_slice(&[0; PROPERTIES2_PAYLOAD_LEN]);
    }
    if version >= RANGE_VERSION {
        buffer.extend_from_slice(&item.tile_range.to_le_bytes());
        buffer.extend_from_slice(&item.pile_range.to_le_bytes());
    }
    if version >= CUSTOM_PUNCH_VERSION {
        write_string(&mut buffer, &item.custom_punch);
    }
    if version >= TRAILING_FLAGS_VERSION {
        buffer.extend_from_slice(&[0; TRAILING_FLAGS_LEN]);
    }

    buffer
}

/// A complete file: header followed by `items`, with `item_count` in the header.
pub(crate) fn write_items_dat(version: u16, item_count: i32, items: &[ItemRecord]) -> ByteBuffer {
    let mut buffer = ByteBuffer::new();
    buffer.extend_from_slice(&version.to_le_bytes());
    buffer.extend_from_slice(&item_count.to_le_bytes());

    for item in items {
        buffer.extend_from_slice(&write_item(item, version));
    }

    buffer
}
