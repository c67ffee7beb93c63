// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::env;
use std::fs::read;
use std::process::ExitCode;

use itemsdat::{Error, ItemDatabase};

#[cfg(feature = "serde")]
fn print_database(database: &ItemDatabase) {
    match serde_json::to_string_pretty(database) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Failed to serialize items: {err}"),
    }
}

#[cfg(not(feature = "serde"))]
fn print_database(database: &ItemDatabase) {
    println!("version: {}", database.version());
    println!("items: {}", database.item_count());

    for item in database {
        println!("{:>6} {}", item.id, item.name_lossy());
    }
}

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: itemsdat-inspect <path to items.dat>");
        return ExitCode::FAILURE;
    };

    let database = read(&path)
        .map_err(|err| Error::UnreadableInput {
            reason: format!("{path}: {err}"),
        })
        .and_then(|buffer| ItemDatabase::from_existing(&buffer));

    match database {
        Ok(database) => {
            print_database(&database);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error occurred while parsing: {err}");
            ExitCode::FAILURE
        }
    }
}
