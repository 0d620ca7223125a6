// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::taxonomy;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let rows: Vec<Vec<String>> = taxonomy::CATEGORIES
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.name.to_string(),
                        c.icon.to_string(),
                        c.color.to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Icon", "Color"], rows));
        }
        _ => {}
    }
    Ok(())
}
