// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneytrend::{cli, commands, db, logging};

fn main() -> Result<()> {
    logging::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("config", sub)) => commands::settings::handle(&conn, sub)?,
        Some(("login", sub)) => commands::session::login(&conn, sub)?,
        Some(("logout", _)) => commands::session::logout(&conn)?,
        Some(("pin", sub)) => commands::pins::handle(&conn, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("notes", sub)) => commands::notes::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
