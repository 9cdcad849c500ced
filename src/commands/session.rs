// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{self, Session};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = sub.get_one::<String>("user-id").unwrap().trim().to_string();
    if user_id.is_empty() {
        return Err(anyhow!("User id must not be empty"));
    }
    let token = sub
        .get_one::<String>("token")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    session::store(
        conn,
        &Session {
            user_id: Some(user_id.clone()),
            token,
        },
    )?;
    println!("Signed in as user {}", user_id);
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    session::clear(conn)?;
    println!("Signed out; reports will include every fetched record");
    Ok(())
}
