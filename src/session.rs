// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persisted sign-in blob, used to scope fetched records to their owner.

use anyhow::Result;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{delete_setting, get_setting, set_setting};

pub const AUTH_KEY: &str = "auth";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AuthBlob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default)]
    user: Option<AuthUser>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AuthUser {
    #[serde(default)]
    id: Value,
}

/// Normalise a JSON id (number or string) into a comparable string.
pub fn id_from_value(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Ids match numerically when both parse as numbers, else by exact text.
pub fn same_owner(a: &str, b: &str) -> bool {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}

impl Session {
    /// Decode a stored blob. Anything unreadable is an anonymous session.
    pub fn from_blob(raw: &str) -> Self {
        match serde_json::from_str::<AuthBlob>(raw) {
            Ok(blob) => Session {
                user_id: blob.user.as_ref().and_then(|u| id_from_value(&u.id)),
                token: blob.token.filter(|t| !t.is_empty()),
            },
            Err(e) => {
                tracing::debug!("ignoring unreadable auth blob: {e}");
                Session::default()
            }
        }
    }

    pub fn to_blob(&self) -> Result<String> {
        let blob = AuthBlob {
            token: self.token.clone(),
            user: self.user_id.as_ref().map(|id| AuthUser {
                id: match id.parse::<i64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::from(id.as_str()),
                },
            }),
        };
        Ok(serde_json::to_string(&blob)?)
    }

    /// Whether a record owned by `owner` belongs to this session.
    ///
    /// Without a user id every record is accepted.
    pub fn owns(&self, owner: Option<&str>) -> bool {
        match (&self.user_id, owner) {
            (None, _) => true,
            (Some(me), Some(owner)) => same_owner(me, owner),
            (Some(_), None) => false,
        }
    }
}

pub fn load(conn: &Connection) -> Result<Session> {
    let session = match get_setting(conn, AUTH_KEY)? {
        Some(raw) => Session::from_blob(&raw),
        None => Session::default(),
    };
    if session.user_id.is_none() {
        tracing::debug!("no signed-in user; records will not be owner-filtered");
    }
    Ok(session)
}

pub fn store(conn: &Connection, session: &Session) -> Result<()> {
    set_setting(conn, AUTH_KEY, &session.to_blob()?)
}

pub fn clear(conn: &Connection) -> Result<()> {
    delete_setting(conn, AUTH_KEY)
}
