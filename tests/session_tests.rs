// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneytrend::{cli, commands, db, session};
use moneytrend::session::Session;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn blob_decodes_numeric_and_string_ids() {
    let s = Session::from_blob(r#"{"token":"abc","user":{"id":42,"name":"Mei"}}"#);
    assert_eq!(s.user_id.as_deref(), Some("42"));
    assert_eq!(s.token.as_deref(), Some("abc"));

    let s = Session::from_blob(r#"{"user":{"id":" u-9 "}}"#);
    assert_eq!(s.user_id.as_deref(), Some("u-9"));
    assert_eq!(s.token, None);
}

#[test]
fn partial_or_broken_blob_means_no_owner_filter() {
    for raw in [r#"{}"#, r#"{"user":null}"#, r#"{"user":{}}"#, "garbage", ""] {
        let s = Session::from_blob(raw);
        assert_eq!(s.user_id, None, "blob {raw:?}");
        assert!(s.owns(Some("1")));
        assert!(s.owns(None));
    }
}

#[test]
fn owner_comparison_is_numeric_when_possible() {
    let s = Session {
        user_id: Some("7".into()),
        token: None,
    };
    assert!(s.owns(Some("7")));
    assert!(s.owns(Some("7.0")));
    assert!(!s.owns(Some("8")));
    assert!(!s.owns(None));
    assert!(session::same_owner("abc", "abc"));
    assert!(!session::same_owner("abc", "ABC"));
}

#[test]
fn login_and_logout_round_trip_through_settings() {
    let conn = setup();
    assert_eq!(session::load(&conn).unwrap(), Session::default());

    let matches = cli::build_cli().get_matches_from([
        "moneytrend",
        "login",
        "--user-id",
        "15",
        "--token",
        "t0k",
    ]);
    if let Some(("login", sub)) = matches.subcommand() {
        commands::session::login(&conn, sub).unwrap();
    } else {
        panic!("no login subcommand");
    }
    let raw = db::get_setting(&conn, session::AUTH_KEY).unwrap().unwrap();
    let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(blob["user"]["id"], serde_json::json!(15));
    assert_eq!(blob["token"], "t0k");

    let loaded = session::load(&conn).unwrap();
    assert_eq!(loaded.user_id.as_deref(), Some("15"));
    assert_eq!(loaded.token.as_deref(), Some("t0k"));

    commands::session::logout(&conn).unwrap();
    assert_eq!(session::load(&conn).unwrap(), Session::default());
}
