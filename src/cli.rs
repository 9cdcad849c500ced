// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn source_args() -> [Arg; 2] {
    [
        Arg::new("year")
            .long("year")
            .short('y')
            .help("Calendar year (defaults to the current year)"),
        Arg::new("input")
            .long("input")
            .short('i')
            .help("Read a saved listing response (JSON with `records` or `items`) instead of calling the API"),
    ]
}

fn selection_args() -> [Arg; 3] {
    [
        Arg::new("month")
            .long("month")
            .short('m')
            .help("Month 1-12 (defaults to the current month)"),
        Arg::new("pin")
            .long("pin")
            .action(ArgAction::Append)
            .help("Category to chart on its own; repeatable. Defaults to the saved pins"),
        Arg::new("note")
            .long("note")
            .action(ArgAction::Append)
            .help("Only count transactions with this note; repeatable"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("moneytrend")
        .about("Monthly income/expense trends, category movement, and report export")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the local settings database"))
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show").about("Print current settings"))
                .subcommand(
                    Command::new("set-api")
                        .about("Set the transaction listing endpoint")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-page-size")
                        .about("Rows requested per page")
                        .arg(
                            Arg::new("size")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        ),
                )
                .subcommand(
                    Command::new("set-currency")
                        .about("Currency symbol used in reports")
                        .arg(Arg::new("symbol").required(true)),
                )
                .subcommand(
                    Command::new("set-utc-offset")
                        .about("Time zone for month boundaries: +HH:MM or 'local'")
                        .arg(Arg::new("offset").required(true).allow_hyphen_values(true)),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Remember the signed-in user so fetched records are scoped to them")
                .arg(Arg::new("user-id").long("user-id").required(true))
                .arg(Arg::new("token").long("token")),
        )
        .subcommand(Command::new("logout").about("Forget the signed-in user"))
        .subcommand(
            Command::new("pin")
                .about("Manage pinned categories")
                .subcommand(
                    Command::new("add")
                        .about("Pin a category")
                        .arg(Arg::new("category").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Unpin a category")
                        .arg(Arg::new("category").required(true)),
                )
                .subcommand(Command::new("list").about("List pinned categories")),
        )
        .subcommand(
            Command::new("categories")
                .about("List the built-in category tables")
                .arg(
                    Arg::new("income")
                        .long("income")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("expense")
                        .long("expense")
                        .action(ArgAction::SetTrue),
                )
                .group(ArgGroup::new("kind").args(["income", "expense"]))
                .args(json_flags()),
        )
        .subcommand(
            Command::new("report")
                .about("Month totals, biggest category movement, and yearly series")
                .args(source_args())
                .args(selection_args())
                .args(json_flags()),
        )
        .subcommand(
            Command::new("notes")
                .about("Distinct notes used in a year")
                .args(source_args())
                .arg(Arg::new("query").long("query").short('q'))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .args(json_flags()),
        )
        .subcommand(
            Command::new("export")
                .about("Write a shareable report document")
                .subcommand(
                    Command::new("report")
                        .args(source_args())
                        .args(selection_args())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .short('f')
                                .default_value("html")
                                .help("html | csv | json"),
                        )
                        .arg(Arg::new("out").long("out").short('o').required(true)),
                ),
        )
}
