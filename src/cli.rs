// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Restrict to a single date (YYYY-MM-DD); omit for all time")
}

pub fn build_cli() -> Command {
    Command::new("travelclip")
        .about("Travel expense tracking, category and daily reports, and AI spending analysis")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the expense store and print its location"))
        .subcommand(
            Command::new("expense")
                .about("Record and browse expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                // let "-5" reach amount validation
                                .allow_hyphen_values(true)
                                .help("Amount in the expense currency"),
                        )
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("Short description"),
                        )
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .default_value("TWD")
                                .help("Currency code (TWD, JPY, USD, KRW)"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("other")
                                .help("Category id (see `category list`)"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Expense date (YYYY-MM-DD), defaults to today"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(date_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N entries"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated spending views")
                .subcommand(
                    Command::new("by-category")
                        .about("Totals per category")
                        .arg(date_arg())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("daily")
                        .about("Daily spending trend over the full history")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Entry count and total spend")
                        .arg(date_arg())
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("AI spending analysis via Gemini")
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .default_value("TWD")
                        .help("Base currency label for the analysis"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export expense history")
                .subcommand(
                    Command::new("expenses")
                        .about("Export all expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true).help("Output path")),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Expense categories")
                .subcommand(Command::new("list").about("List the fixed category table")),
        )
        .subcommand(Command::new("doctor").about("Check store integrity and configuration"))
}
