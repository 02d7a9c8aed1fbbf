// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Emit JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Emit one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("poisha")
        .about("BDT personal finance tracking with AI-assisted categorization and insights")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(
            Command::new("login")
                .about("Start a local session (mocked, no backend)")
                .arg(
                    Arg::new("role")
                        .long("role")
                        .default_value("user")
                        .help("admin|user"),
                ),
        )
        .subcommand(Command::new("logout").about("End the local session"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("income|expense"),
                        )
                        .arg(Arg::new("amount").long("amount").help("Positive amount in BDT"))
                        .arg(Arg::new("category").long("category").help("Category name"))
                        .arg(
                            Arg::new("wallet")
                                .long("wallet")
                                .default_value("cash")
                                .help("cash|bank|bkash|nagad"),
                        )
                        .arg(Arg::new("note").long("note").help("Free-text details"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(
                            Arg::new("ai")
                                .long("ai")
                                .action(ArgAction::SetTrue)
                                .help("Fill amount/category/type from the note via AI"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive note/category filter"),
                        ),
                ))
                .subcommand(
                    Command::new("export")
                        .about("Export transactions")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Totals, 10-day trend and category breakdown"),
        ))
        .subcommand(
            Command::new("categorize")
                .about("Extract transaction details from free text via AI")
                .arg(Arg::new("text").required(true)),
        )
        .subcommand(Command::new("insights").about("AI spending report and anomaly scan (Pro)"))
        .subcommand(Command::new("profile").about("Show the current user and subscription"))
        .subcommand(
            Command::new("upgrade")
                .about("Upgrade to Premium via a simulated payment channel")
                .arg(
                    Arg::new("via")
                        .long("via")
                        .required(true)
                        .help("bkash|nagad"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Preferences")
                .subcommand(
                    Command::new("language")
                        .about("Set display language")
                        .arg(Arg::new("value").required(true).help("EN|BN")),
                )
                .subcommand(
                    Command::new("theme")
                        .about("Set UI theme")
                        .arg(Arg::new("value").required(true).help("light|dark")),
                ),
        )
        .subcommand(Command::new("admin").about("Admin console summary (role-gated)"))
        .subcommand(Command::new("doctor").about("Check the snapshot for inconsistencies"))
}
