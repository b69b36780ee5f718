// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ContactShare CLI
//!
//! Desktop harness for tap-to-share sessions: produce the bytes a phone
//! would push, feed captured bytes to a receiving session, or simulate a
//! whole tap between two sessions in one process.

mod commands;
mod config;
mod display;

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "contactshare")]
#[command(version, about = "Tap-to-share contact exchange over NFC")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// MIME identifier records are tagged with and accepted under
    #[arg(
        long,
        global = true,
        env = "CONTACTSHARE_MIME_TYPE",
        default_value = contactshare_core::CONTACT_MIME_TYPE
    )]
    mime_type: String,

    /// Report payloads that claim our MIME type but fail to parse
    #[arg(long, global = true)]
    report_malformed: bool,
}

/// Contact fields shared by the commands that advertise.
#[derive(Args)]
struct ContactArgs {
    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Postal address
    #[arg(long, default_value = "")]
    address: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the NDEF message a sharing device would push, as hex
    Encode {
        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Feed a hex-encoded NDEF message to a receiving session
    Decode {
        /// NDEF message bytes as hex
        #[arg(value_name = "HEX")]
        hex: String,

        /// Deliver the tap while the receiver is in the background
        #[arg(long)]
        background: bool,
    },

    /// Simulate a tap between a sharing and a receiving session
    Tap {
        #[command(flatten)]
        contact: ContactArgs,

        /// Deliver the tap while the receiver is in the background
        #[arg(long)]
        receiver_backgrounded: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl ContactArgs {
    fn into_record(self) -> contactshare_core::ContactRecord {
        contactshare_core::ContactRecord::new(self.name, self.phone, self.email, self.address)
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contactshare=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let config = CliConfig {
        mime_type: cli.mime_type,
        report_malformed: cli.report_malformed,
    };

    match cli.command {
        Commands::Encode { contact } => {
            commands::encode::run(&config, contact.into_record())?;
        }
        Commands::Decode { hex, background } => {
            commands::decode::run(&config, &hex, background)?;
        }
        Commands::Tap {
            contact,
            receiver_backgrounded,
        } => {
            commands::tap::run(&config, contact.into_record(), receiver_backgrounded)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "contactshare", &mut io::stdout());
        }
    }

    Ok(())
}
