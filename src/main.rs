use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use credent::{Config, Credential, DEFAULT_KEY_LENGTH, DEFAULT_WORK};
use std::process;

mod auth;

#[derive(Debug, clap::Args)]
struct ConfigArgs {
    /// Derived key length in bytes (default: 66)
    #[arg(long, env = "CREDENT_KEY_LENGTH")]
    key_length: Option<u32>,

    /// Iteration count for new hashes (default: 32768)
    #[arg(long, env = "CREDENT_WORK")]
    work: Option<u32>,
}

impl ConfigArgs {
    fn to_config(&self) -> Result<Config> {
        let config = Config::new(
            self.key_length.unwrap_or(DEFAULT_KEY_LENGTH),
            self.work.unwrap_or(DEFAULT_WORK),
        )?;
        Ok(config)
    }
}

#[derive(Debug, Parser)]
#[command(name = "credent")]
#[command(
    version,
    about = "Password hashing, verification, and expiry checking for credential storage."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password into a storable record
    Hash {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Checks a password against a stored record
    #[command(arg_required_else_help = true)]
    Verify { record: String },

    /// Reports whether a stored record is stale under current policy
    #[command(arg_required_else_help = true)]
    Expired {
        record: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Maximum record age in days
        #[arg(long, requires = "created_at")]
        days: Option<u32>,

        /// When the record was stored (RFC 3339)
        #[arg(long, requires = "days")]
        created_at: Option<DateTime<Utc>>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Commands::Hash { config } => {
            let engine = Credential::new(config.to_config()?);
            let password = auth::read_new_password()?;
            println!("{}", engine.hash(&password)?);
        }
        Commands::Verify { record } => {
            let engine = Credential::default();
            let password = auth::read_password()?;
            if engine.verify(&record, &password)? {
                println!("password verified");
            } else {
                println!("password does not match");
                process::exit(1);
            }
        }
        Commands::Expired {
            record,
            config,
            days,
            created_at,
        } => {
            let engine = Credential::new(config.to_config()?);
            let expired = match (days, created_at) {
                (Some(days), Some(created_at)) => {
                    engine.expired_with_age(&record, created_at, days)?
                }
                _ => engine.expired(&record)?,
            };

            if expired {
                println!("expired");
                process::exit(1);
            }
            println!("current");
        }
    }

    Ok(())
}
