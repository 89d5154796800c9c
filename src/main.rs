// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use clap::{Parser, Subcommand};
use currency_names::config::Config;
use currency_names::export::{self, ExportFormat};
use currency_names::{currencies, db, CurrencyCatalog, LookupOptions};
use dotenvy::dotenv;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Look up English names for ISO 4217 currency codes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display name for one or more currency codes
    Lookup {
        #[arg(required = true)]
        codes: Vec<String>,
        /// Accept lower-case codes and surrounding whitespace
        #[arg(long)]
        normalize: bool,
        /// Print the code itself when it is not in the catalog
        #[arg(long)]
        fallback: bool,
    },
    /// List every currency in code order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Find the codes that use an exact display name
    Search { name: String },
    /// Export the catalog to a timestamped file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Write the catalog into the currencies table of a SQLite database
    SyncDb {
        #[arg(long)]
        database_url: Option<String>,
    },
}

/// Command-line flags can only switch lookup options on, never off.
fn cli_lookup_options(config: &Config, normalize: bool, fallback: bool) -> LookupOptions {
    let mut options = config.lookup_options();
    options.normalize |= normalize;
    options.fallback_to_code |= fallback;
    options
}

/// Print `code<TAB>name` for each resolved code and return how many failed.
fn run_lookup<O: Write, E: Write>(
    catalog: &CurrencyCatalog,
    codes: &[String],
    options: LookupOptions,
    out: &mut O,
    err: &mut E,
) -> Result<usize> {
    let mut failed = 0;
    for code in codes {
        match catalog.resolve(code, options) {
            Ok(name) => writeln!(out, "{}\t{}", code, name)?,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                failed += 1;
            }
        }
    }
    Ok(failed)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default()?;
    let catalog = CurrencyCatalog::english();

    match cli.command {
        Commands::Lookup {
            codes,
            normalize,
            fallback,
        } => {
            let options = cli_lookup_options(&config, normalize, fallback);
            let failed = run_lookup(
                catalog,
                &codes,
                options,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )?;
            if failed > 0 {
                anyhow::bail!("{} of {} codes could not be resolved", failed, codes.len());
            }
        }
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog.to_currencies())?);
            } else {
                for (code, name) in catalog.iter() {
                    println!("{}\t{}", code, name);
                }
            }
        }
        Commands::Search { name } => {
            let codes = catalog.codes_for_name(&name);
            if codes.is_empty() {
                anyhow::bail!("no currency is named {:?}", name);
            }
            for code in codes {
                println!("{}", code);
            }
        }
        Commands::Export { format, output_dir } => {
            let output_dir = output_dir.unwrap_or(config.output_dir);
            let path = export::export_catalog(catalog, format, &output_dir)?;
            println!("✅ File created at: {}", path.display());
        }
        Commands::SyncDb { database_url } => {
            let database_url = database_url.unwrap_or(config.database_url);
            let pool = db::create_db_pool(&database_url).await?;
            let written = currencies::sync_catalog(&pool, catalog).await?;
            println!("✅ {} currencies written to {}", written, database_url);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(input: &[&str]) -> Vec<String> {
        input.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_run_lookup_counts_failures() -> Result<()> {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failed = run_lookup(
            CurrencyCatalog::english(),
            &codes(&["USD", "ZZZ", "usd"]),
            LookupOptions::default(),
            &mut out,
            &mut err,
        )?;

        assert_eq!(failed, 2);
        assert_eq!(String::from_utf8(out)?, "USD\tUS Dollar\n");
        let err = String::from_utf8(err)?;
        assert!(err.contains("unknown currency code: ZZZ"));
        assert!(err.contains("unknown currency code: usd"));
        Ok(())
    }

    #[test]
    fn test_run_lookup_with_fallback() -> Result<()> {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let options = LookupOptions {
            normalize: true,
            fallback_to_code: true,
        };
        let failed = run_lookup(
            CurrencyCatalog::english(),
            &codes(&["xof", "BTC"]),
            options,
            &mut out,
            &mut err,
        )?;

        assert_eq!(failed, 0);
        assert_eq!(String::from_utf8(out)?, "xof\tCFA Franc\nBTC\tBTC\n");
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_flags_combine_with_config() {
        let config = Config {
            normalize_input: true,
            ..Default::default()
        };

        let options = cli_lookup_options(&config, false, false);
        assert!(options.normalize);
        assert!(!options.fallback_to_code);

        let options = cli_lookup_options(&config, false, true);
        assert!(options.normalize);
        assert!(options.fallback_to_code);

        let options = cli_lookup_options(&Config::default(), true, false);
        assert!(options.normalize);
        assert!(!options.fallback_to_code);
    }
}
