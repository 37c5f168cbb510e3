use anyhow::{Context, Result};
use budgetwriter_ingest::{Aggregate, TransactionReader};
use budgetwriter_sheets::{SheetWriter, SheetsClient, access_token};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::info;

mod config;
mod logging;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "budgetwriter",
    version,
    about = "Export your transactions to a budget spreadsheet."
)]
struct Cli {
    /// The Google Sheets ID of the spreadsheet being written to.
    sheet_id: String,

    /// A CSV file of transactions to import: -f 'Provider' path/to/export.csv
    /// (providers: "Capital One", "Discover")
    #[arg(
        short = 'f',
        long = "file",
        num_args = 2,
        value_names = ["PROVIDER", "PATH"],
        action = ArgAction::Append,
        required = true
    )]
    files: Vec<String>,

    /// Parse the files and print what would be written, without touching the sheet
    #[arg(long)]
    dry_run: bool,

    /// Config file (default: ~/.budgetwriter/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (default: RUST_LOG, then config, then info)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FileArg {
    provider: String,
    path: PathBuf,
}

impl Cli {
    fn file_args(&self) -> Vec<FileArg> {
        self.files
            .chunks_exact(2)
            .map(|pair| FileArg {
                provider: pair[0].clone(),
                path: PathBuf::from(&pair[1]),
            })
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    let rust_log = std::env::var("RUST_LOG").ok();
    logging::setup_logging(&logging::filter_directive(
        cli.log_level.as_deref(),
        rust_log.as_deref(),
        cfg.logging.level.as_deref(),
    ));

    // Everything is parsed before any network call so a bad CSV never
    // leaves the sheet half-written.
    let aggregate = ingest(&cli.file_args())?;

    if cli.dry_run {
        print_aggregate(&aggregate);
        return Ok(());
    }

    if aggregate.is_empty() {
        println!("No transactions to write.");
        return Ok(());
    }

    let token = access_token(&cfg.google_paths()?).await?;
    let writer = SheetWriter::new(SheetsClient::new(token)?, cfg.sheet.clone());

    info!(sheet_id = %cli.sheet_id, months = aggregate.len(), "writing to spreadsheet");
    let reports = writer.write(&cli.sheet_id, &aggregate).await?;

    for r in &reports {
        println!(
            "{}: wrote {} row(s) starting at line {}",
            r.month, r.rows, r.insertion_line
        );
    }

    Ok(())
}

fn ingest(files: &[FileArg]) -> Result<Aggregate> {
    let mut reader = TransactionReader::new();
    for f in files {
        let added = reader
            .add_csv(&f.provider, &f.path)
            .with_context(|| format!("reading {} as {}", f.path.display(), f.provider))?;
        println!("Parsed {} transactions from {}", added, f.path.display());
    }
    Ok(reader.into_aggregate())
}

fn print_aggregate(aggregate: &Aggregate) {
    if aggregate.is_empty() {
        println!("\nNo transactions to write.");
        return;
    }

    for (month, bucket) in aggregate.iter() {
        println!("\n## {} ({} rows)\n", month, bucket.len());
        for (entry, category) in bucket.iter() {
            println!(
                "- {} | {} | {}",
                entry.item,
                entry.amount,
                category.as_str()
            );
        }
    }

    println!("\nDry run: nothing written.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetwriter_ingest::Month;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeated_file_pairs() {
        let cli = Cli::try_parse_from([
            "budgetwriter",
            "1AbCdEf",
            "-f",
            "Capital One",
            "capone.csv",
            "--file",
            "Discover",
            "discover.csv",
        ])
        .unwrap();

        assert_eq!(cli.sheet_id, "1AbCdEf");
        assert_eq!(
            cli.file_args(),
            vec![
                FileArg {
                    provider: "Capital One".to_string(),
                    path: PathBuf::from("capone.csv"),
                },
                FileArg {
                    provider: "Discover".to_string(),
                    path: PathBuf::from("discover.csv"),
                },
            ]
        );
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_file_requires_provider_and_path() {
        assert!(Cli::try_parse_from(["budgetwriter", "1AbCdEf", "-f", "Discover"]).is_err());
        assert!(Cli::try_parse_from(["budgetwriter", "1AbCdEf"]).is_err());
        assert!(Cli::try_parse_from(["budgetwriter", "-f", "Discover", "d.csv"]).is_err());
    }

    #[test]
    fn test_ingest_in_command_line_order() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        writeln!(a, "Trans. Date,Post Date,Description,Amount,Category").unwrap();
        writeln!(a, "03/01/2024,03/02/2024,Bakery,6.25,Restaurants").unwrap();
        a.flush().unwrap();

        let mut b = tempfile::NamedTempFile::new().unwrap();
        writeln!(b, "Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit").unwrap();
        writeln!(b, "2024-03-04,2024-03-05,1234,Hardware Store,Home,19.99,").unwrap();
        b.flush().unwrap();

        let agg = ingest(&[
            FileArg {
                provider: "Discover".to_string(),
                path: a.path().to_path_buf(),
            },
            FileArg {
                provider: "Capital One".to_string(),
                path: b.path().to_path_buf(),
            },
        ])
        .unwrap();

        let items: Vec<_> = agg
            .get(Month::March)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.item.as_str())
            .collect();
        assert_eq!(items, vec!["Bakery", "Hardware Store"]);
    }

    #[test]
    fn test_ingest_reports_unknown_provider() {
        let err = ingest(&[FileArg {
            provider: "Chase".to_string(),
            path: PathBuf::from("chase.csv"),
        }])
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("reading chase.csv as Chase"));
        assert!(msg.contains("CSVs from 'Chase' are not yet supported"));
    }
}
