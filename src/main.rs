use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use bip39_splitter::cli::{Cli, Commands, normalize_args};
use bip39_splitter::error::SHARE_MISMATCH_HINT;
use bip39_splitter::input::LineReader;
use bip39_splitter::logging::init_logging;
use bip39_splitter::sharing::Blahaj;
use bip39_splitter::{Error, combine_shares, split_mnemonic};

/// Width of the `=` lines framing the printed parts
const SEPARATOR_WIDTH: usize = 98;

fn run(cli: Cli) -> Result<()> {
    let registry = cli.registry();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Split {
            language,
            parts,
            threshold,
        } => {
            // Read mnemonic securely from stdin
            let mnemonic = LineReader::stdin().read_mnemonic()?;
            let shares =
                split_mnemonic(&registry, &Blahaj, &language, &mnemonic, parts, threshold)?;

            let separator = "=".repeat(SEPARATOR_WIDTH);
            writeln!(out, "Parts:\n{separator}").context("failed to write parts")?;
            for share in &shares {
                writeln!(out, "{share}").context("failed to write parts")?;
            }
            writeln!(out, "{separator}").context("failed to write parts")?;
        }
        Commands::Combine { language } => {
            // Read shares securely from stdin, one per line
            let shares = LineReader::stdin().read_shares()?;
            let mnemonic = combine_shares(&registry, &Blahaj, &language, &shares)?;

            writeln!(out, "Reconstructed mnemonic (seed phrase):\n{mnemonic}")
                .context("failed to write mnemonic")?;
        }
        Commands::Languages => {
            for language in registry.list_languages()? {
                writeln!(out, "{language}").context("failed to write languages")?;
            }
        }
    }

    out.flush().context("failed to flush stdout")
}

fn main() -> ExitCode {
    // Usage errors exit with 2, help with 0
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if matches!(
                err.downcast_ref::<Error>(),
                Some(Error::InvalidWordIndex { .. })
            ) {
                eprintln!("{SHARE_MISMATCH_HINT}");
            }
            ExitCode::FAILURE
        }
    }
}
