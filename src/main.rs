use clap::{CommandFactory, Parser};

use har_splitter::commands;
use har_splitter::error::SplitError;

#[derive(Parser)]
#[command(name = "har-splitter")]
#[command(about = "Decompose a HAR capture into per-request files", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the HAR capture file (.har, optionally .gz/.zst compressed)
    har_file: Option<String>,

    /// Also export the summary index as CSV to this path
    #[arg(long, value_name = "FILE")]
    export_csv: Option<String>,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "har-splitter", &mut std::io::stdout());
        return;
    }

    if let Err(err) = run(cli) {
        eprintln!("Error processing HAR file: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let har_file = cli.har_file.ok_or(SplitError::Usage)?;
    commands::extract::run(&har_file, cli.export_csv.as_deref())?;
    Ok(())
}
