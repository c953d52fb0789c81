use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold reproducible machine learning project structures", long_about = None)]
struct Cli {
    /// Project folder name
    #[arg(long)]
    name: String,

    /// Destination path (defaults to the current directory)
    #[arg(long, default_value = ".")]
    path: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::init::execute(cli.name, cli.path)
}
