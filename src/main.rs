use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cdinv::common::DEFAULT_INVENTORY_FILE;
use cdinv::shell::Session;
use cdinv::storage::InventoryFile;

#[derive(Debug, Parser)]
#[clap(name = "cdinv", version, about = "A command-line CD inventory manager")]
struct CommandLine {
    /// Inventory data file to load from and save to
    #[clap(long, short, default_value = DEFAULT_INVENTORY_FILE)]
    file: PathBuf,
}

fn main() -> cdinv::Result<()> {
    let args = CommandLine::parse();

    // Diagnostics go to stderr so they never interleave with the menu on
    // stdout. Enable them with RUST_LOG.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), InventoryFile::new(args.file));
    session.run()
}
