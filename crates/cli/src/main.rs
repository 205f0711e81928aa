use std::io;

use anyhow::Context;

use dealership_cli::{CliConfig, Shell};
use dealership_infra::FlatFileStore;

fn main() -> anyhow::Result<()> {
    dealership_observability::init();

    let config = CliConfig::from_env();
    tracing::info!(
        data_file = ?config.data_file,
        autosave = config.autosave,
        "starting dealership shell"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        stdin.lock(),
        stdout.lock(),
        FlatFileStore::new(&config.data_file),
        config.shell_options(),
    );

    shell.run().context("terminal I/O failed")?;
    Ok(())
}
