use std::io;

use bookstack_cli::{Shell, ShellConfig};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = ShellConfig::from_env();
    bookstack_observability::init_with(config.log_format);
    for warning in &warnings {
        tracing::warn!("{warning}; using default");
    }

    tracing::info!(seed = config.seed_on_start, author = %config.author, "starting shell");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    shell.run()?;

    tracing::info!(books = shell.store().len(), "shell closed");
    Ok(())
}
