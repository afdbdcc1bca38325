use clap::Parser;
use tablero_cli::{Cli, CliError, Command, commands};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        e.exit_with_tips();
    }

    Ok(())
}

fn run_cli(cli: Cli) -> Result<(), CliError> {
    let Cli { loglevel, command } = cli;

    match command {
        Command::Serve {
            interface,
            port,
            open,
        } => commands::server::start_server(interface, port, open, loglevel),
    }
}
