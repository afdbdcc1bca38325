pub mod commands;

mod clierror;
pub use clierror::CliError;

use std::net::IpAddr;

use clap::{Parser, Subcommand, command};

#[derive(Parser)]
#[command(version, about, long_about = None, before_help = r"
 _____     _     _
|_   _|_ _| |__ | | ___ _ __ ___
  | |/ _` | '_ \| |/ _ \ '__/ _ \
  | | (_| | |_) | |  __/ | | (_) |
  |_|\__,_|_.__/|_|\___|_|  \___/
")]
pub struct Cli {
    /// Default log filter, overridden by RUST_LOG.
    #[arg(long = "log-level", default_value = "INFO")]
    pub loglevel: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Starts the mock project API.
    Serve {
        /// Sets the IP address to bind.
        #[clap(short = 'I', long, default_value = "127.0.0.1")]
        interface: IpAddr,

        /// Sets the port to listen on.
        #[clap(short = 'P', long, default_value_t = 3000)]
        port: u16,

        /// Automatically opens the served URL in the default browser.
        #[arg(long, default_value = "false")]
        open: bool,
    },
}
