use std::net::IpAddr;
use std::time::Instant;

use clap::crate_version;
use tablero_server::startup::run_server;
use tablero_server::telemetry::{get_subscriber, init_subscriber};
use tablero_server::{ApplicationSettings, projects::builtin_catalog};

use crate::CliError;

pub fn start_server(
    interface: IpAddr,
    port: u16,
    open: bool,
    loglevel: String,
) -> Result<(), CliError> {
    let start = Instant::now();
    let name = String::from("Tablero");
    let version = crate_version!().to_owned();

    init_subscriber(get_subscriber(loglevel));

    let configuration = ApplicationSettings::new(name, version, port, interface, open);
    let projects = builtin_catalog();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_server(configuration, start, projects))?;

    Ok(())
}
