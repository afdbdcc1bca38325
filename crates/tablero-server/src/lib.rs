pub mod projects;
pub mod routes;
pub mod startup;
pub mod telemetry;

use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    pub name: String,
    pub version: String,
    pub port: u16,
    pub host: IpAddr,
    pub open: bool,
}

impl ApplicationSettings {
    #[must_use]
    pub fn new(name: String, version: String, port: u16, host: IpAddr, open: bool) -> Self {
        Self {
            name,
            version,
            port,
            host,
            open,
        }
    }
}
