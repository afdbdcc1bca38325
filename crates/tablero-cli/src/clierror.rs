use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Server error: {0}")]
    Server(#[from] eyre::Report),
}

impl CliError {
    /// Bind failures travel through `eyre::Report` out of
    /// `Application::build`; recover the underlying `io::Error` so they get
    /// the same tips as direct I/O failures.
    pub(crate) fn as_io(&self) -> Option<&std::io::Error> {
        match self {
            CliError::Io(error) => Some(error),
            CliError::Server(report) => report.downcast_ref::<std::io::Error>(),
        }
    }

    pub fn print_tip(&self) {
        match self.as_io() {
            Some(error) => {
                eprintln!("💡 The server could not start:");
                match error.kind() {
                    std::io::ErrorKind::AddrInUse => {
                        eprintln!("   • The port is already taken by another process");
                        eprintln!("   • Pick a different one with --port, or use --port 0 for an ephemeral port");
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        eprintln!("   • Binding that address needs elevated permissions");
                        eprintln!("   • Ports below 1024 are privileged; try a higher one");
                    }
                    std::io::ErrorKind::AddrNotAvailable => {
                        eprintln!("   • That interface does not exist on this machine");
                        eprintln!("   • Check the value passed to --interface");
                    }
                    _ => {
                        eprintln!("   • {error}");
                    }
                }
            }
            None => {
                eprintln!("💡 The server stopped unexpectedly:");
                eprintln!("   • {self}");
            }
        }
    }

    pub fn exit_with_tips(&self) -> ! {
        eprintln!("Error: {self}");
        self.print_tip();
        std::process::exit(1);
    }
}
