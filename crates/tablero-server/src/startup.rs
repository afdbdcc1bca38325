use std::io;
use std::net::IpAddr;
use std::time::Instant;

use axum::{Router, body::Body, http::Request, routing::get, serve::Serve};
use color_eyre::owo_colors::OwoColorize;
use eyre::Result;
use http::Method;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::{Level, error, error_span, info};

use crate::ApplicationSettings;
use crate::projects::Project;
use crate::routes::{health_check, list_projects};

#[derive(Debug, Clone)]
pub struct AppState {
    pub projects: Vec<Project>,
}

#[derive(Debug)]
pub struct Application {
    pub port: u16,
    pub host: IpAddr,
    pub server: Serve<Router, Router>,
}

impl Application {
    /// # Errors
    /// Fails if neither the requested port nor an ephemeral one can be bound
    /// on the given interface.
    pub async fn build(
        configuration: &ApplicationSettings,
        projects: Vec<Project>,
    ) -> Result<Self> {
        let address = format!("{}:{}", configuration.host, configuration.port);

        let listener = match TcpListener::bind(&address).await {
            Ok(listener) => listener,
            Err(err) => {
                error!("{err}. Retrying on an ephemeral port...");
                match TcpListener::bind(format!("{}:0", configuration.host)).await {
                    Ok(listener) => listener,
                    Err(err) => {
                        error!("No ports available, shutting down...");
                        return Err(err.into());
                    }
                }
            }
        };

        let port = listener.local_addr()?.port();
        let host = configuration.host;

        let state = AppState { projects };

        let server = build_server(listener, state);

        Ok(Self { port, host, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> String {
        self.host.to_string()
    }

    /// # Errors
    ///
    /// Returns an error if the underlying server fails while serving.
    /// # Panics
    ///
    /// Panics if the shutdown signal handlers cannot be installed.
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server
            // https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs
            .with_graceful_shutdown(async move {
                let ctrl_c = async {
                    signal::ctrl_c()
                        .await
                        .expect("Failed to install the Ctrl+C handler");
                };
                #[cfg(unix)]
                let terminate = async {
                    signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                        .expect("Failed to install the SIGTERM handler")
                        .recv()
                        .await;
                };

                #[cfg(not(unix))]
                let terminate = std::future::pending::<()>();

                tokio::select! {
                    () = ctrl_c => {
                        info!("ctrl+c received, shutting down.")
                    },
                    () = terminate => {
                        info!("termination signal received, shutting down.")
                    },
                }
            })
            .await
    }
}

pub fn build_server(listener: TcpListener, state: AppState) -> Serve<Router, Router> {
    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/projects", get(list_projects));

    // The catalog is meant to be read from a browser app on another origin,
    // so the permissive policy is part of the contract rather than a
    // debug-only convenience.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let server = api_routes
        .with_state(state)
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .extensions()
                                .get::<RequestId>()
                                .map_or_else(|| "unknown".into(), ToString::to_string);

                            error_span!(
                                "request",
                                id = %request_id,
                                method = %request.method().blue().bold(),
                                uri = %request.uri()
                            )
                        })
                        .on_response(
                            DefaultOnResponse::new()
                                .include_headers(true)
                                .level(Level::INFO),
                        ),
                )
                .layer(RequestIdLayer),
        )
        .layer(CompressionLayer::new());

    axum::serve(listener, server)
}

pub async fn run_server(
    configuration: ApplicationSettings,
    start: Instant,
    projects: Vec<Project>,
) -> Result<()> {
    match Application::build(&configuration, projects).await {
        Ok(app) => {
            let url = format!("http://{}:{}", app.host(), app.port());

            println!(
                "\n\n  {} {} ready in {} ms\n",
                configuration.name.to_uppercase().bold().bright_green(),
                format!("v{}", configuration.version).green(),
                start.elapsed().as_millis().bold().bright_white(),
            );

            println!(
                "  {}  {}:  {}\n\n",
                "➜".bold().bright_green(),
                "Local".bold().bright_white(),
                url.bright_cyan().underline()
            );

            if configuration.open
                && webbrowser::open_browser(webbrowser::Browser::Default, &url).is_ok()
            {
                info!("Opening the dashboard in the default browser.");
            }

            if let Err(e) = app.run_until_stopped().await {
                error!("Error while serving HTTP: {:?}", e);
                return Err(e.into());
            }
        }
        Err(e) => {
            error!("Failed to start the server: {:?}", e);
            return Err(e);
        }
    }
    Ok(())
}
