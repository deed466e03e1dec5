//! HTTP server for the classroom service.
//!
//! ```bash
//! CLAZZ_BIND=0.0.0.0:8080 RUST_LOG=info clazz-server --log-format json
//! ```

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use clazz_cqrs::{App, AppConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "clazz-server", about = "Classroom CRUD service over HTTP")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "CLAZZ_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Generated class ids start above this value.
    #[arg(long, env = "CLAZZ_ID_FLOOR", default_value_t = AppConfig::DEFAULT_ID_FLOOR)]
    id_floor: u32,

    /// Start with an empty store instead of the example classes.
    #[arg(long, env = "CLAZZ_NO_SEED")]
    no_seed: bool,

    #[arg(long, env = "CLAZZ_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            id_floor: self.id_floor,
            seed: !self.no_seed,
            bind: self.bind,
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = args.config();
    info!(?config, "configuration loaded");

    let app = match App::new(&config) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            error!(error = %e, "failed to assemble dispatchers");
            return ExitCode::FAILURE;
        }
    };

    match clazz_cqrs::http::serve(app, config.bind).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
