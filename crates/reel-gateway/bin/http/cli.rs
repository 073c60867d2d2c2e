use clap::{Parser, ValueEnum};
use reel_gateway::cors::DEFAULT_ALLOWED_ORIGINS;
use reel_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const PORT_ENV: &str = "PORT";
pub const HOST_ENV: &str = "REEL_HOST";
pub const ALLOWED_ORIGINS_ENV: &str = "REEL_ALLOWED_ORIGINS";
pub const SEED_PATH_ENV: &str = "REEL_SEED_PATH";
pub const LOG_FORMAT_ENV: &str = "REEL_LOG_FORMAT";

pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "reel-gateway")]
pub struct CLI {
    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Origins allowed to make cross-origin requests, comma separated.
    #[arg(
        long,
        env = ALLOWED_ORIGINS_ENV,
        value_delimiter = ',',
        default_values_t = DEFAULT_ALLOWED_ORIGINS.map(String::from),
    )]
    pub allowed_origins: Vec<String>,

    /// JSON file to seed the catalog from instead of the bundled dataset.
    #[arg(long, env = SEED_PATH_ENV)]
    pub seed_path: Option<PathBuf>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
