// # netcheck - network parameter check
//
// A thin integration layer over the netsetter crate. It contains no
// parsing logic of its own; every value goes through a Setter.
//
// netcheck is responsible for:
// 1. Reading configuration from environment variables
// 2. Checking that every setter is properly constructed
// 3. Applying each value through its setter and reporting the result
//
// ## Configuration
//
// - `NETCHECK_BIND_IP`: IP address to bind to (default: 127.0.0.1)
// - `NETCHECK_PEER_ADDR`: TCP endpoint of the peer (required)
// - `NETCHECK_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
//
// ## Example
//
// ```bash
// export NETCHECK_BIND_IP=2001:db8::68
// export NETCHECK_PEER_ADDR=[2001:db8::1]:8080
//
// netcheck
// ```

use anyhow::Result;
use netsetter::{IpSetter, Setter, TcpAddrSetter};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for the possible outcomes
#[derive(Debug, Clone, Copy)]
enum NetcheckExitCode {
    /// Every value was accepted
    Success = 0,
    /// Missing or rejected configuration
    ConfigError = 1,
    /// Unexpected failure
    RuntimeError = 2,
}

impl From<NetcheckExitCode> for ExitCode {
    fn from(code: NetcheckExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration, as raw text
struct Config {
    bind_ip: String,
    peer_addr: String,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            bind_ip: env::var("NETCHECK_BIND_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            peer_addr: env::var("NETCHECK_PEER_ADDR").map_err(|_| {
                anyhow::anyhow!(
                    "NETCHECK_PEER_ADDR is required. \
                    Set it via: export NETCHECK_PEER_ADDR=192.167.0.1:8080"
                )
            })?,
            log_level: env::var("NETCHECK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Map the configured log level onto a tracing level
    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "NETCHECK_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }
}

/// Values accepted by the setters
#[derive(Debug)]
struct Settings {
    bind_ip: IpAddr,
    peer_addr: Option<SocketAddr>,
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return NetcheckExitCode::ConfigError.into();
        }
    };

    let log_level = match config.level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return NetcheckExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return NetcheckExitCode::RuntimeError.into();
    }

    match apply(&config) {
        Ok(settings) => {
            info!("Bind IP: {}", settings.bind_ip);
            if let Some(peer) = settings.peer_addr {
                info!("Peer address: {}", peer);
            }
            NetcheckExitCode::Success.into()
        }
        Err(e) => {
            error!("Validation failed: {}", e);
            NetcheckExitCode::ConfigError.into()
        }
    }
}

/// Apply every configured value through its setter
///
/// All values are attempted so that each rejection is reported, and the
/// first error is returned.
fn apply(config: &Config) -> Result<Settings> {
    let mut settings = Settings {
        bind_ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
        peer_addr: None,
    };

    let mut params: Vec<(&str, &str, Box<dyn Setter + '_>)> = Vec::new();
    params.push((
        "NETCHECK_BIND_IP",
        config.bind_ip.as_str(),
        Box::new(IpSetter::new(&mut settings.bind_ip)),
    ));
    params.push((
        "NETCHECK_PEER_ADDR",
        config.peer_addr.as_str(),
        Box::new(TcpAddrSetter::new(&mut settings.peer_addr)),
    ));

    for (name, _, setter) in &params {
        setter.check_setter(name);
    }

    let mut first_error = None;
    for (name, value, setter) in params.iter_mut() {
        match setter.set_with_value(name, value) {
            Ok(()) => info!("{} accepted: {}", name, setter.current_value()),
            Err(e) => {
                eprintln!("{}: {}", name, e);
                eprintln!("  allowed values: {}", setter.allowed_values());
                first_error.get_or_insert(e);
            }
        }
    }
    drop(params);

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(settings),
    }
}
