use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

use crate::error::StoreResult;
use crate::store::TradeStore;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// JSON dataset to serve instead of the built-in seed.
    pub data: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            data: None,
        }
    }
}

pub fn command() -> Command {
    Command::new("trade-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Serves read-only trade lookups, search and filtering over HTTP")
        .arg(
            Arg::new("host")
                .long("host")
                .env("TRADES_HOST")
                .value_parser(clap::value_parser!(IpAddr))
                .default_value("127.0.0.1")
                .help("Address to bind"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .env("TRADES_PORT")
                .value_parser(clap::value_parser!(u16))
                .default_value("8000")
                .help("Port to listen on"),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .env("TRADES_DATA")
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON file with an array of trades (defaults to the built-in seed)"),
        )
}

impl ServerConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        ServerConfig {
            host: matches
                .get_one::<IpAddr>("host")
                .copied()
                .unwrap_or(DEFAULT_HOST),
            port: matches
                .get_one::<u16>("port")
                .copied()
                .unwrap_or(DEFAULT_PORT),
            data: matches.get_one::<PathBuf>("data").cloned(),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builds the store once, from the data file if one is configured.
    pub fn load_store(&self) -> StoreResult<TradeStore> {
        match &self.data {
            Some(path) => TradeStore::from_json_file(path),
            None => Ok(TradeStore::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let matches = command()
            .try_get_matches_from(std::iter::once("trade-server").chain(args.iter().copied()))
            .unwrap();
        ServerConfig::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        if std::env::vars().any(|(k, _)| k.starts_with("TRADES_")) {
            return;
        }
        let config = parse(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_overrides() {
        let config = parse(&["--host", "0.0.0.0", "-p", "9100", "--data", "trades.json"]);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9100");
        assert_eq!(config.data, Some(PathBuf::from("trades.json")));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = command().try_get_matches_from(["trade-server", "--port", "http"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_store_without_data_uses_seed() {
        let store = ServerConfig::default().load_store().unwrap();
        assert_eq!(store.len(), 2);
    }
}
