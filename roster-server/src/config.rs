use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster-server")]
#[command(about = "In-memory user records over HTTP/JSON", long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_port() {
        let config = ServerConfig::try_parse_from(["roster-server", "--port", "8081"]).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8081");
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(ServerConfig::try_parse_from(["roster-server", "--port", "abc"]).is_err());
        assert!(ServerConfig::try_parse_from(["roster-server", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_default_port() {
        assert_eq!(ServerConfig::default().bind_addr().port(), 3000);
    }
}
