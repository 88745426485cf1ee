use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080, also used when unparsable)
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        let port = match port.as_deref().map(str::parse::<u16>) {
            Some(Ok(port)) => port,
            Some(Err(_)) => {
                tracing::warn!("SERVICE_PORT is not a valid port, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
            None => DEFAULT_PORT,
        };

        Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
