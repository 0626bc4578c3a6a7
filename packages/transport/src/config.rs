/// Host used when none is given.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 12345;

/// Bytes requested per read while receiving a message.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Pending connections a listening socket queues.
pub const LISTEN_BACKLOG: i32 = 1;

/// Where a server listens and how it reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub chunk_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Port `0` asks the OS for a free port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Zero is treated as one byte per read.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

/// Where a client connects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ClientConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_wire_contract() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "localhost");
        assert_eq!(server.port, 12345);
        assert_eq!(server.chunk_size, 4096);

        let client = ClientConfig::default();
        assert_eq!((client.host.as_str(), client.port), ("localhost", 12345));
    }

    #[test]
    fn builders_override_fields() {
        let config = ServerConfig::default()
            .with_host("127.0.0.1")
            .with_port(0)
            .with_chunk_size(0);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 0);
        assert_eq!(config.chunk_size, 1);
    }
}
