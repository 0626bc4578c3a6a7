use std::io::{self, Write};
use std::net::{Shutdown, TcpStream};

use interchange_codecs::json;
use interchange_core::{Error, Value};

use crate::config::ClientConfig;

/// Sends values to a one-shot server.
///
/// Each [`Client::send`] opens a fresh connection, writes one JSON text and
/// closes the write side so the server sees end of stream.
///
/// # Example
///
/// ```rust,no_run
/// use interchange_core::Value;
/// use interchange_transport::{Client, ClientConfig};
///
/// let client = Client::new(ClientConfig::default().with_port(12345));
/// client.send(&Value::from("hello"))?;
/// # Ok::<(), interchange_core::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one value. Returns the number of payload bytes written.
    ///
    /// The value is encoded before connecting, so a value JSON cannot carry
    /// never opens a connection.
    pub fn send(&self, value: &Value) -> Result<usize, Error> {
        let payload = json::encode(value)?;

        let mut stream = TcpStream::connect((self.config.host.as_str(), self.config.port))?;
        stream.write_all(payload.as_bytes())?;
        stream.flush()?;

        match stream.shutdown(Shutdown::Write) {
            Ok(()) => {}
            // The peer may already be gone once it has read everything.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => {}
            Err(e) => return Err(e.into()),
        }

        log::debug!(
            "Sent {} bytes to {}:{}",
            payload.len(),
            self.config.host,
            self.config.port
        );
        Ok(payload.len())
    }
}

/// Send one value to `host:port`.
pub fn send_data(value: &Value, host: &str, port: u16) -> Result<(), Error> {
    let config = ClientConfig::default().with_host(host).with_port(port);
    Client::new(config).send(value)?;
    Ok(())
}
