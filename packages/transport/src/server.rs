use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

use interchange_codecs::json;
use interchange_core::{Error, Value};
use socket2::{Domain, Protocol, Socket, Type};

use crate::config::{ServerConfig, LISTEN_BACKLOG};

/// Where a server is in its single exchange.
///
/// Every path ends in `Closed`; there is no way back to `Listening`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerState {
    Listening,
    Connected,
    Receiving,
    Decoding,
    Closed,
}

/// A one-shot server.
///
/// It accepts exactly one connection and reads until the peer closes its
/// write side. It then decodes the whole payload as one JSON value. There
/// are no read timeouts, so a peer that never closes blocks
/// [`Server::receive`] forever.
///
/// # Example
///
/// ```rust,no_run
/// use interchange_transport::{Server, ServerConfig};
///
/// let mut server = Server::bind(&ServerConfig::default())?;
/// let value = server.receive()?;
/// println!("{:?}", value);
/// # Ok::<(), interchange_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Server {
    listener: Option<TcpListener>,
    chunk_size: usize,
    state: ServerState,
}

impl Server {
    /// Bind and start listening.
    ///
    /// `SO_REUSEADDR` is set before binding, so a quick restart on the same
    /// port does not fail on lingering sockets. The backlog holds one pending
    /// connection.
    pub fn bind(config: &ServerConfig) -> Result<Server, Error> {
        let listener = listen(&config.host, config.port)?;
        log::debug!("Listening on {}", listener.local_addr()?);

        Ok(Server {
            listener: Some(listener),
            chunk_size: config.chunk_size.max(1),
            state: ServerState::Listening,
        })
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    /// The bound address, useful after binding port `0`.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        let listener = self.listener.as_ref().ok_or(Error::Closed)?;
        Ok(listener.local_addr()?)
    }

    /// Accept one connection and return the value it carried.
    ///
    /// Both sockets are closed before this returns, whatever the outcome.
    /// Bytes received before a read or decode failure are discarded.
    pub fn receive(&mut self) -> Result<Value, Error> {
        let listener = self.listener.take().ok_or(Error::Closed)?;
        let result = self.receive_on(listener);
        self.transition(ServerState::Closed);
        result
    }

    fn receive_on(&mut self, listener: TcpListener) -> Result<Value, Error> {
        let (mut conn, peer) = listener.accept()?;
        drop(listener);
        self.transition(ServerState::Connected);
        log::debug!("Accepted connection from {}", peer);

        self.transition(ServerState::Receiving);
        let payload = read_to_close(&mut conn, self.chunk_size)?;
        drop(conn);
        log::debug!("Received {} bytes from {}", payload.len(), peer);

        self.transition(ServerState::Decoding);
        json::decode_slice(&payload)
    }

    fn transition(&mut self, next: ServerState) {
        log::debug!("Server {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Listen on the first address `host` resolves to that accepts a bind.
fn listen(host: &str, port: u16) -> io::Result<TcpListener> {
    let mut last_err = None;
    for addr in (host, port).to_socket_addrs()? {
        match listen_on(addr) {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                log::debug!("Cannot listen on {}: {}", addr, e);
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}:{} resolved to no addresses", host, port),
        )
    }))
}

fn listen_on(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    Ok(socket.into())
}

/// Read until the peer signals end of stream with a zero-length read.
pub fn read_to_close<R: Read>(reader: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut payload = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(payload),
            Ok(n) => payload.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Receive one value on `host:port` and log it.
pub fn start_server(host: &str, port: u16) -> Result<Value, Error> {
    let config = ServerConfig::default().with_host(host).with_port(port);
    let mut server = Server::bind(&config)?;
    let value = server.receive()?;
    log::info!("Received value from client: {:?}", value);
    Ok(value)
}
