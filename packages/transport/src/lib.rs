//! # interchange-transport
//!
//! One-shot TCP transport for interchange values.
//!
//! A [`Server`] accepts a single connection and reads until the peer closes
//! its write side; the bytes received are decoded as one JSON value. A
//! [`Client`] connects, writes the JSON text of a value and closes. There is
//! no length prefix: end of stream is the message boundary.
//!
//! ```rust,no_run
//! use std::thread;
//!
//! use interchange_core::Value;
//! use interchange_transport::{send_data, Server, ServerConfig};
//!
//! let mut server = Server::bind(&ServerConfig::default().with_port(0))?;
//! let port = server.local_addr()?.port();
//!
//! let sender = thread::spawn(move || send_data(&Value::from("hi"), "localhost", port));
//! let value = server.receive()?;
//! sender.join().unwrap()?;
//! assert_eq!(value, Value::from("hi"));
//! # Ok::<(), interchange_core::Error>(())
//! ```

mod client;
mod config;
mod server;

pub use client::{send_data, Client};
pub use config::{
    ClientConfig, ServerConfig, DEFAULT_CHUNK_SIZE, DEFAULT_HOST, DEFAULT_PORT, LISTEN_BACKLOG,
};
pub use server::{read_to_close, start_server, Server, ServerState};

pub use interchange_core::{Error, Value};
