//! Client and server talking over loopback.

use std::io::Write;
use std::net::{Shutdown, TcpStream};
use std::thread;

use interchange_core::{Error, Map, Value};
use interchange_transport::{Client, ClientConfig, Server, ServerConfig, ServerState};

const HOST: &str = "127.0.0.1";

fn bind() -> (Server, u16) {
    let server = Server::bind(&ServerConfig::default().with_host(HOST).with_port(0)).unwrap();
    let port = server.local_addr().unwrap().port();
    (server, port)
}

fn send_raw(port: u16, payload: &'static [u8]) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = TcpStream::connect((HOST, port)).unwrap();
        stream.write_all(payload).unwrap();
        stream.shutdown(Shutdown::Write).unwrap();
    })
}

#[test]
fn value_arrives_unchanged() {
    let (mut server, port) = bind();

    let mut sent = Map::new();
    sent.insert("x".to_string(), Value::from(1));
    sent.insert("y".to_string(), Value::from(vec![1, 2, 3]));
    let sent = Value::Map(sent);

    let to_send = sent.clone();
    let client = thread::spawn(move || {
        Client::new(ClientConfig::default().with_host(HOST).with_port(port)).send(&to_send)
    });

    let received = server.receive().unwrap();
    assert!(client.join().unwrap().unwrap() > 0);
    assert_eq!(received, sent);
    assert_eq!(server.state(), ServerState::Closed);
}

#[test]
fn payload_larger_than_one_chunk() {
    let config = ServerConfig::default()
        .with_host(HOST)
        .with_port(0)
        .with_chunk_size(7);
    let mut server = Server::bind(&config).unwrap();
    let port = server.local_addr().unwrap().port();

    let items: Vec<Value> = (0..500).map(|i| Value::from(format!("item-{i}"))).collect();
    let sent = Value::from(items);
    let to_send = sent.clone();
    let client = thread::spawn(move || interchange_transport::send_data(&to_send, HOST, port));

    assert_eq!(server.receive().unwrap(), sent);
    client.join().unwrap().unwrap();
}

#[test]
fn malformed_payload_is_a_parse_error() {
    let (mut server, port) = bind();
    let client = send_raw(port, b"{\"x\": ");

    let err = server.receive().unwrap_err();
    client.join().unwrap();
    assert!(err.is_parse());
    assert_eq!(server.state(), ServerState::Closed);
}

#[test]
fn empty_payload_is_a_parse_error() {
    let (mut server, port) = bind();
    let client = send_raw(port, b"");

    assert!(server.receive().unwrap_err().is_parse());
    client.join().unwrap();
}

#[test]
fn server_handles_one_connection_only() {
    let (mut server, port) = bind();
    let client = send_raw(port, b"true");

    assert_eq!(server.receive().unwrap(), Value::Bool(true));
    client.join().unwrap();

    assert!(matches!(server.receive(), Err(Error::Closed)));
    assert!(matches!(server.local_addr(), Err(Error::Closed)));
}

#[test]
fn binding_a_busy_port_fails() {
    let (_server, port) = bind();
    let err = Server::bind(&ServerConfig::default().with_host(HOST).with_port(port)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
