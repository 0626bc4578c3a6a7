//! # interchange-cli
//!
//! Command-line front end for the interchange crates.
//!
//! ## Usage
//!
//! ```bash
//! # Wait for one value on localhost:12345 and print it
//! interchange serve
//!
//! # From another shell
//! interchange send '{"x": 1, "y": [1, 2, 3]}'
//!
//! # Files
//! interchange csv-to-json people.csv
//! interchange show data.json
//! interchange object write person.bin --name Alice --age 30 --student
//! interchange object read person.bin
//! ```
//!
//! Set `RUST_LOG=debug` to see what the libraries are doing.

pub mod commands;
pub mod logging;

pub use commands::{execute, Command, CommandResult};
