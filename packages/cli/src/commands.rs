//! Subcommand parsing and execution.
//!
//! Commands:
//! - `serve` - Receive one value over TCP and print it as JSON
//! - `send <json>` - Send one JSON value over TCP
//! - `csv-to-json <csv>` - Convert a CSV file into `data.json`
//! - `show <file>` - Decode a JSON or XML file and print it as JSON
//! - `object write <file>` / `object read <file>` - Binary person records

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use interchange_codecs::{json, MultiCodec};
use interchange_core::{Codec, CustomObject, Error, Format};
use interchange_file_store::{FileStore, CSV_JSON_OUTPUT};
use interchange_transport::{send_data, start_server, DEFAULT_HOST, DEFAULT_PORT};

/// Where to listen or connect.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host name or address
    #[arg(long, env = "INTERCHANGE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// TCP port
    #[arg(long, env = "INTERCHANGE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Receive one JSON value and print it
    Serve {
        #[command(flatten)]
        endpoint: Endpoint,
    },

    /// Send one JSON value to a waiting server
    Send {
        /// JSON text to send
        json: String,

        #[command(flatten)]
        endpoint: Endpoint,
    },

    /// Convert a CSV file into data.json in the current directory
    CsvToJson {
        /// CSV file with a header row
        csv: PathBuf,
    },

    /// Decode a JSON or XML file and print it as JSON
    Show {
        file: PathBuf,

        /// Override the format guessed from the file extension
        #[arg(long, value_enum)]
        format: Option<ShowFormat>,
    },

    /// Write or read a binary person record
    #[command(subcommand)]
    Object(ObjectCommand),
}

#[derive(Subcommand, Debug)]
pub enum ObjectCommand {
    /// Write a person record
    Write {
        file: PathBuf,

        #[arg(long)]
        name: String,

        #[arg(long)]
        age: i64,

        #[arg(long)]
        student: bool,
    },

    /// Read a person record and display it
    Read { file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowFormat {
    Json,
    Xml,
}

impl From<ShowFormat> for Format {
    fn from(format: ShowFormat) -> Format {
        match format {
            ShowFormat::Json => Format::JSON,
            ShowFormat::Xml => Format::XML,
        }
    }
}

/// Result of executing a command
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command ran but had nothing to work on
    Failed(String),
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Execute a command against files under `store`.
pub fn execute(command: Command, store: &FileStore) -> Result<CommandResult, Error> {
    match command {
        Command::Serve { endpoint } => {
            tracing::info!(host = %endpoint.host, port = endpoint.port, "waiting for one value");
            let value = start_server(&endpoint.host, endpoint.port)?;
            Ok(CommandResult::ok_display(json::encode(&value)?))
        }
        Command::Send { json: text, endpoint } => {
            let value = json::decode(&text)?;
            send_data(&value, &endpoint.host, endpoint.port)?;
            tracing::info!(host = %endpoint.host, port = endpoint.port, "value sent");
            Ok(CommandResult::ok_none())
        }
        Command::CsvToJson { csv } => {
            if store.convert_csv_to_json(&csv)? {
                let output = store.resolve(CSV_JSON_OUTPUT);
                Ok(CommandResult::ok_display(format!(
                    "Wrote {}",
                    output.display()
                )))
            } else {
                Ok(CommandResult::Failed(format!(
                    "Cannot open {}",
                    csv.display()
                )))
            }
        }
        Command::Show { file, format } => {
            let format = match format.map(Format::from).or_else(|| Format::from_path(&file)) {
                Some(format) => format,
                None => {
                    return Ok(CommandResult::Failed(format!(
                        "Cannot tell the format of {}; pass --format",
                        file.display()
                    )))
                }
            };
            let payload = store.read_bytes(&file)?;
            let value = MultiCodec::with_defaults().decode(&payload, &format)?;
            Ok(CommandResult::ok_display(json::encode(&value)?))
        }
        Command::Object(ObjectCommand::Write {
            file,
            name,
            age,
            student,
        }) => {
            store.serialize_object(&CustomObject::new(name, age, student), &file)?;
            tracing::debug!(file = %file.display(), "object written");
            Ok(CommandResult::ok_none())
        }
        Command::Object(ObjectCommand::Read { file }) => {
            match store.deserialize_object::<CustomObject>(&file) {
                Some(obj) => Ok(CommandResult::ok_display(obj.to_string())),
                None => Ok(CommandResult::Failed(format!(
                    "No object available in {}",
                    file.display()
                ))),
            }
        }
    }
}
