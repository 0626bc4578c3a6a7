use clap::Parser;

use interchange_cli::{execute, logging, Command, CommandResult};
use interchange_file_store::FileStore;

/// Interchange - move values between JSON, XML, CSV, binary files and TCP
#[derive(Parser, Debug)]
#[command(name = "interchange")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();
    logging::init();

    let result = FileStore::current_dir().and_then(|store| execute(args.command, &store));

    match result {
        Ok(CommandResult::Ok { display }) => {
            if let Some(text) = display {
                println!("{}", text);
            }
        }
        Ok(CommandResult::Failed(message)) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
