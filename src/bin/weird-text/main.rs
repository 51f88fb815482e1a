//! Command-line encoder/decoder for the Weird Text Format.

mod args;

use std::fs;

use anyhow::{Context, Result};
use tracing::debug;
use weird_text::{encode, encode_normalized, EncodedSequence};

use args::{Command, Input, Invocation, Options};

fn print_usage() {
    println!("Usage:");
    println!("  weird-text encode <text>            Encode text, print the encoded array");
    println!("  weird-text encode -f <file>         Encode the (trimmed) contents of a file");
    println!("  weird-text decode <encoded>         Decode an encoded array, print the text");
    println!("  weird-text decode -f <file>         Decode an encoded array read from a file");
    println!();
    println!("Options:");
    println!("  --format json|base64   Transport form of the encoded array (default: json)");
    println!("  --nfc                  Compose text to Unicode NFC before encoding");
    println!();
    println!("Examples:");
    println!("  weird-text encode \"tacocat\"");
    println!("  weird-text decode \"[267487694, 125043731]\"");
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Arg(text) => Ok(text.clone()),
        Input::File(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Error reading file {}", path.display()))?;
            Ok(content.trim().to_string())
        }
    }
}

/// Run one command, returning the line to print.
fn run(options: &Options) -> Result<String> {
    let input = read_input(&options.input)?;
    debug!(
        command = ?options.command,
        transport = %options.transport,
        nfc = options.nfc,
        len = input.len(),
        "read input"
    );

    match options.command {
        Command::Encode => {
            let words = if options.nfc {
                encode_normalized(&input)?
            } else {
                encode(&input)?
            };
            debug!(words = words.len(), "encoded");
            Ok(EncodedSequence::from(words).to_transport(options.transport)?)
        }
        Command::Decode => {
            let seq = EncodedSequence::from_transport(&input, options.transport)?;
            debug!(words = seq.len(), "decoding");
            Ok(seq.decode())
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match args::parse(std::env::args().skip(1))? {
        Invocation::Help => {
            print_usage();
            Ok(())
        }
        Invocation::Run(options) => {
            println!("{}", run(&options)?);
            Ok(())
        }
    }
}
