//! Command-line argument parsing.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use weird_text::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Encode,
    Decode,
}

impl Command {
    fn input_name(self) -> &'static str {
        match self {
            Command::Encode => "text",
            Command::Decode => "encoded array",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Input given directly on the command line.
    Arg(String),
    /// Input read from a file, trimmed of surrounding whitespace.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub input: Input,
    pub transport: Transport,
    /// Compose the text to NFC before encoding.
    pub nfc: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(Options),
}

pub fn parse<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut file = None;
    let mut transport = Transport::default();
    let mut nfc = false;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-f" => {
                i += 1;
                let name = args
                    .get(i)
                    .context("No filename provided for -f option")?;
                file = Some(PathBuf::from(name));
            }
            "--format" => {
                i += 1;
                transport = args
                    .get(i)
                    .context("--format requires a value")?
                    .parse()
                    .context("--format must be \"json\" or \"base64\"")?;
            }
            "--nfc" => nfc = true,
            other => positional.push(other),
        }
        i += 1;
    }

    let command = match positional.first() {
        Some(&"encode") => Command::Encode,
        Some(&"decode") => Command::Decode,
        Some(&"help") | Some(&"--help") | Some(&"-h") => return Ok(Invocation::Help),
        _ => bail!("Command must be either \"encode\" or \"decode\""),
    };

    let input = match (file, &positional[1..]) {
        (Some(path), []) => Input::File(path),
        (None, [text]) => Input::Arg(text.to_string()),
        (None, []) => bail!("No {} provided", command.input_name()),
        (_, extra) => bail!("Unexpected argument: {}", extra.join(" ")),
    };

    Ok(Invocation::Run(Options {
        command,
        input,
        transport,
        nfc,
    }))
}
