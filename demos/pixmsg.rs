// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Command-line front end: hide a message in a PNG, read it back, or report
//! how much an image can hold.
//!
//! ```text
//! pixmsg embed   -i cover.png -o out.png -m "meet at noon" [--framing sentinel]
//! pixmsg extract -i out.png [--framing sentinel]
//! pixmsg capacity -i cover.png
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pixmsg_core::{decode_png, encode_png, png_capacity, Framing, Message, StegoError};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FramingArg {
    /// 4-byte length header, then the message.
    Prefixed,
    /// Message followed by a zero byte.
    Sentinel,
}

impl From<FramingArg> for Framing {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::Prefixed => Framing::LengthPrefixed,
            FramingArg::Sentinel => Framing::Sentinel,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pixmsg", version, about = "Hide text in PNG images")]
struct Cli {
    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in a PNG image.
    Embed {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long)]
        message: String,
        #[arg(long, value_enum, default_value = "prefixed")]
        framing: FramingArg,
        /// Truncate characters above U+00FF instead of rejecting them.
        #[arg(long)]
        lossy: bool,
    },
    /// Print the message hidden in a PNG image.
    Extract {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "prefixed")]
        framing: FramingArg,
        /// Also print the strategy and plausibility score.
        #[arg(long)]
        verbose: bool,
    },
    /// Print the maximum message length for both framings.
    Capacity {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level.as_filter())
        .with_target(false)
        .try_init();
}

fn read_input(path: &PathBuf) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Embed {
            input,
            output,
            message,
            framing,
            lossy,
        } => {
            if message.is_empty() {
                return Err("please provide a message".into());
            }
            let msg = if lossy {
                Message::from_text_lossy(&message)
            } else {
                Message::from_text(&message).map_err(|e| e.to_string())?
            };
            let cover = read_input(&input)?;
            let stego = encode_png(&cover, &msg, framing.into()).map_err(|e| match e {
                StegoError::MessageTooLong { capacity, .. } => {
                    format!("message is too long for this image; maximum length: {capacity} characters")
                }
                other => other.to_string(),
            })?;
            fs::write(&output, stego).map_err(|e| format!("cannot write {}: {e}", output.display()))?;
            tracing::info!(output = %output.display(), len = msg.len(), "embedded message");
            println!("Message hidden in {}", output.display());
            Ok(())
        }
        Command::Extract { input, framing, verbose } => {
            let stego = read_input(&input)?;
            let found = decode_png(&stego, framing.into()).map_err(|e| e.to_string())?;
            println!("{}", found.display_text());
            if verbose {
                if let Some(d) = found.decoded() {
                    eprintln!("strategy: {:?}, score: {}, readable: {}", d.strategy, d.score, d.is_readable());
                }
            }
            Ok(())
        }
        Command::Capacity { input } => {
            let cover = read_input(&input)?;
            for framing in [Framing::LengthPrefixed, Framing::Sentinel] {
                let cap = png_capacity(&cover, framing).map_err(|e| e.to_string())?;
                println!("{framing}: {cap} characters");
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
