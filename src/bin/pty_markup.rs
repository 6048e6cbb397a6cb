//! PTY Markup Runner
//!
//! Reads captured terminal output from stdin or a file, in read-sized
//! chunks the way a PTY read loop delivers it, and writes it through the
//! configured sink.
//!
//! ```bash
//! # Convert a recorded build log to markup lines
//! pty-markup --input build.raw --output build.markup
//!
//! # Pass bytes through unchanged
//! some-command | pty-markup --passthrough
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pty_markup::{sink_for, Config, OutputMode, OutputSink};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pty-markup")]
#[command(version)]
#[command(about = "Convert pseudo-terminal output into log markup lines", long_about = None)]
struct Args {
    /// Input file (stdin if not specified)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write bytes unchanged instead of converting to markup
    #[arg(short, long)]
    passthrough: bool,

    /// Config file (defaults to ~/.config/pty-markup/config.json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bytes per read
    #[arg(long, value_name = "BYTES")]
    read_size: Option<usize>,
}

impl Args {
    /// Resolve the effective configuration: file, then flags
    fn config(&self) -> pty_markup::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(),
        };
        if self.passthrough {
            config.mode = OutputMode::Passthrough;
        }
        if let Some(read_size) = self.read_size {
            config.read_size = read_size;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> pty_markup::Result<()> {
    let config = args.config()?;
    info!("Running in {:?} mode", config.mode);

    let mut input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    let mut sink = sink_for(config.mode, output);
    pump(&mut input, sink.as_mut(), config.read_size)
}

/// Feed `input` to `sink` in chunks of at most `read_size` bytes until EOF
fn pump(
    input: &mut dyn Read,
    sink: &mut dyn OutputSink,
    read_size: usize,
) -> pty_markup::Result<()> {
    let mut buf = vec![0u8; read_size];
    let mut total = 0usize;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        total += n;
        sink.write_chunk(&buf[..n])?;
    }

    info!("End of stream after {} bytes", total);
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pty_markup::MarkupSink;

    #[test]
    fn test_pump_small_reads() {
        let raw = b"\x1b[1mCompiling\x1b[0m foo\r\n[=>  ] 10%\r[===>] 100%\ndone";
        let mut input: &[u8] = raw;
        let mut sink = MarkupSink::new(Vec::new());

        // 3-byte reads keep the CR LF pair inside one chunk
        pump(&mut input, &mut sink, 3).unwrap();

        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "[bold]Compiling[/] foo\n\\[===>\\] 100%\ndone\n"
        );
    }

    #[test]
    fn test_args_passthrough_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"mode": "markup", "read_size": 16}"#).unwrap();

        let args = Args::parse_from([
            "pty-markup",
            "--passthrough",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = args.config().unwrap();
        assert_eq!(config.mode, OutputMode::Passthrough);
        assert_eq!(config.read_size, 16);
    }

    #[test]
    fn test_args_zero_read_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let args = Args::parse_from([
            "pty-markup",
            "--read-size",
            "0",
            "--config",
            path.to_str().unwrap(),
        ]);
        assert!(args.config().is_err());
    }
}
