//! The read → transform → write command shared by every binary.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};
use log::debug;

use crate::error::{Error, Stream};
use crate::source::InputSource;
use crate::transform::Transform;

// Shared by all transform binaries; `about` is set per transform.
#[derive(Debug, Parser)]
pub struct Cli {
    /// File to read instead of standard input ("-" also reads standard input)
    pub file: Option<PathBuf>,
}

/// Parse `args` (including the program name) for a binary bound to `transform`.
pub fn parse_args<I, T>(
    name: &'static str,
    transform: Transform,
    args: I,
) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command()
        .name(name)
        .about(transform.about())
        .try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Run one whole-stream pass against explicit streams.
///
/// Returns the number of bytes written. Nothing is written unless the read
/// and the transform both succeed.
pub fn run_with<R, W>(
    source: &InputSource,
    stdin: R,
    transform: Transform,
    mut stdout: W,
) -> Result<usize, Error>
where
    R: Read,
    W: Write,
{
    debug!(
        "{}: reading {} ({:?} mode)",
        transform.name(),
        source.stream(),
        transform.mode()
    );
    let input = source.read_from(stdin, transform.mode())?;
    let output = transform.apply(input)?;

    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .map_err(|source| Error::Write {
            stream: Stream::Stdout,
            source,
        })?;
    debug!("{}: wrote {} bytes to {}", transform.name(), output.len(), Stream::Stdout);
    Ok(output.len())
}

/// Run against the process's standard streams.
pub fn run(cli: Cli, transform: Transform) -> Result<usize, Error> {
    let source = InputSource::from_arg(cli.file);
    run_with(&source, io::stdin().lock(), transform, io::stdout().lock())
}

/// Binary entry point: parse arguments, run, map the outcome to an exit code.
pub fn main(name: &'static str, transform: Transform) -> ExitCode {
    env_logger::init();

    let cli = match parse_args(name, transform, std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    match run(cli, transform) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{name}: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
