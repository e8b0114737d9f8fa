//! uppercaser: uppercase a UTF-8 text file or stdin to stdout

use std::process::ExitCode;

use wholestream::Transform;
use wholestream::command;

fn main() -> ExitCode {
    command::main(env!("CARGO_BIN_NAME"), Transform::uppercase())
}
