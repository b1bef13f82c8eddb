use std::io::Write;

use greeter_base::tracing::{debug, instrument};
use greeter_base::{GreeterError, GreeterResult, ResultExt};

/// Name greeted by the entry point.
pub const DEFAULT_NAME: &str = "World";

/// Formats `name` into the greeting `Hello, <name>!`.
///
/// The name is inserted verbatim, whatever it contains.
pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Writes the greeting for [`DEFAULT_NAME`] to `out`, terminated by a newline.
#[instrument(skip(out))]
pub fn run<W: Write>(out: &mut W) -> GreeterResult<()> {
    let greeting = hello(DEFAULT_NAME);
    debug!(%greeting, "writing greeting");
    write_line(out, &greeting).context("failed to write greeting")
}

fn write_line<W: Write>(out: &mut W, line: &str) -> GreeterResult<()> {
    writeln!(out, "{line}").map_err(|err| Box::new(GreeterError::output(err)))?;
    out.flush().map_err(|err| Box::new(GreeterError::output(err)))
}
