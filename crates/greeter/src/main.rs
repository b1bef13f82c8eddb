/* 📖 # Why does the binary take no arguments?

The greeter always greets the same name, so there is nothing to parse.
All the work happens in `greeter::run`, which writes to any `Write` and is tested in-process.
main only installs tracing and hands it a locked stdout.

Exit codes:
- 0: Success (greeting written)
- 1: Error (tracing setup failed or stdout could not be written)
*/

use std::io;
use std::process::ExitCode;

use greeter_base::tracing::{error, init_tracing};

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();
    match greeter::run(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}
