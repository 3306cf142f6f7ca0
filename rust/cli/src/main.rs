use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    boardrank_cli::logging::init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = boardrank_cli::run(std::env::args(), &mut out, &mut err);
    ExitCode::from(u8::try_from(code).unwrap_or(2))
}
