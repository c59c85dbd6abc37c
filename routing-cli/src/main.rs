//! Entry point for the `routing` command-line tool.
#![forbid(unsafe_code)]

use routing_cli::CliError;

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    match routing_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report_and_exit(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report_and_exit(err: &CliError) -> ! {
    eprintln!("routing: {err}");
    std::process::exit(1);
}
