//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match pinpoint_cli::run() {
        Ok(()) => {}
        Err(pinpoint_cli::CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("pinpoint: {err}");
            std::process::exit(1);
        }
    }
}
