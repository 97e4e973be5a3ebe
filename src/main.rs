//! ssl-expiry - certificate expiry monitoring check
//!
//! Prints one result line on stdout and exits with the monitoring plugin
//! convention: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.

use clap::Parser;
use ssl_expiry::config::Settings;
use ssl_expiry::models::{CheckResult, ServiceState};
use ssl_expiry::{output, runner, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures; usage errors are UNKNOWN
            let code = if e.use_stderr() {
                ServiceState::Unknown.exit_code()
            } else {
                0
            };
            std::process::exit(code);
        }
    };

    // Initialize logging; stdout is reserved for the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(&cli);
    println!("{}", output::render(&result, cli.format));
    std::process::exit(result.exit_code());
}

fn run(cli: &Cli) -> CheckResult {
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => return CheckResult::unknown(e.to_string()),
    };

    let settings = match cli.timeout {
        Some(secs) => settings.with_timeout(secs),
        None => settings,
    };

    runner::run(&cli.options(), &settings)
}
