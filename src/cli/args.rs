//! CLI argument definitions using clap

use crate::config::CheckOptions;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssl-expiry")]
#[command(author = "Russ McKendrick")]
#[command(version)]
#[command(about = "Check how long an SSL/TLS certificate has left before it expires", long_about = None)]
#[command(after_help = "EXAMPLES:\n\
                  \n  ssl-expiry --critical 7 --warning 30 --host example.com --port 443\
                  \n  ssl-expiry --critical 7 --warning 30 --pem /etc/ssl/certs/site.pem\
                  \n  ssl-expiry --critical 7 --warning 30 --cert bundle.p12 --pass secret\
                  \n  ssl-expiry --critical 24 --warning 72 --hours --host 10.0.0.5 --port 8443 --servername api.example.com")]
pub struct Cli {
    /// Critical if less than TIME is left (days, or hours with --hours)
    #[arg(short, long, value_name = "TIME", allow_negative_numbers = true)]
    pub critical: i64,

    /// Warning if less than TIME is left (days, or hours with --hours)
    #[arg(short, long, value_name = "TIME", allow_negative_numbers = true)]
    pub warning: i64,

    /// PEM certificate file to check
    #[arg(long, value_name = "PATH")]
    pub pem: Option<PathBuf>,

    /// PKCS#12 archive to check (requires --pass)
    #[arg(long = "cert", value_name = "PATH")]
    pub pkcs12: Option<PathBuf>,

    /// Passphrase of the PKCS#12 archive
    #[arg(long = "pass", value_name = "PHRASE")]
    pub pkcs12_pass: Option<String>,

    /// Host to connect to
    #[arg(short = 'H', long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to connect to
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Server name sent as SNI (default: the host)
    #[arg(short, long, value_name = "NAME")]
    pub servername: Option<String>,

    /// Use hours instead of days for thresholds and output
    #[arg(long)]
    pub hours: bool,

    /// Connect and handshake timeout in seconds (default: 10)
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The check options carried by these arguments
    pub fn options(&self) -> CheckOptions {
        CheckOptions::from(self)
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

impl From<&Cli> for CheckOptions {
    fn from(cli: &Cli) -> Self {
        CheckOptions {
            critical: cli.critical,
            warning: cli.warning,
            pem: cli.pem.clone(),
            pkcs12: cli.pkcs12.clone(),
            pkcs12_pass: cli.pkcs12_pass.clone(),
            host: cli.host.clone(),
            port: cli.port,
            servername: cli.servername.clone(),
            hours: cli.hours,
        }
    }
}
