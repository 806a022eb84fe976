// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option can also come from an environment variable (the `env`
// attribute), which is how the server is configured when deployed.
// =============================================================================

use clap::{Parser, Subcommand};
use std::net::IpAddr;

#[derive(Parser, Debug)]
#[command(
    name = "maps2waze",
    version,
    about = "Turn Google Maps links into Waze navigation links",
    long_about = "maps2waze finds the Google Maps link in a piece of text, works out the \
                  coordinate it points to (following shortened links if needed) and prints \
                  the matching Waze navigation link."
)]
pub struct Cli {
    /// Log debug details of each conversion step
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "MAPS2WAZE_LOG_JSON")]
    pub log_json: bool,

    /// Timeout in seconds for fetching a shortened link, redirects included
    #[arg(long, global = true, env = "MAPS2WAZE_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert text containing a Google Maps link
    ///
    /// Example: maps2waze convert "meet here https://maps.app.goo.gl/abc123"
    Convert {
        /// Texts to convert; one line per text is read from stdin when omitted
        texts: Vec<String>,

        /// Output results in JSON format instead of one link per line
        #[arg(long)]
        json: bool,
    },

    /// Serve the converter over HTTP
    ///
    /// Example: maps2waze serve --port 8080
    Serve {
        /// Address to bind
        #[arg(long, env = "MAPS2WAZE_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args() {
        let cli = Cli::parse_from(["maps2waze", "convert", "a", "b", "--json"]);
        match cli.command {
            Commands::Convert { texts, json } => {
                assert_eq!(texts, vec!["a", "b"]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.timeout_secs, 15);
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from(["maps2waze", "serve", "--port", "9000", "--timeout-secs", "5"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.to_string(), "0.0.0.0");
                assert_eq!(port, 9000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.timeout_secs, 5);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
