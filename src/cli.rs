use crate::utils;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "rustpermute",
    about = "Fast subdomain permutation generator",
    long_about = "RustPermute generates candidate subdomains from seed hosts and a wordlist.\nThe output is meant to be fed to a resolver or prober; nothing is resolved here.",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ", built ", env!("BUILD_TIME"), ")"),
    disable_help_flag = true
)]
pub struct Args {
    /// Host to generate permutations for
    #[arg(short = 'h', long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// File containing hosts to generate permutations for
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Wordlist to generate permutations with [default: words.txt]
    #[arg(short = 'w', long = "wordlist", value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// File to append permutations to (stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Strategies to run (comma-separated)
    #[arg(short = 's', long = "strategies", value_delimiter = ',')]
    pub strategies: Option<Vec<String>>,

    /// List all available strategies
    #[arg(long = "list-strategies")]
    pub list_strategies: bool,

    /// Output JSON lines instead of plain hostnames
    #[arg(long = "json")]
    pub json: bool,

    /// Silent mode (only output permutations and errors)
    #[arg(long = "silent")]
    pub silent: bool,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// Whether any host source was supplied: a flag or piped stdin.
    pub fn has_host_source(&self) -> bool {
        self.host.is_some() || self.list.is_some() || self.use_stdin()
    }

    /// Check if we should read hosts from stdin
    pub fn use_stdin(&self) -> bool {
        utils::stdin_is_piped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_h_is_host() {
        let args = Args::try_parse_from(["rustpermute", "-h", "foo.example.com"]).unwrap();
        assert_eq!(args.host.as_deref(), Some("foo.example.com"));
        assert!(args.wordlist.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "rustpermute",
            "-l",
            "hosts.txt",
            "-w",
            "words.txt",
            "-o",
            "out.txt",
            "-s",
            "dash,expand",
            "--json",
            "--silent",
        ])
        .unwrap();
        assert_eq!(args.list, Some(PathBuf::from("hosts.txt")));
        assert_eq!(args.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(
            args.strategies,
            Some(vec!["dash".to_string(), "expand".to_string()])
        );
        assert!(args.json && args.silent);
    }

    #[test]
    fn test_long_help_is_available() {
        let err = Args::try_parse_from(["rustpermute", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
