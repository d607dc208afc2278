//! CLI definitions for managing the local network.

use clap::{ArgAction, Parser, Subcommand};
use localnet_config::{
    NetworkEndpoints,
    constants::{DEFAULT_ACCOUNTS_PER_KIND, DEFAULT_HOST},
};

/// Manage the local consensus + mirror node network.
#[derive(Parser, Debug)]
#[command(
    name = "localnet",
    about = "Manage the local consensus and mirror node network",
    disable_help_flag = true
)]
pub struct LocalnetCli {
    /// Print help.
    #[arg(long, action = ArgAction::Help, global = true)]
    help: Option<bool>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the local network.
    Start {
        /// Generated accounts of each key kind.
        #[arg(default_value_t = DEFAULT_ACCOUNTS_PER_KIND)]
        accounts: u32,
        /// Run the network in detached mode.
        #[arg(short, long)]
        detached: bool,
        /// Host the network is reachable on.
        #[arg(short = 'h', long, default_value = DEFAULT_HOST)]
        host: String,
    },
    /// Stop the local network and delete all existing data.
    Stop,
    /// Restart the local network.
    Restart {
        /// Generated accounts of each key kind.
        #[arg(default_value_t = DEFAULT_ACCOUNTS_PER_KIND)]
        accounts: u32,
        /// Run the network in detached mode.
        #[arg(short, long)]
        detached: bool,
        /// Host override; empty falls back to the loopback default.
        #[arg(short = 'h', long, default_value = "")]
        host: String,
    },
    /// Generate accounts against a running network.
    GenerateAccounts {
        /// Number of accounts of each key kind.
        #[arg(default_value_t = DEFAULT_ACCOUNTS_PER_KIND)]
        n: u32,
        /// Host override; empty falls back to the loopback default.
        #[arg(short = 'h', long, default_value = "")]
        host: String,
    },
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Static help text describing the fixed network endpoints.
#[must_use]
pub fn network_help_text() -> String {
    let endpoints = NetworkEndpoints::default();
    format!(
        "\
Local network runner - consensus and mirror nodes on localhost:
  - consensus node url - {consensus}
  - node id - {node_id}
  - mirror node url - {mirror}

Available commands:
    start - Starts the local network.
      options:
        --detached or -d to start in detached mode.
        --host or -h to override the default host.
    stop - Stops the local network and deletes all existing data.
    restart - Restarts the local network.
    generate-accounts <n> - Generates N accounts per key kind, default {accounts}.
      options:
        --host or -h to override the default host.",
        consensus = endpoints.consensus_grpc(),
        node_id = endpoints.node_id(),
        mirror = endpoints.mirror_api_base(),
        accounts = DEFAULT_ACCOUNTS_PER_KIND,
    )
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::{Command, LocalnetCli, network_help_text};

    fn parse(args: &[&str]) -> LocalnetCli {
        LocalnetCli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn start_uses_documented_defaults() {
        let Some(Command::Start {
            accounts,
            detached,
            host,
        }) = parse(&["localnet", "start"]).command
        else {
            panic!("expected start");
        };
        assert_eq!(accounts, 10);
        assert!(!detached);
        assert_eq!(host, "127.0.0.1");
    }

    #[test]
    fn start_accepts_count_and_short_flags() {
        let Some(Command::Start {
            accounts,
            detached,
            host,
        }) = parse(&["localnet", "start", "25", "-d", "-h", "0.0.0.0"]).command
        else {
            panic!("expected start");
        };
        assert_eq!(accounts, 25);
        assert!(detached);
        assert_eq!(host, "0.0.0.0");
    }

    #[test]
    fn start_accepts_long_flags() {
        let Some(Command::Start { detached, host, .. }) =
            parse(&["localnet", "start", "--detached", "--host", "192.168.0.7"]).command
        else {
            panic!("expected start");
        };
        assert!(detached);
        assert_eq!(host, "192.168.0.7");
    }

    #[test]
    fn restart_host_defaults_to_empty() {
        let Some(Command::Restart { host, .. }) = parse(&["localnet", "restart"]).command else {
            panic!("expected restart");
        };
        assert!(host.is_empty());
    }

    #[test]
    fn generate_accounts_takes_a_positional_count() {
        let Some(Command::GenerateAccounts { n, .. }) =
            parse(&["localnet", "generate-accounts", "5"]).command
        else {
            panic!("expected generate-accounts");
        };
        assert_eq!(n, 5);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(LocalnetCli::try_parse_from(["localnet", "start", "lots"]).is_err());
    }

    #[test]
    fn unknown_command_falls_through_to_external() {
        let Some(Command::External(args)) = parse(&["localnet", "bogus"]).command else {
            panic!("expected external command");
        };
        assert_eq!(args[0], "bogus");
    }

    #[test]
    fn help_text_names_the_fixed_endpoints() {
        let text = network_help_text();
        assert!(text.contains("127.0.0.1:50211"));
        assert!(text.contains("0.0.3"));
        assert!(text.contains("http://127.0.0.1:5551"));
    }
}
