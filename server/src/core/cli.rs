use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{ENV_AUTH_SECRET, ENV_CONFIG, ENV_HOST, ENV_PORT};

#[derive(Parser)]
#[command(name = "codefun")]
#[command(version, about = "CodeFun - store and review coding exercises", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Disable authentication (for development)
    #[arg(long, global = true)]
    pub no_auth: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Secret used to verify identity-provider session tokens
    #[arg(long, global = true, env = ENV_AUTH_SECRET, hide_env_values = true)]
    pub auth_secret: Option<String>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// System maintenance commands
    System {
        #[command(subcommand)]
        command: SystemCommands,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum SystemCommands {
    /// Bulk-load challenges from a JSON file
    Seed {
        /// Path to a JSON array of challenges
        #[arg(short, long)]
        file: PathBuf,
        /// Subject recorded as the creator of the seeded challenges
        #[arg(long, default_value = "seed")]
        created_by: String,
    },
    /// Mint a signed development session token
    Token {
        /// Subject (identity) to embed in the token
        #[arg(short, long)]
        subject: String,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_auth: bool,
    pub config: Option<PathBuf>,
    pub auth_secret: Option<String>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        host: cli.host,
        port: cli.port,
        no_auth: cli.no_auth,
        config: cli.config,
        auth_secret: cli.auth_secret,
    };
    (config, cli.command)
}
