use clap::Parser;

/// Command line options for the LojixApp sales server.
#[derive(Debug, Parser)]
#[command(version, about = "LojixApp point-of-sale backend")]
pub struct Cli {
    /// Overrides the APP_ENVIRONMENT variable used to pick the config file.
    #[arg(long)]
    pub environment: Option<String>,

    /// Print the resolved configuration and exit.
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}
