use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gist-stars")]
#[command(about = "Gist Stars Badge - Renders the stargazer count of a GitHub gist as a badge")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub token used for GraphQL requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// GitHub GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = "https://api.github.com/graphql", global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the stargazer count for a gist and print the badge JSON
    Badge {
        /// Gist identifier, e.g. 47a4d00457a92aa426dbd48a18776322
        gist_id: String,
    },
    /// Print the route, examples and documentation of the badge
    Describe,
}
