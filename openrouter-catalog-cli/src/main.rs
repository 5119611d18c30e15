mod check;
mod config;
mod listing;

use clap::{Parser, Subcommand};
use config::ConnectionArgs;
use openrouter_catalog::DEFAULT_PROVIDER_LIMIT;

#[derive(Parser)]
#[command(name = "openrouter-catalog", version, about = "Browse the OpenRouter model catalog")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every model in the catalog
    List {
        /// Mark tool-capable models
        #[arg(long)]
        tools: bool,

        /// Print display records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the most popular models of one provider
    Top {
        /// Provider prefix (e.g. openai, anthropic, google)
        provider: String,

        /// Maximum number of models
        #[arg(short, long, default_value_t = DEFAULT_PROVIDER_LIMIT)]
        limit: usize,

        /// Mark tool-capable models
        #[arg(long)]
        tools: bool,

        /// Print display records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the attribution headers for the configured site
    Headers,

    /// Verify the API key and endpoint by fetching the catalog
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openrouter_catalog=info,openrouter_catalog_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let connection = cli.connection;

    match cli.command {
        Commands::List { tools, json } => {
            let client = connection.build_client()?;
            listing::run_list(&client, tools, json).await?;
        }
        Commands::Top {
            provider,
            limit,
            tools,
            json,
        } => {
            let client = connection.build_client()?;
            listing::run_top(&client, &provider, limit, tools, json).await?;
        }
        // Attribution headers are local configuration; no API key needed.
        Commands::Headers => {
            listing::print_headers(&connection.attribution_client());
        }
        Commands::Check => {
            let client = connection.build_client()?;
            check::run_check(&client).await?;
        }
    }

    Ok(())
}
