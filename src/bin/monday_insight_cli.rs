use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use monday_insight::monday::MondayClient;
use monday_insight::types::{
    ApiEndpoint, BoardId, ColumnId, ColumnValue, ColumnValues, DEFAULT_API_URL, ItemId,
    QueryVariables,
};

#[derive(Parser)]
#[command(name = "monday-insight-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Monday.com CLI - run GraphQL queries and update item column values from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Monday.com API token (can also be set via MONDAY_INSIGHT_API_KEY environment variable)
    #[arg(long, global = true)]
    api_key: Option<String>,
    /// Monday.com GraphQL endpoint (can also be set via MONDAY_INSIGHT_API_URL, default: https://api.monday.com/v2)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Request timeout in seconds for Monday.com API calls (default: no timeout)
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute an arbitrary GraphQL query or mutation and print the JSON response
    Query {
        /// GraphQL query text (e.g., "query { boards (limit: 5) { id name } }")
        query: String,
        /// Query variables as a JSON object (e.g., '{"board_id": 123}')
        #[arg(long)]
        variables: Option<String>,
    },
    /// Update column values of a single item with change_multiple_column_values
    UpdateItem {
        /// Item id to update
        item_id: String,
        /// Board id containing the item
        #[arg(allow_negative_numbers = true)]
        board_id: i64,
        /// Column values as a JSON object keyed by column id (e.g., '{"status": {"text": "Done"}}')
        #[arg(long)]
        column_values: Option<String>,
        /// Text value for one column as COLUMN_ID=TEXT - an empty TEXT clears the column (repeatable)
        #[arg(long = "text", value_name = "COLUMN_ID=TEXT")]
        texts: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("monday_insight=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .or_else(|| env::var("MONDAY_INSIGHT_API_KEY").ok())
        .context("Monday.com API key is required (--api-key or MONDAY_INSIGHT_API_KEY)")?;
    let api_url = cli
        .api_url
        .or_else(|| env::var("MONDAY_INSIGHT_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let endpoint = ApiEndpoint::new(api_key, api_url);

    let client = MondayClient::new(cli.request_timeout.map(Duration::from_secs))?;

    match cli.command {
        Commands::Query { query, variables } => {
            let variables = variables
                .as_deref()
                .map(parse_json_object)
                .transpose()
                .context("Invalid --variables")?;

            let result = client
                .execute_query(&endpoint, &query, variables)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to execute query: {}", e))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::UpdateItem {
            item_id,
            board_id,
            column_values,
            texts,
        } => {
            let column_values = build_column_values(column_values.as_deref(), &texts)?;
            if column_values.is_empty() {
                anyhow::bail!("No column values given; use --column-values or --text");
            }

            let item_id = ItemId::from(item_id);
            let board_id = BoardId::new(board_id);
            if client
                .update_item(&endpoint, item_id.clone(), board_id, &column_values)
                .await
            {
                println!(
                    "Successfully updated item '{}' on board '{}'",
                    item_id, board_id
                );
            } else {
                anyhow::bail!("Failed to update item '{}' on board '{}'", item_id, board_id);
            }
        }
    }

    Ok(())
}

fn parse_json_object(raw: &str) -> Result<QueryVariables> {
    match serde_json::from_str(raw).context("Not valid JSON")? {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("Expected a JSON object"),
    }
}

/// Merge `--column-values` with `--text` pairs; `--text` wins on duplicate column ids
fn build_column_values(json: Option<&str>, texts: &[String]) -> Result<ColumnValues> {
    let mut column_values = ColumnValues::new();

    if let Some(json) = json {
        let map = parse_json_object(json).context("Invalid --column-values")?;
        for (column_id, value) in map {
            column_values.insert(ColumnId::from(column_id), ColumnValue::from(value));
        }
    }

    for pair in texts {
        let (column_id, text) = pair
            .split_once('=')
            .with_context(|| format!("Invalid --text '{}', expected COLUMN_ID=TEXT", pair))?;
        column_values.insert(ColumnId::from(column_id), ColumnValue::text_envelope(text));
    }

    Ok(column_values)
}
