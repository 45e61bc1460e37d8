use crate::monday::error::MondayApiError;
use crate::monday::graphql::error::summarize_graphql_errors;
use crate::monday::graphql::graphql_types::{
    GraphQLError, GraphQLPayload, GraphQLQuery, changed_item_id,
};
use crate::monday::graphql::item::{
    ChangeMultipleColumnValuesVariable, change_multiple_column_values_mutation,
    normalize_serialized_column_values,
};
use crate::types::{ApiEndpoint, BoardId, ColumnValues, ItemId, QueryVariables};

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

/// Upper bound on the connect phase when the caller sets a request timeout
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

pub trait GraphQLExecutor {
    #[allow(async_fn_in_trait)]
    async fn execute_graphql<T: Serialize>(
        &self,
        endpoint: &ApiEndpoint,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> std::result::Result<Value, MondayApiError>;
}

/// Monday.com GraphQL client.
///
/// Holds only the HTTP connection pool; the endpoint and API key are passed
/// on every call.
#[derive(Clone)]
pub struct MondayClient {
    pub(crate) client: reqwest::Client,
}

impl MondayClient {
    /// Creates a client. Without a `timeout` requests use reqwest's defaults.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder
                .timeout(timeout)
                .connect_timeout(std::cmp::min(timeout, MAX_CONNECT_TIMEOUT));
        }

        let client = builder
            .build()
            .context("Failed to build Monday.com HTTP client")?;

        Ok(Self { client })
    }

    /// Executes an arbitrary GraphQL query or mutation.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - API URL and API key to send the request with
    /// * `query` - GraphQL query or mutation text
    /// * `variables` - Optional variables; omitted from the request body when empty
    ///
    /// # Returns
    ///
    /// The decoded response body as-is. GraphQL-level `errors` are not
    /// inspected; callers check the returned value themselves.
    ///
    /// # Errors
    ///
    /// - `MondayApiError::Transport` when the request cannot be sent or the
    ///   API answers with a non-2xx status
    /// - `MondayApiError::Decode` when the response body is not valid JSON
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monday_insight::monday::MondayClient;
    /// use monday_insight::types::{ApiEndpoint, DEFAULT_API_URL};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = MondayClient::new(None)?;
    /// let endpoint = ApiEndpoint::new("api-key", DEFAULT_API_URL);
    ///
    /// let boards = client
    ///     .execute_query(&endpoint, "query { boards (limit: 5) { id name } }", None)
    ///     .await?;
    /// println!("{}", boards);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute_query(
        &self,
        endpoint: &ApiEndpoint,
        query: &str,
        variables: Option<QueryVariables>,
    ) -> std::result::Result<Value, MondayApiError> {
        let variables = variables.filter(|v| !v.is_empty());
        let payload = GraphQLPayload::new(GraphQLQuery(query.to_string()), variables);

        self.execute_graphql(endpoint, "query", payload).await
    }

    /// Updates several column values of one item with
    /// `change_multiple_column_values`.
    ///
    /// `{"text": ...}` envelopes in `column_values` are unwrapped to their
    /// bare text before sending, and `{"text": ""}` clears the column.
    ///
    /// Returns `true` only when the API reports the updated item's id. Every
    /// failure (encoding, transport, unexpected response) is logged and
    /// reported as `false`; this method never returns an error.
    pub async fn update_item(
        &self,
        endpoint: &ApiEndpoint,
        item_id: impl Into<ItemId>,
        board_id: impl Into<BoardId>,
        column_values: &ColumnValues,
    ) -> bool {
        let item_id = item_id.into();
        let board_id = board_id.into();

        match self
            .try_update_item(endpoint, &item_id, board_id, column_values)
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                error!(
                    "Error updating Monday.com item {} on board {}: {:#}",
                    item_id, board_id, e
                );
                false
            }
        }
    }

    async fn try_update_item(
        &self,
        endpoint: &ApiEndpoint,
        item_id: &ItemId,
        board_id: BoardId,
        column_values: &ColumnValues,
    ) -> Result<bool> {
        let mutation = change_multiple_column_values_mutation();
        debug!("Mutation: {}", mutation);

        let mut variables = ChangeMultipleColumnValuesVariable::new(item_id, board_id, column_values)
            .context("Failed to encode column values")?;

        // Parse the encoded blob back and unwrap text envelopes before sending
        variables.column_values = match normalize_serialized_column_values(&variables.column_values)
        {
            Ok(normalized) => normalized,
            Err(e) => {
                error!("{}", e);
                return Ok(false);
            }
        };

        let payload = GraphQLPayload::new(GraphQLQuery(mutation), Some(variables));
        let result = self
            .execute_graphql(endpoint, "change_multiple_column_values", payload)
            .await?;
        debug!("Update response: {}", result);

        if changed_item_id(&result).is_some() {
            info!("Updated Monday.com item {} on board {}", item_id, board_id);
            return Ok(true);
        }

        // Errors are only parsed for the log line
        if let Some(errors) = result.get("errors") {
            match serde_json::from_value::<Vec<GraphQLError>>(errors.clone()) {
                Ok(errors) => {
                    if let Some(summary) = summarize_graphql_errors(&errors) {
                        error!("GraphQL errors while updating item {}: {}", item_id, summary);
                    }
                }
                Err(_) => error!("GraphQL errors while updating item {}: {}", item_id, errors),
            }
        }
        error!("Failed to update item. Response: {}", result);
        Ok(false)
    }
}

impl GraphQLExecutor for MondayClient {
    async fn execute_graphql<T: Serialize>(
        &self,
        endpoint: &ApiEndpoint,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> std::result::Result<Value, MondayApiError> {
        debug!(
            "Starting GraphQL request {} with payload: {}",
            query_name,
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "Invalid JSON".to_string())
        );

        let start_time = std::time::Instant::now();

        let response = self
            .client
            .post(endpoint.api_url.as_str())
            .header(AUTHORIZATION, endpoint.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(MondayApiError::from_reqwest_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(MondayApiError::from_reqwest_error)?;

        if !status.is_success() {
            error!(
                "Error making request to Monday.com API: {} returned HTTP {}",
                query_name, status
            );
            error!("Response: {}", body);
            return Err(MondayApiError::from_status(status.as_u16(), body));
        }

        let result: Value = serde_json::from_str(&body).map_err(|e| {
            error!("Error decoding JSON response: {}", e);
            MondayApiError::Decode(e.to_string())
        })?;

        info!(
            "GraphQL request {} completed successfully in {:?}",
            query_name,
            start_time.elapsed()
        );

        Ok(result)
    }
}
