use super::graphql_types::GraphQLError;

/// Joins GraphQL error messages into a single line for logging.
///
/// # Arguments
///
/// * `errors` - The `errors` array of a GraphQL response
///
/// # Returns
///
/// Returns `None` for an empty list, otherwise each message followed by its
/// `extensions.code` when the API supplied one.
pub fn summarize_graphql_errors(errors: &[GraphQLError]) -> Option<String> {
    if errors.is_empty() {
        return None;
    }

    let summary = errors
        .iter()
        .map(|e| {
            let code = e
                .extensions
                .as_ref()
                .and_then(|ext| ext.get("code"))
                .and_then(|code| code.as_str());
            match code {
                Some(code) => format!("{} ({})", e.message, code),
                None => e.message.clone(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(summary)
}
