use thiserror::Error;

/// Failures the agent can produce itself, as opposed to transport errors
/// surfaced by reqwest. Nothing here is retried; every variant is fatal for
/// the run.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("model requested unknown tool '{0}'")]
    UnknownTool(String),

    #[error("arguments for tool '{tool}' are not valid JSON: {source}")]
    BadToolArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected chat API response shape: {0}")]
    UnexpectedResponse(String),
}
