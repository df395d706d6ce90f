use thiserror::Error;

/// Failure reported by the delete mutation. The message is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MutationFailure {
    pub message: String,
}

impl MutationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from talking to the GraphQL endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("{0}")]
    Network(String),

    #[error("Response not successful: Received status code {status}")]
    Http { status: u16 },

    #[error("{}", .0.join("\n"))]
    GraphQl(Vec<String>),

    #[error("Response contained no data")]
    MissingData,
}

impl From<ClientError> for MutationFailure {
    fn from(err: ClientError) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Duplicate record id {id} in list")]
    DuplicateId { id: i64 },
}
