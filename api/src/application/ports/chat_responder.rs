use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("message exceeds {max} characters")]
    TooLong { max: usize },
    #[error("chat backend failed")]
    Backend(#[source] anyhow::Error),
}

#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Reply to an already trimmed, non-empty message.
    async fn respond(&self, message: &str) -> Result<String, ChatError>;
}
