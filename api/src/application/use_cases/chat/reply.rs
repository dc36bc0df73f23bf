use crate::application::ports::chat_responder::{ChatError, ChatResponder};

pub struct ReplyToMessage<'a, R: ChatResponder + ?Sized> {
    pub responder: &'a R,
    pub max_chars: usize,
}

impl<'a, R: ChatResponder + ?Sized> ReplyToMessage<'a, R> {
    pub async fn execute(&self, message: &str) -> Result<String, ChatError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if trimmed.chars().count() > self.max_chars {
            return Err(ChatError::TooLong {
                max: self.max_chars,
            });
        }
        self.responder.respond(trimmed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ChatResponder for Echo {
        async fn respond(&self, message: &str) -> Result<String, ChatError> {
            Ok(format!("<{message}>"))
        }
    }

    #[tokio::test]
    async fn trims_before_answering() {
        let uc = ReplyToMessage {
            responder: &Echo,
            max_chars: 10,
        };
        assert_eq!(uc.execute("  neem \n").await.unwrap(), "<neem>");
    }

    #[tokio::test]
    async fn rejects_blank_messages() {
        let uc = ReplyToMessage {
            responder: &Echo,
            max_chars: 10,
        };
        assert!(matches!(uc.execute(" \t ").await, Err(ChatError::EmptyMessage)));
    }

    #[tokio::test]
    async fn limit_counts_characters_not_bytes() {
        let uc = ReplyToMessage {
            responder: &Echo,
            max_chars: 5,
        };
        assert!(uc.execute("तुलसी").await.is_ok());
        assert!(matches!(
            uc.execute("tulsi!").await,
            Err(ChatError::TooLong { max: 5 })
        ));
    }
}
