//! MatriBot chat session. Keeps the ordered history and answers via the responder.
//!
//! The reply delay is cosmetic: it only paces the conversation in the UI.

use crate::domain::responder::{route, welcome};
use crate::domain::{ChatMessage, Topic};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

pub struct ChatService {
    reply_delay: Duration,
    history: RwLock<Vec<ChatMessage>>,
}

impl ChatService {
    /// New session, seeded with the welcome message.
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            reply_delay,
            history: RwLock::new(vec![ChatMessage::bot(welcome())]),
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Submit typed input. Blank input is ignored and returns None.
    ///
    /// Otherwise the user message is appended, the reply delay elapses, and the
    /// bot reply is appended and returned.
    pub async fn send(&self, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.history.write().await.push(ChatMessage::user(text));

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let topic = Topic::detect(text);
        debug!(?topic, "routing chat message");
        let reply = ChatMessage::bot(route(text));
        self.history.write().await.push(reply.clone());
        Some(reply)
    }

    /// A quick-reply label is resubmitted exactly as if it had been typed.
    pub async fn quick_reply(&self, option: &str) -> Option<ChatMessage> {
        self.send(option).await
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.read().await.clone()
    }

    /// Drop the conversation, keeping only the welcome message.
    pub async fn reset(&self) {
        *self.history.write().await = vec![ChatMessage::bot(welcome())];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sender;
    use crate::domain::responder::WELCOME_TEXT;

    fn session() -> ChatService {
        ChatService::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_starts_with_welcome() {
        let chat = session();
        let history = chat.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sender, Sender::Bot);
        assert_eq!(history[0].text, WELCOME_TEXT);
        assert_eq!(history[0].options.len(), 3);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_bot() {
        let chat = session();
        let reply = chat.send("  what should I eat?  ").await.unwrap();
        assert!(reply.text.starts_with("Nutrition"));

        let history = chat.history().await;
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].sender, Sender::User);
        assert_eq!(history[1].text, "what should I eat?");
        assert_eq!(history[2], reply);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let chat = session();
        assert!(chat.send("   ").await.is_none());
        assert!(chat.send("").await.is_none());
        assert_eq!(chat.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_quick_reply_matches_typed_input() {
        let typed = session();
        let clicked = session();
        let a = typed.send("Exercise advice").await;
        let b = clicked.quick_reply("Exercise advice").await;
        assert_eq!(a, b);
        assert_eq!(typed.history().await, clicked.history().await);
    }

    #[tokio::test]
    async fn test_reset() {
        let chat = session();
        chat.send("hello").await;
        chat.reset().await;
        assert_eq!(chat.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_reply_waits_for_delay() {
        let chat = ChatService::new(Duration::from_millis(30));
        let start = tokio::time::Instant::now();
        chat.send("hi").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
