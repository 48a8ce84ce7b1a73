//! The streaming support assistant ("Cuidi") and its conversation state.
//!
//! The external generative-text service is reached through
//! [`SupportAssistant`]: one prompt in, a stream of incremental text
//! chunks out. [`SupportThread`] assembles those chunks the way the chat
//! renders them: the first chunk replaces the typing indicator with a
//! fresh assistant message, later chunks append to it, and a failed
//! stream ends in a fixed apology.

use async_trait::async_trait;
use cuidamet_core::chat::{self, Message, MessageId, Sender};
use futures::stream::BoxStream;
use thiserror::Error;

/// Opening message the assistant greets with.
pub const GREETING: &str =
    "¡Hola! Soy Cuidi, tu asistente virtual. ¿En qué puedo ayudarte hoy?";
/// Shown when the assistant cannot be reached at all.
pub const CONNECT_ERROR_MESSAGE: &str =
    "Lo siento, estoy teniendo problemas para conectar. Por favor, inténtalo de nuevo más tarde.";
/// Shown when a reply stream fails midway.
pub const REPLY_ERROR_MESSAGE: &str =
    "Oops, algo ha salido mal. Por favor, inténtalo de nuevo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("el asistente no está disponible")]
    Unavailable,
    #[error("la respuesta se interrumpió")]
    Interrupted,
}

/// External generative-text collaborator. Chunks concatenate in arrival
/// order; there is no other structure to the response.
#[async_trait]
pub trait SupportAssistant: Send + Sync {
    async fn reply(
        &self,
        prompt: &str,
    ) -> Result<BoxStream<'static, Result<String, AssistantError>>, AssistantError>;
}

/// The support conversation, including streaming assembly state.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportThread {
    messages: Vec<Message>,
    bot_typing: bool,
    /// Message currently receiving chunks, while a reply is streaming.
    streaming_into: Option<MessageId>,
}

impl Default for SupportThread {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportThread {
    pub fn new() -> Self {
        let mut thread = Self {
            messages: Vec::new(),
            bot_typing: false,
            streaming_into: None,
        };
        thread.push(GREETING, Sender::Other);
        thread
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_bot_typing(&self) -> bool {
        self.bot_typing
    }

    /// Sending is blocked while a reply is in flight.
    pub fn can_send(&self) -> bool {
        !self.bot_typing && self.streaming_into.is_none()
    }

    /// Record the user's message and flip the typing indicator on.
    /// Returns the trimmed prompt to forward to the assistant, or `None`
    /// when the text was empty or a reply is already streaming.
    pub fn send(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !self.can_send() {
            return None;
        }
        self.push(trimmed, Sender::Me);
        self.bot_typing = true;
        Some(trimmed.to_string())
    }

    /// Apply one incremental chunk of the assistant's reply.
    pub fn apply_chunk(&mut self, text: &str) {
        match self.streaming_into {
            None => {
                self.bot_typing = false;
                let id = self.push(text, Sender::Other);
                self.streaming_into = Some(id);
            }
            Some(id) => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                    message.text.push_str(text);
                }
            }
        }
    }

    /// The reply stream completed.
    pub fn finish_reply(&mut self) {
        self.bot_typing = false;
        self.streaming_into = None;
    }

    /// The reply stream failed: close it out with the fixed apology.
    pub fn fail_reply(&mut self) {
        self.bot_typing = false;
        self.streaming_into = None;
        self.push(REPLY_ERROR_MESSAGE, Sender::Other);
    }

    /// The assistant could not be reached at all.
    pub fn fail_connect(&mut self) {
        self.bot_typing = false;
        self.streaming_into = None;
        self.push(CONNECT_ERROR_MESSAGE, Sender::Other);
    }

    fn push(&mut self, text: &str, sender: Sender) -> MessageId {
        let id = self.messages.last().map_or(1, |last| last.id + 1);
        self.messages.push(Message {
            id,
            text: text.to_string(),
            sender,
            timestamp: chat::now_label(),
            read: true,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let thread = SupportThread::new();
        assert_eq!(thread.messages().len(), 1);
        assert_eq!(thread.messages()[0].text, GREETING);
        assert_eq!(thread.messages()[0].sender, Sender::Other);
        assert!(!thread.is_bot_typing());
    }

    #[test]
    fn test_send_trims_and_blocks_while_typing() {
        let mut thread = SupportThread::new();
        assert_eq!(thread.send("  ¿cuánto cuesta?  ").as_deref(), Some("¿cuánto cuesta?"));
        assert!(thread.is_bot_typing());
        // Second send while the bot is replying is dropped.
        assert_eq!(thread.send("¿hola?"), None);
        assert_eq!(thread.messages().len(), 2);
    }

    #[test]
    fn test_empty_send_is_ignored() {
        let mut thread = SupportThread::new();
        assert_eq!(thread.send("   "), None);
        assert_eq!(thread.messages().len(), 1);
    }

    #[test]
    fn test_chunks_assemble_into_one_message() {
        let mut thread = SupportThread::new();
        thread.send("hola").unwrap();

        thread.apply_chunk("Claro, ");
        assert!(!thread.is_bot_typing());
        thread.apply_chunk("puedo ayudarte ");
        thread.apply_chunk("con eso.");
        thread.finish_reply();

        let last = thread.messages().last().unwrap();
        assert_eq!(last.text, "Claro, puedo ayudarte con eso.");
        assert_eq!(last.sender, Sender::Other);
        assert!(thread.can_send());
    }

    #[test]
    fn test_failed_reply_falls_back_to_apology() {
        let mut thread = SupportThread::new();
        thread.send("hola").unwrap();
        thread.fail_reply();

        let last = thread.messages().last().unwrap();
        assert_eq!(last.text, REPLY_ERROR_MESSAGE);
        assert!(!thread.is_bot_typing());
        assert!(thread.can_send());
    }

    #[test]
    fn test_connect_failure_appends_notice() {
        let mut thread = SupportThread::new();
        thread.fail_connect();
        assert_eq!(thread.messages().last().unwrap().text, CONNECT_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_thread_consumes_a_streamed_reply() {
        use futures::StreamExt;

        struct Scripted;

        #[async_trait]
        impl SupportAssistant for Scripted {
            async fn reply(
                &self,
                _prompt: &str,
            ) -> Result<BoxStream<'static, Result<String, AssistantError>>, AssistantError>
            {
                let chunks = vec![Ok("Hola, ".to_string()), Ok("¿en qué te ayudo?".to_string())];
                Ok(futures::stream::iter(chunks).boxed())
            }
        }

        let mut thread = SupportThread::new();
        let prompt = thread.send("hola").unwrap();
        let mut stream = Scripted.reply(&prompt).await.unwrap();
        while let Some(chunk) = stream.next().await {
            thread.apply_chunk(&chunk.unwrap());
        }
        thread.finish_reply();

        assert_eq!(
            thread.messages().last().unwrap().text,
            "Hola, ¿en qué te ayudo?"
        );
        assert!(thread.can_send());
    }
}
