//! Chat threads between the user and providers.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::provider::{Provider, ProviderId};

pub type ChatId = u32;
pub type MessageId = u32;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Me,
    Other,
}

/// One message in a thread. Immutable once created except for `read`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Display label, e.g. "10:24".
    pub timestamp: String,
    pub read: bool,
}

/// An ordered, append-only message thread tied to one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: ChatId,
    pub provider: Provider,
    pub messages: Vec<Message>,
}

impl ChatThread {
    pub fn new(id: ChatId, provider: Provider) -> Self {
        Self {
            id,
            provider,
            messages: Vec::new(),
        }
    }

    /// Append a message and return its id. Ids are sequential within the
    /// thread, so insertion order is chronological order.
    pub fn push(&mut self, text: impl Into<String>, sender: Sender, read: bool) -> MessageId {
        let id = self.messages.last().map_or(1, |last| last.id + 1);
        self.messages.push(Message {
            id,
            text: text.into(),
            sender,
            timestamp: now_label(),
            read,
        });
        id
    }

    /// Mark every message read. Idempotent; order and content untouched.
    pub fn mark_all_read(&mut self) {
        for message in &mut self.messages {
            message.read = true;
        }
    }

    /// Unread messages from the other side.
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.sender == Sender::Other && !message.read)
            .count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Display label for "now", as the chat UI shows it.
pub fn now_label() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Total unread messages across all threads.
pub fn total_unread(threads: &[ChatThread]) -> usize {
    threads.iter().map(ChatThread::unread_count).sum()
}

/// The thread for a provider, if one exists.
pub fn thread_for_provider(threads: &[ChatThread], provider: ProviderId) -> Option<&ChatThread> {
    threads.iter().find(|thread| thread.provider.id == provider)
}

/// Return the id of the provider's thread, creating an empty one when
/// none exists yet. At most one thread per provider.
pub fn find_or_create_thread(threads: &mut Vec<ChatThread>, provider: &Provider) -> ChatId {
    if let Some(existing) = thread_for_provider(threads, provider.id) {
        return existing.id;
    }
    let id = threads.len() as ChatId + 1;
    threads.push(ChatThread::new(id, provider.clone()));
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn thread() -> ChatThread {
        let providers = mock_data::mock_providers();
        let mut thread = ChatThread::new(1, providers[0].clone());
        thread.push("Hola, ¿estás disponible?", Sender::Me, true);
        thread.push("¡Sí! ¿Qué día necesitas?", Sender::Other, false);
        thread.push("Puedo adaptarme a tu horario.", Sender::Other, false);
        thread
    }

    #[test]
    fn test_unread_counts_only_unread_from_other() {
        assert_eq!(thread().unread_count(), 2);
    }

    #[test]
    fn test_mark_all_read_is_idempotent_and_preserves_order() {
        let mut thread = thread();
        let texts: Vec<String> = thread.messages.iter().map(|m| m.text.clone()).collect();

        thread.mark_all_read();
        assert_eq!(thread.unread_count(), 0);
        assert!(thread.messages.iter().all(|m| m.read));

        thread.mark_all_read();
        let after: Vec<String> = thread.messages.iter().map(|m| m.text.clone()).collect();
        assert_eq!(texts, after);
    }

    #[test]
    fn test_message_ids_are_sequential() {
        let thread = thread();
        let ids: Vec<MessageId> = thread.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_find_or_create_never_duplicates() {
        let providers = mock_data::mock_providers();
        let mut threads = Vec::new();

        let first = find_or_create_thread(&mut threads, &providers[0]);
        let again = find_or_create_thread(&mut threads, &providers[0]);
        assert_eq!(first, again);
        assert_eq!(threads.len(), 1);

        let other = find_or_create_thread(&mut threads, &providers[1]);
        assert_ne!(first, other);
        assert_eq!(threads.len(), 2);
    }

    #[test]
    fn test_total_unread_sums_threads() {
        let providers = mock_data::mock_providers();
        let mut a = ChatThread::new(1, providers[0].clone());
        a.push("uno", Sender::Other, false);
        let mut b = ChatThread::new(2, providers[1].clone());
        b.push("dos", Sender::Other, false);
        b.push("leído", Sender::Other, true);
        b.push("mío", Sender::Me, false);

        assert_eq!(total_unread(&[a, b]), 2);
    }
}
