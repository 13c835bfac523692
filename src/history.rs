//! Per-chat bounded conversation history.
//!
//! Turns are appended in user/assistant pairs and evicted FIFO in whole pairs
//! once the cap is reached, so stored history is always complete exchanges:
//! length is even and never exceeds `2 × max_history`.
//!
//! The store is the only shared mutable state in the process. Each chat gets
//! its own mutex; the outer map lock is held only long enough to look up or
//! create an entry, so unrelated chats never contend and no lock is held
//! across an await point.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Default maximum number of user/assistant pairs kept per chat.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Message role on the completion wire. History only ever stores `User` and
/// `Assistant`; `System` exists for the per-request prompt assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged utterance. Immutable once stored; removed only by pair
/// eviction or a conversation clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

type ChatHistory = Arc<Mutex<Vec<Turn>>>;

/// In-memory map from chat id to bounded turn history.
///
/// Constructed once in `main` and injected into the orchestrator; nothing
/// mutates turn data except through these operations.
pub struct ConversationStore {
    max_turns: usize,
    chats: Mutex<HashMap<i64, ChatHistory>>,
}

impl ConversationStore {
    /// `max_history` is the number of user/assistant *pairs* kept per chat.
    pub fn new(max_history: usize) -> Self {
        Self {
            max_turns: max_history * 2,
            chats: Mutex::new(HashMap::new()),
        }
    }

    fn entry(&self, chat_id: i64) -> ChatHistory {
        let mut chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
        chats.entry(chat_id).or_default().clone()
    }

    /// Snapshot of the chat's turns, oldest first. An unseen id yields an
    /// empty vec without allocating a map entry.
    pub fn history(&self, chat_id: i64) -> Vec<Turn> {
        let entry = {
            let chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
            chats.get(&chat_id).cloned()
        };
        match entry {
            Some(h) => h.lock().unwrap_or_else(PoisonError::into_inner).clone(),
            None => Vec::new(),
        }
    }

    /// Append a user turn then an assistant turn, evicting the oldest pairs
    /// while the cap is exceeded. Atomic with respect to other store calls on
    /// the same chat.
    pub fn append_pair(&self, chat_id: i64, user_text: &str, assistant_text: &str) {
        let entry = self.entry(chat_id);
        let mut turns = entry.lock().unwrap_or_else(PoisonError::into_inner);
        turns.push(Turn::user(user_text));
        turns.push(Turn::assistant(assistant_text));
        while turns.len() > self.max_turns {
            turns.drain(..2);
        }
    }

    /// Drop the chat's entry entirely. No-op for an unseen id.
    pub fn clear(&self, chat_id: i64) {
        let mut chats = self.chats.lock().unwrap_or_else(PoisonError::into_inner);
        chats.remove(&chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_chat_is_empty() {
        let store = ConversationStore::new(5);
        assert!(store.history(42).is_empty());
    }

    #[test]
    fn append_pair_stores_in_order() {
        let store = ConversationStore::new(5);
        store.append_pair(1, "hello", "hi there");

        let turns = store.history(1);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], Turn::user("hello"));
        assert_eq!(turns[1], Turn::assistant("hi there"));
    }

    #[test]
    fn fifo_eviction_keeps_newest_pairs() {
        let store = ConversationStore::new(2);
        for i in 1..=4 {
            store.append_pair(1, &format!("u{i}"), &format!("a{i}"));
        }

        let turns = store.history(1);
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0], Turn::user("u3"));
        assert_eq!(turns[1], Turn::assistant("a3"));
        assert_eq!(turns[2], Turn::user("u4"));
        assert_eq!(turns[3], Turn::assistant("a4"));
    }

    #[test]
    fn length_always_even_and_bounded() {
        let store = ConversationStore::new(3);
        for i in 0..10 {
            store.append_pair(1, &format!("u{i}"), &format!("a{i}"));
            let len = store.history(1).len();
            assert_eq!(len % 2, 0);
            assert!(len <= 6);
        }
    }

    #[test]
    fn clear_removes_entry() {
        let store = ConversationStore::new(5);
        store.append_pair(1, "u", "a");
        store.clear(1);
        assert!(store.history(1).is_empty());

        // clearing an unseen chat is a no-op
        store.clear(99);
    }

    #[test]
    fn chats_are_independent() {
        let store = ConversationStore::new(5);
        store.append_pair(1, "one", "reply one");
        store.append_pair(2, "two", "reply two");

        store.clear(1);
        assert!(store.history(1).is_empty());
        assert_eq!(store.history(2).len(), 2);
    }

    #[test]
    fn role_serialises_lowercase() {
        let json = serde_json::to_string(&Turn::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
        let json = serde_json::to_string(&Turn::system("rules")).unwrap();
        assert!(json.contains(r#""role":"system""#));
    }
}
