use std::collections::vec_deque::Iter;
use std::collections::VecDeque;

use super::event::Message;

/// Chronological record of the session's messages.
///
/// Append-only apart from [`ConversationLog::clear`]. With a capacity set, the
/// oldest message is evicted once the bound is reached.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: VecDeque<Message>,
    capacity: Option<usize>,
}

impl ConversationLog {
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity,
        }
    }

    pub fn append(&mut self, message: Message) {
        if let Some(cap) = self.capacity {
            while self.messages.len() >= cap.max(1) {
                self.messages.pop_front();
            }
        }
        self.messages.push_back(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    pub fn iter(&self) -> Iter<'_, Message> {
        self.messages.iter()
    }

    /// Owned copy in chronological order.
    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }
}
