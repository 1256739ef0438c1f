use crate::api::ChatBackend;
use crate::config::DashboardKind;
use crate::models::ChatMessage;

pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting to my brain right now. Please try again later.";

pub fn greeting(dashboard: DashboardKind) -> &'static str {
    match dashboard {
        DashboardKind::Banking => {
            "Hello! I'm your AI banking assistant. I can help you check balances, transfer funds, create new accounts, and analyze your spending. How can I assist you today?"
        }
        DashboardKind::Receivables => {
            "Hello! I'm your accounts receivable assistant. I can help you review invoices, record vendor payments, and check what is overdue. How can I assist you today?"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new(dashboard: DashboardKind) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting(dashboard))],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn with_user(&self, input: &str) -> Option<Self> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        let mut next = self.clone();
        next.messages.push(ChatMessage::user(content));
        Some(next)
    }

    pub fn with_reply(&self, reply: String) -> Self {
        let mut next = self.clone();
        next.messages.push(ChatMessage::assistant(reply));
        next
    }
}

/// Asks the backend for the next assistant turn. Any failure becomes the
/// fallback apology.
pub async fn answer(backend: &dyn ChatBackend, transcript: &ChatTranscript) -> String {
    match backend.reply(transcript.messages()).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(%err, "chat turn failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::ChatRole;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeChat {
        outcome: Result<String, ApiError>,
        seen: RefCell<Vec<usize>>,
    }

    #[async_trait(?Send)]
    impl ChatBackend for FakeChat {
        async fn reply(&self, messages: &[ChatMessage]) -> Result<String, ApiError> {
            self.seen.borrow_mut().push(messages.len());
            self.outcome.clone()
        }
    }

    #[test]
    fn hello_appends_one_user_and_one_assistant_turn() {
        let backend = FakeChat {
            outcome: Ok("Hi there!".into()),
            seen: RefCell::new(Vec::new()),
        };
        let start = ChatTranscript::new(DashboardKind::Banking);
        let pending = start.with_user("hello").unwrap();
        let done = pending.with_reply(block_on(answer(&backend, &pending)));

        assert_eq!(done.messages().len(), 3);
        assert_eq!(done.messages()[..1], start.messages()[..]);
        assert_eq!(done.messages()[1], ChatMessage::user("hello"));
        assert_eq!(done.messages()[2], ChatMessage::assistant("Hi there!"));
        assert_eq!(*backend.seen.borrow(), vec![2]);
    }

    #[test]
    fn failures_turn_into_the_apology() {
        let backend = FakeChat {
            outcome: Err(ApiError::Connectivity("offline".into())),
            seen: RefCell::new(Vec::new()),
        };
        let pending = ChatTranscript::new(DashboardKind::Receivables)
            .with_user("any overdue invoices?")
            .unwrap();
        let reply = block_on(answer(&backend, &pending));
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[test]
    fn blank_input_is_ignored() {
        let transcript = ChatTranscript::new(DashboardKind::Banking);
        assert!(transcript.with_user("   ").is_none());
        assert_eq!(transcript.messages()[0].role, ChatRole::Assistant);
    }
}
