//! Chat message data model and display policy.
//!
//! A [`Message`] carries the raw content exactly as authored; display
//! markup is always derived from it, never stored back, so copy actions
//! can hand out the original text.
//!
//! Rendering is asymmetric by design: assistant content goes through the
//! markup renderer, user content is displayed verbatim with escaping only.
//! User text must never be escape-then-interpreted as markup — that
//! asymmetry is a trust boundary, not a styling choice.
//!
//! Sending and fetching messages is the surrounding system's concern. That
//! collaborator guarantees at most one in-flight send per conversation and
//! appends to the visible list only after a successful response; nothing
//! here depends on network state.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chatdown_render::{RenderError, Renderer};

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human participant; content is displayed verbatim.
    User,
    /// Assistant participant; content is rendered as markup.
    Assistant,
}

/// A message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: Uuid,
    /// Conversation this message belongs to.
    pub conversation_id: Uuid,
    /// Author role.
    pub role: Role,
    /// Raw content as authored. Untrusted with respect to markup.
    pub content: String,
    /// Creation time, unix epoch milliseconds.
    pub created_at: i64,
}

impl Message {
    /// Create a message with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(conversation_id: Uuid, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation_id,
            role,
            content: content.into(),
            created_at: now_millis(),
        }
    }

    /// Produce the display fragment for this message.
    ///
    /// Assistant content is rendered as markup; user content is escaped
    /// verbatim. Renderer warnings for assistant content are dropped here;
    /// use [`chatdown_render::Renderer::render`] directly to inspect them.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InputTooLong`] if the content exceeds the
    /// renderer's length cap.
    pub fn display_html(&self, renderer: &Renderer) -> Result<String, RenderError> {
        match self.role {
            Role::Assistant => Ok(renderer.render(&self.content)?.html),
            Role::User => renderer.render_plain(&self.content),
        }
    }
}

/// Current time as unix epoch milliseconds.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_millis()).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn message(role: Role, content: &str) -> Message {
        Message::new(Uuid::new_v4(), role, content)
    }

    #[test]
    fn test_assistant_content_is_rendered() {
        let msg = message(Role::Assistant, "**bold**");
        let html = msg.display_html(&Renderer::new()).unwrap();
        assert_eq!(html, "<p><strong>bold</strong></p>");
    }

    #[test]
    fn test_user_content_stays_literal() {
        let msg = message(Role::User, "**bold** and `code`");
        let html = msg.display_html(&Renderer::new()).unwrap();
        assert_eq!(html, "<p>**bold** and `code`</p>");
    }

    #[test]
    fn test_user_content_is_escaped() {
        let msg = message(Role::User, "<script>alert(1)</script>");
        let html = msg.display_html(&Renderer::new()).unwrap();
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_raw_content_retained_for_copy() {
        let msg = message(Role::Assistant, "**bold**");
        let _ = msg.display_html(&Renderer::new()).unwrap();
        assert_eq!(msg.content, "**bold**");
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_message_round_trips_through_json() {
        let msg = message(Role::Assistant, "hello");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_new_fills_timestamp() {
        let msg = message(Role::User, "hi");
        assert!(msg.created_at > 0);
    }
}
