//! Chat session state: an append-only transcript plus the composing flag.
//!
//! `send` holds the session exclusively for the whole user-message →
//! delay → bot-reply cycle, so replies land in strict send order. The
//! composing flag additionally rejects any send that observes a reply
//! still in flight (shared-handle callers), instead of letting a second
//! timer race the first. A send future dropped mid-delay clears the flag
//! on the way out; its user message stays in the transcript with no
//! reply.

use std::time::Duration;

use crate::chat::script::{self, reply_for};
use crate::models::chat::ChatMessage;

/// Fixed composing interval before the scripted reply is appended.
#[allow(dead_code)]
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// What a `send` call did to the transcript.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank or whitespace-only input; transcript untouched.
    Ignored,
    /// A reply was already composing; this send was rejected.
    Busy,
    /// User message and bot reply appended, in that order.
    Replied,
}

#[allow(dead_code)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    composing: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ChatSession {
    /// Opens a session with the bot greeting already in the transcript.
    pub fn new() -> Self {
        ChatSession {
            messages: vec![ChatMessage::bot(script::GREETING)],
            composing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Submits a user message and, after [`REPLY_DELAY`], appends the
    /// scripted (or fallback) bot reply.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SendOutcome::Ignored;
        }
        if self.composing {
            return SendOutcome::Busy;
        }

        // The script key is the submitted text verbatim; only the
        // displayed message is trimmed.
        let reply = reply_for(text);

        self.messages.push(ChatMessage::user(trimmed));
        self.composing = true;
        {
            let _composing = ComposingGuard(&mut self.composing);
            tokio::time::sleep(REPLY_DELAY).await;
        }
        self.messages.push(ChatMessage::bot(reply));
        SendOutcome::Replied
    }
}

/// Resets the composing flag when the delay ends, including when the
/// in-flight send is dropped mid-delay.
#[allow(dead_code)]
struct ComposingGuard<'a>(&'a mut bool);

impl Drop for ComposingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::script::{FALLBACK, GREETING};
    use crate::models::chat::Sender;

    #[test]
    fn test_new_session_opens_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_question_gets_its_canned_reply() {
        let mut session = ChatSession::new();
        let outcome = session.send("Can I change my career path later?").await;
        assert_eq!(outcome, SendOutcome::Replied);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert!(messages[2].text.starts_with("Absolutely!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_off_script_question_gets_fallback() {
        let mut session = ChatSession::new();
        session.send("Should I become a farmer?").await;
        assert_eq!(session.messages().last().unwrap().text, FALLBACK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transcript_grows_by_two_per_completed_send() {
        let mut session = ChatSession::new();
        let before = session.messages().len();
        session.send("What colleges are near me?").await;
        assert_eq!(session.messages().len(), before + 2);
        session.send("How much does a design course cost?").await;
        assert_eq!(session.messages().len(), before + 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.send("").await, SendOutcome::Ignored);
        assert_eq!(session.send("   \n\t").await, SendOutcome::Ignored);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_key_is_verbatim_so_padded_input_falls_back() {
        let mut session = ChatSession::new();
        session.send("  Can I change my career path later?  ").await;
        let messages = session.messages();
        // Displayed message is trimmed, but the padded text is off-script.
        assert_eq!(messages[1].text, "Can I change my career path later?");
        assert_eq!(messages[2].text, FALLBACK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_land_in_send_order() {
        let mut session = ChatSession::new();
        session.send("first question").await;
        session.send("second question").await;
        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![
                Sender::Bot, // greeting
                Sender::User,
                Sender::Bot,
                Sender::User,
                Sender::Bot,
            ]
        );
        assert_eq!(session.messages()[1].text, "first question");
        assert_eq!(session.messages()[3].text, "second question");
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_composing_is_rejected() {
        let mut session = ChatSession::new();
        session.composing = true;
        assert_eq!(session.send("hello there").await, SendOutcome::Busy);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_send_clears_composing_and_session_recovers() {
        let mut session = ChatSession::new();
        {
            let fut = session.send("hello there");
            tokio::pin!(fut);
            // Poll once: user message appended, now waiting out the delay.
            assert!(futures_poll_once(fut.as_mut()).await.is_none());
            // Drop the in-flight send mid-compose.
        }
        assert!(!session.is_composing());
        // The orphaned user message stays, with no reply.
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::User);

        // The session keeps working.
        assert_eq!(session.send("again").await, SendOutcome::Replied);
        assert_eq!(session.messages().len(), 4);
    }

    /// Polls a future exactly once; Some(output) if it completed.
    async fn futures_poll_once<F: std::future::Future + Unpin>(fut: F) -> Option<F::Output> {
        use std::future::Future;
        use std::pin::Pin;
        use std::task::Poll;

        struct PollOnce<F>(Option<F>);
        impl<F: Future + Unpin> Future for PollOnce<F> {
            type Output = Option<F::Output>;
            fn poll(
                mut self: Pin<&mut Self>,
                cx: &mut std::task::Context<'_>,
            ) -> Poll<Self::Output> {
                let inner = self.0.as_mut().unwrap();
                match Pin::new(inner).poll(cx) {
                    Poll::Ready(out) => Poll::Ready(Some(out)),
                    Poll::Pending => Poll::Ready(None),
                }
            }
        }
        PollOnce(Some(fut)).await
    }
}
