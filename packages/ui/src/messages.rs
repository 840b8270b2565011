//! Transient notification queue.
//!
//! Append-only: messages are pushed in display order and never mutated in
//! place. Removal is owned by the consuming view (the [`crate::Toasts`]
//! overlay), which dismisses entries by id once their duration has elapsed.

use dioxus::prelude::*;

const DEFAULT_DURATION_SECS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Loading,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
    /// Seconds until the consumer should dismiss the message.
    /// `None` (the default for [`MessageKind::Loading`]) means no auto-expiry.
    pub duration_secs: Option<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct MessageQueue {
    next_id: u64,
    entries: Vec<Message>,
}

impl MessageQueue {
    /// Append a message with the default duration for its kind. Returns the
    /// assigned id.
    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>) -> u64 {
        let duration = match kind {
            MessageKind::Loading => None,
            _ => Some(DEFAULT_DURATION_SECS),
        };
        self.push_with_duration(kind, text, duration)
    }

    /// Append a message with an explicit duration.
    pub fn push_with_duration(
        &mut self,
        kind: MessageKind,
        text: impl Into<String>,
        duration_secs: Option<u32>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Message {
            id,
            kind,
            text: text.into(),
            duration_secs,
        });
        id
    }

    /// Messages in insertion (= display) order.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Remove a message by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|m| m.id != id);
    }
}

/// Consume the message queue signal from context.
pub fn use_messages() -> Signal<MessageQueue> {
    use_context::<Signal<MessageQueue>>()
}

/// Append a message to the queue behind the signal.
pub fn push_message(queue: &mut Signal<MessageQueue>, kind: MessageKind, text: &str) {
    queue.write().push(kind, text);
}

/// Provider component owning the message queue for the whole app.
#[component]
pub fn MessageProvider(children: Element) -> Element {
    let queue = use_signal(MessageQueue::default);
    use_context_provider(|| queue);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut queue = MessageQueue::default();
        queue.push(MessageKind::Info, "first");
        queue.push(MessageKind::Warning, "second");
        queue.push(MessageKind::Error, "third");

        let texts: Vec<&str> = queue.entries().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = MessageQueue::default();
        let first = queue.push(MessageKind::Info, "first");
        queue.push(MessageKind::Success, "second");

        queue.dismiss(first);
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].text, "second");

        // unknown id: no-op
        queue.dismiss(999);
        assert_eq!(queue.entries().len(), 1);
    }

    #[test]
    fn test_loading_messages_have_no_auto_expiry() {
        let mut queue = MessageQueue::default();
        queue.push(MessageKind::Loading, "working");
        queue.push(MessageKind::Info, "note");
        assert_eq!(queue.entries()[0].duration_secs, None);
        assert_eq!(queue.entries()[1].duration_secs, Some(5));
    }
}
