//! Narration sink.
//!
//! Actions report outcomes as messages tagged with a tone; how tones map to
//! colors and how the log is rendered is the driver's concern. The sink is
//! append-only and never consulted for control flow.

/// Color tag attached to a narration message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageTone {
    Info,
    PlayerAttack,
    EnemyAttack,
    PlayerDie,
    EnemyDie,
    HealthRecovered,
    Descend,
}

/// One narration entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub tone: MessageTone,
}

/// Append-only narration sink consumed by actions.
pub trait MessageSink {
    fn add_message(&mut self, text: String, tone: MessageTone);
}

/// In-memory sink collecting messages in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBuffer {
    messages: Vec<Message>,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// True when any collected message text equals `text` exactly.
    pub fn contains_text(&self, text: &str) -> bool {
        self.messages.iter().any(|message| message.text == text)
    }
}

impl MessageSink for MessageBuffer {
    fn add_message(&mut self, text: String, tone: MessageTone) {
        self.messages.push(Message { text, tone });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_preserves_arrival_order() {
        let mut buffer = MessageBuffer::new();
        buffer.add_message("first".into(), MessageTone::Info);
        buffer.add_message("second".into(), MessageTone::Descend);

        let texts: Vec<&str> = buffer.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(buffer.last().unwrap().tone, MessageTone::Descend);
    }
}
