//! Player-facing message history.
//!
//! Consecutive identical lines collapse into one entry with a repeat count,
//! rendered as `text (xN)`.
use delve_core::{LogEntry, MessageSink, MessageStyle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub count: u32,
}

impl Message {
    /// Text with the repeat suffix when the line was stacked.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends every entry in order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        for entry in entries {
            self.add_message(entry.text, entry.style);
        }
    }
}

impl MessageSink for MessageLog {
    fn add_message(&mut self, text: String, style: MessageStyle) {
        match self.messages.last_mut() {
            Some(last) if last.text == text => last.count += 1,
            _ => self.messages.push(Message {
                text,
                style,
                count: 1,
            }),
        }
    }
}
