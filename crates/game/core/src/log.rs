//! Player-facing messages emitted while actions resolve.

use crate::state::Rgb;

/// Presentation class of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MessageStyle {
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
    HealthRecovered,
    Descend,
    Impossible,
    Neutral,
}

impl MessageStyle {
    pub const fn color(self) -> Rgb {
        match self {
            Self::PlayerAttack => Rgb(0xE0, 0xE0, 0xE0),
            Self::EnemyAttack => Rgb(0xFF, 0xC0, 0xC0),
            Self::PlayerDeath => Rgb(0xFF, 0x30, 0x30),
            Self::EnemyDeath => Rgb(0xFF, 0xA0, 0x30),
            Self::HealthRecovered => Rgb(0x00, 0xFF, 0x00),
            Self::Descend => Rgb(0x9F, 0x3F, 0xFF),
            Self::Impossible => Rgb(0x80, 0x80, 0x80),
            Self::Neutral => Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Attack style for a line whose subject is `attacker_is_player`.
    pub const fn attack(attacker_is_player: bool) -> Self {
        if attacker_is_player {
            Self::PlayerAttack
        } else {
            Self::EnemyAttack
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub text: String,
    pub style: MessageStyle,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Fire-and-forget receiver for log lines.
pub trait MessageSink {
    fn add_message(&mut self, text: String, style: MessageStyle);
}

impl MessageSink for Vec<LogEntry> {
    fn add_message(&mut self, text: String, style: MessageStyle) {
        self.push(LogEntry { text, style });
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("orc"), "Orc");
        assert_eq!(capitalize("Troll KING"), "Troll king");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<LogEntry> = Vec::new();
        sink.add_message("first".into(), MessageStyle::Neutral);
        sink.add_message("second".into(), MessageStyle::Descend);
        assert_eq!(sink[1], LogEntry::new("second", MessageStyle::Descend));
    }
}
