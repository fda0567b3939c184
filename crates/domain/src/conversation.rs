use crate::shared::entity::{Entity, ID};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Reason recorded on conversations that the inactivity sweep closes
pub const AUTO_CLOSE_REASON: &str = "Auto-closed due to inactivity";

/// A `Conversation` is a chat thread between a site visitor and the
/// staff. Threads with no recent activity get closed in bulk by the
/// auto-close sweep.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ID,
    pub status: ConversationStatus,
    /// Timestamp of the most recent message in either direction
    pub last_activity: i64,
    pub closed_at: Option<i64>,
    pub closed_reason: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl Conversation {
    pub fn new(now: i64) -> Self {
        Self {
            id: Default::default(),
            status: ConversationStatus::Active,
            last_activity: now,
            closed_at: None,
            closed_reason: None,
            created: now,
            updated: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ConversationStatus::Active
    }

    pub fn close(&mut self, reason: &str, now: i64) {
        self.status = ConversationStatus::Closed;
        self.closed_at = Some(now);
        self.closed_reason = Some(reason.to_string());
        self.updated = now;
    }
}

impl Entity for Conversation {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversationStatus {
    Active,
    Closed,
}

impl ConversationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidConversationStatusError {
    #[error("Conversation status: {0} is not recognized")]
    Unrecognized(String),
}

impl FromStr for ConversationStatus {
    type Err = InvalidConversationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            _ => Err(InvalidConversationStatusError::Unrecognized(s.to_string())),
        }
    }
}

impl Serialize for ConversationStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConversationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ConversationStatusVisitor;

        impl<'de> Visitor<'de> for ConversationStatusVisitor {
            type Value = ConversationStatus;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid conversation status")
            }

            fn visit_str<E>(self, value: &str) -> Result<ConversationStatus, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ConversationStatus>()
                    .map_err(|_| E::custom(format!("Unrecognized conversation status: {}", value)))
            }
        }

        deserializer.deserialize_str(ConversationStatusVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_records_reason_and_timestamps() {
        let created_at = 1767225600000; // Thu Jan 01 2026 00:00:00 GMT+0000
        let closed_at = created_at + 1000 * 60 * 90;
        let mut conversation = Conversation::new(created_at);
        assert!(conversation.is_active());

        conversation.close(AUTO_CLOSE_REASON, closed_at);

        assert!(!conversation.is_active());
        assert_eq!(conversation.status, ConversationStatus::Closed);
        assert_eq!(conversation.closed_at, Some(closed_at));
        assert_eq!(
            conversation.closed_reason.as_deref(),
            Some("Auto-closed due to inactivity")
        );
        assert_eq!(conversation.updated, closed_at);
    }
}
