use crate::shared::email::EmailAddress;
use crate::shared::entity::{Entity, ID};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A `Reminder` is a single email nudge scheduled for a recipient ahead
/// of an `Event`. It snapshots the event name and date at creation time
/// so that it stays deliverable even if the event is deleted later.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// Casual handle used to greet the recipient, derived from the
    /// local part of their email address at creation
    pub user_id: String,
    /// The `Event` this reminder points at, if any. Reminders can also
    /// be created free-standing with just a name and date
    pub event_id: Option<ID>,
    pub event_name: String,
    /// When the event takes place, unix millis
    pub event_date: i64,
    pub kind: ReminderKind,
    /// The timestamp at which this reminder becomes due for delivery
    pub remind_at: i64,
    /// Whether a delivery has been recorded. Dispatch runs only ever
    /// pick up reminders where this is still `false`
    pub sent: bool,
    pub sent_at: Option<i64>,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl Reminder {
    pub fn mark_sent(&mut self, now: i64) {
        self.sent = true;
        self.sent_at = Some(now);
        self.updated = now;
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReminderKind {
    OneHour,
    OneDay,
    ThreeDays,
    OneWeek,
    TwoWeeks,
    Custom,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneHour => "1-hour",
            Self::OneDay => "1-day",
            Self::ThreeDays => "3-days",
            Self::OneWeek => "1-week",
            Self::TwoWeeks => "2-weeks",
            Self::Custom => "custom",
        }
    }

    /// How long before the event date a reminder of this kind becomes
    /// due. `Custom` reminders carry their own due timestamp instead.
    pub fn offset_millis(&self) -> Option<i64> {
        match self {
            Self::OneHour => Some(1000 * 60 * 60),
            Self::OneDay => Some(1000 * 60 * 60 * 24),
            Self::ThreeDays => Some(1000 * 60 * 60 * 24 * 3),
            Self::OneWeek => Some(1000 * 60 * 60 * 24 * 7),
            Self::TwoWeeks => Some(1000 * 60 * 60 * 24 * 14),
            Self::Custom => None,
        }
    }
}

impl Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidReminderKindError {
    #[error("Reminder kind: {0} is not recognized")]
    Unrecognized(String),
}

impl FromStr for ReminderKind {
    type Err = InvalidReminderKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-hour" => Ok(Self::OneHour),
            "1-day" => Ok(Self::OneDay),
            "3-days" => Ok(Self::ThreeDays),
            "1-week" => Ok(Self::OneWeek),
            "2-weeks" => Ok(Self::TwoWeeks),
            "custom" => Ok(Self::Custom),
            _ => Err(InvalidReminderKindError::Unrecognized(s.to_string())),
        }
    }
}

impl Serialize for ReminderKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReminderKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ReminderKindVisitor;

        impl<'de> Visitor<'de> for ReminderKindVisitor {
            type Value = ReminderKind;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid reminder kind")
            }

            fn visit_str<E>(self, value: &str) -> Result<ReminderKind, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ReminderKind>()
                    .map_err(|_| E::custom(format!("Unrecognized reminder kind: {}", value)))
            }
        }

        deserializer.deserialize_str(ReminderKindVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_kind_offsets_grow_with_distance() {
        let kinds = [
            ReminderKind::OneHour,
            ReminderKind::OneDay,
            ReminderKind::ThreeDays,
            ReminderKind::OneWeek,
            ReminderKind::TwoWeeks,
        ];
        let offsets = kinds
            .iter()
            .map(|kind| kind.offset_millis().unwrap())
            .collect::<Vec<_>>();
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(ReminderKind::OneHour.offset_millis(), Some(1000 * 60 * 60));
        assert_eq!(ReminderKind::Custom.offset_millis(), None);
    }

    #[test]
    fn it_rejects_unrecognized_reminder_kinds() {
        assert!("2-hours".parse::<ReminderKind>().is_err());
        assert!("".parse::<ReminderKind>().is_err());
    }

    #[test]
    fn mark_sent_records_delivery() {
        let now = 1767225600000; // Thu Jan 01 2026 00:00:00 GMT+0000
        let mut reminder = Reminder {
            id: Default::default(),
            user_id: "maria".into(),
            event_id: None,
            event_name: "Garden Wedding".into(),
            event_date: now + 1000 * 60 * 60 * 24,
            kind: ReminderKind::OneDay,
            remind_at: now,
            sent: false,
            sent_at: None,
            email: EmailAddress::new("maria@example.com").unwrap(),
            phone: None,
            created: now - 500,
            updated: now - 500,
        };

        reminder.mark_sent(now);

        assert!(reminder.sent);
        assert_eq!(reminder.sent_at, Some(now));
        assert_eq!(reminder.updated, now);
    }
}
