use crate::shared::entity::{Entity, ID};

/// An `Event` on the public site: a wedding, a corporate party, a
/// seasonal festival. Reminders reference events loosely, events can
/// be deleted without touching the reminders created for them.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: ID,
    pub name: String,
    pub description: String,
    /// When the event takes place, unix millis
    pub date: i64,
    pub image: Option<String>,
    pub category: String,
    pub created: i64,
    pub updated: i64,
}

impl Event {
    pub fn new(name: &str, date: i64, now: i64) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            description: String::new(),
            date,
            image: None,
            category: String::new(),
            created: now,
            updated: now,
        }
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
