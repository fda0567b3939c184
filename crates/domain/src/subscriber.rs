use crate::shared::email::EmailAddress;
use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct NewsletterSubscriber {
    pub id: ID,
    pub email: EmailAddress,
    pub name: Option<String>,
    pub created: i64,
}

impl NewsletterSubscriber {
    pub fn new(email: EmailAddress, now: i64) -> Self {
        Self {
            id: Default::default(),
            email,
            name: None,
            created: now,
        }
    }
}

impl Entity for NewsletterSubscriber {
    fn id(&self) -> &ID {
        &self.id
    }
}
