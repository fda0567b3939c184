mod conversation;
mod dispatch;
mod event;
mod mail;
mod reminder;
mod shared;
mod subscriber;

pub use conversation::{Conversation, ConversationStatus, AUTO_CLOSE_REASON};
pub use dispatch::{BatchReport, DispatchMode, DispatchResult, DAY_MILLIS, HOUR_MILLIS};
pub use event::Event;
pub use mail::{year_of, ReminderMail};
pub use reminder::{Reminder, ReminderKind};
pub use shared::email::{EmailAddress, InvalidEmailError};
pub use shared::entity::{Entity, ID};
pub use subscriber::NewsletterSubscriber;
