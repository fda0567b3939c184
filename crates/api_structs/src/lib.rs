mod conversation;
mod event;
mod newsletter;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::conversation::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::newsletter::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::conversation::api::*;
pub use crate::event::api::*;
pub use crate::newsletter::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
