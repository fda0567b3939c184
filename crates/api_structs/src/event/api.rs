use crate::dtos::EventDTO;
use festivo_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: Event) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub description: Option<String>,
        pub date: i64,
        pub image: Option<String>,
        pub category: Option<String>,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_events {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub category: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<Event>) -> Self {
            Self {
                events: events.into_iter().map(EventDTO::new).collect(),
            }
        }
    }
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub description: Option<String>,
        pub date: Option<i64>,
        pub image: Option<String>,
        pub category: Option<String>,
    }

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}
