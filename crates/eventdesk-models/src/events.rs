//! The part of an event that ownership rules depend on.

use eventdesk_core::serde::deserialize_lenient_option;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{EventId, UserId};

/// Reference to an event, as far as access rules are concerned.
///
/// `organizer` is the id of the user who created the event. An event without
/// a known organizer is owned by nobody.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventRef {
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub id: Option<EventId>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub organizer: Option<UserId>,
}

impl EventRef {
    pub fn organized_by(organizer: impl Into<UserId>) -> Self {
        Self {
            id: None,
            organizer: Some(organizer.into()),
        }
    }

    pub fn is_organized_by(&self, user: Option<UserId>) -> bool {
        matches!((self.organizer, user), (Some(organizer), Some(user)) if organizer == user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let event = EventRef::organized_by(5);
        assert!(event.is_organized_by(Some(UserId::new(5))));
        assert!(!event.is_organized_by(Some(UserId::new(6))));
        assert!(!event.is_organized_by(None));
    }

    #[test]
    fn test_unknown_organizer_is_owned_by_nobody() {
        let event = EventRef::default();
        assert!(!event.is_organized_by(None));
        assert!(!event.is_organized_by(Some(UserId::new(1))));
    }

    #[test]
    fn test_deserialize_lenient() {
        let event: EventRef = serde_json::from_str(r#"{"id": 3, "organizer": "me"}"#).unwrap();
        assert_eq!(event.id, Some(EventId::new(3)));
        assert_eq!(event.organizer, None);
    }
}
