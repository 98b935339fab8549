//! Per-event rules.
//!
//! `*_own` codenames apply to events the user organizes, `*_all` codenames to
//! every event. Ticket purchase is also open to the event's organizer.

use eventdesk_core::permissions;
use eventdesk_models::{EventAccess, EventRef, ListingScope, UserProfile};

use crate::evaluator::{has_any_permission, has_permission};

fn is_owner(user: &UserProfile, event: &EventRef) -> bool {
    event.is_organized_by(user.id)
}

/// `own` applies to the organizer, `all` to everyone.
fn owned_or_all(user: Option<&UserProfile>, event: &EventRef, own: &str, all: &str) -> bool {
    let Some(profile) = user else {
        return false;
    };
    if is_owner(profile, event) {
        has_any_permission(user, &[own, all])
    } else {
        has_permission(user, all)
    }
}

pub fn can_list_events(user: Option<&UserProfile>) -> bool {
    has_any_permission(
        user,
        &[permissions::EVENTS_VIEW_OWN, permissions::EVENTS_VIEW_ALL],
    )
}

pub fn can_create_event(user: Option<&UserProfile>) -> bool {
    has_permission(user, permissions::EVENTS_CREATE)
}

pub fn event_listing_scope(user: Option<&UserProfile>) -> ListingScope {
    if has_permission(user, permissions::EVENTS_VIEW_ALL) {
        ListingScope::All
    } else if has_permission(user, permissions::EVENTS_VIEW_OWN) {
        ListingScope::Own
    } else {
        ListingScope::Denied
    }
}

pub fn can_view_event(user: Option<&UserProfile>, event: &EventRef) -> bool {
    owned_or_all(
        user,
        event,
        permissions::EVENTS_VIEW_OWN,
        permissions::EVENTS_VIEW_ALL,
    )
}

pub fn can_edit_event(user: Option<&UserProfile>, event: &EventRef) -> bool {
    owned_or_all(
        user,
        event,
        permissions::EVENTS_EDIT_OWN,
        permissions::EVENTS_EDIT_ALL,
    )
}

pub fn can_delete_event(user: Option<&UserProfile>, event: &EventRef) -> bool {
    owned_or_all(
        user,
        event,
        permissions::EVENTS_DELETE_OWN,
        permissions::EVENTS_DELETE_ALL,
    )
}

pub fn can_purchase_tickets(user: Option<&UserProfile>, event: &EventRef) -> bool {
    match user {
        None => false,
        Some(profile) => {
            has_permission(user, permissions::TICKETS_PURCHASE) || is_owner(profile, event)
        }
    }
}

pub fn event_access(user: Option<&UserProfile>, event: &EventRef) -> EventAccess {
    EventAccess {
        listing_scope: event_listing_scope(user),
        can_list: can_list_events(user),
        can_create: can_create_event(user),
        can_view: can_view_event(user, event),
        can_edit: can_edit_event(user, event),
        can_delete: can_delete_event(user, event),
        can_purchase_tickets: can_purchase_tickets(user, event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORGANIZER: i64 = 10;
    const OTHER: i64 = 11;

    fn member(id: i64, permissions: &[&str]) -> UserProfile {
        UserProfile::with_permissions(permissions.iter().copied()).with_id(id)
    }

    #[test]
    fn test_absent_user_gets_nothing() {
        let event = EventRef::organized_by(ORGANIZER);
        let access = event_access(None, &event);
        assert_eq!(access.listing_scope, ListingScope::Denied);
        assert!(!access.can_list);
        assert!(!access.can_create);
        assert!(!access.can_view);
        assert!(!access.can_edit);
        assert!(!access.can_delete);
        assert!(!access.can_purchase_tickets);
    }

    #[test]
    fn test_super_admin_gets_everything() {
        let event = EventRef::organized_by(ORGANIZER);
        let admin = UserProfile::super_admin();
        let access = event_access(Some(&admin), &event);
        assert_eq!(access.listing_scope, ListingScope::All);
        assert!(access.can_list);
        assert!(access.can_create && access.can_view && access.can_edit && access.can_delete);
        assert!(access.can_purchase_tickets);
    }

    #[test]
    fn test_own_permissions_apply_to_organizer_only() {
        let event = EventRef::organized_by(ORGANIZER);
        let base = [
            "events.view_own",
            "events.create",
            "events.edit_own",
            "events.delete_own",
        ];

        let organizer = member(ORGANIZER, &base);
        assert!(can_view_event(Some(&organizer), &event));
        assert!(can_edit_event(Some(&organizer), &event));
        assert!(can_delete_event(Some(&organizer), &event));

        let other = member(OTHER, &base);
        assert!(!can_view_event(Some(&other), &event));
        assert!(!can_edit_event(Some(&other), &event));
        assert!(!can_delete_event(Some(&other), &event));
    }

    #[test]
    fn test_all_permissions_apply_to_everyone() {
        let event = EventRef::organized_by(ORGANIZER);
        let moderator = member(OTHER, &["events.view_all", "events.edit_all", "events.delete_all"]);
        assert!(can_view_event(Some(&moderator), &event));
        assert!(can_edit_event(Some(&moderator), &event));
        assert!(can_delete_event(Some(&moderator), &event));

        let organizer = member(ORGANIZER, &["events.delete_all"]);
        assert!(can_delete_event(Some(&organizer), &event));
    }

    #[test]
    fn test_user_without_id_never_owns() {
        let event = EventRef::organized_by(ORGANIZER);
        let anonymous_owner = UserProfile::with_permissions(["events.edit_own"]);
        assert!(!can_edit_event(Some(&anonymous_owner), &event));
    }

    #[test]
    fn test_listing_scope() {
        assert_eq!(
            event_listing_scope(Some(&member(1, &["events.view_all", "events.view_own"]))),
            ListingScope::All
        );
        assert_eq!(
            event_listing_scope(Some(&member(1, &["events.view_own"]))),
            ListingScope::Own
        );
        assert_eq!(
            event_listing_scope(Some(&member(1, &["events.create"]))),
            ListingScope::Denied
        );
        assert!(can_list_events(Some(&member(1, &["events.view_own"]))));
        assert!(!can_list_events(Some(&member(1, &["events.create"]))));
    }

    #[test]
    fn test_ticket_purchase() {
        let event = EventRef::organized_by(ORGANIZER);
        assert!(can_purchase_tickets(Some(&member(OTHER, &["tickets.purchase"])), &event));
        assert!(can_purchase_tickets(Some(&member(ORGANIZER, &[])), &event));
        assert!(!can_purchase_tickets(Some(&member(OTHER, &["tickets.manage"])), &event));
    }

    #[test]
    fn test_create_event() {
        assert!(can_create_event(Some(&member(1, &["events.create"]))));
        assert!(!can_create_event(Some(&member(1, &["events.view_all"]))));
    }
}
