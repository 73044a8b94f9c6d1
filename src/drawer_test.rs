use super::*;

const ALL_EVENTS: [DrawerEvent; 5] = [
    DrawerEvent::Toggle,
    DrawerEvent::CloseButton,
    DrawerEvent::Overlay,
    DrawerEvent::Escape,
    DrawerEvent::LinkClick,
];

fn is_close_event(event: DrawerEvent) -> bool {
    event != DrawerEvent::Toggle
}

#[test]
fn starts_closed() {
    assert_eq!(DrawerCore::default().state(), DrawerState::Closed);
}

#[test]
fn toggle_flips_state() {
    assert_eq!(DrawerState::Closed.next(DrawerEvent::Toggle), DrawerState::Open);
    assert_eq!(DrawerState::Open.next(DrawerEvent::Toggle), DrawerState::Closed);
}

#[test]
fn every_close_event_closes_an_open_drawer() {
    for event in ALL_EVENTS.into_iter().filter(|e| is_close_event(*e)) {
        assert_eq!(DrawerState::Open.next(event), DrawerState::Closed, "{event:?}");
    }
}

#[test]
fn close_events_on_closed_drawer_report_no_change() {
    let mut core = DrawerCore::default();
    for event in ALL_EVENTS.into_iter().filter(|e| is_close_event(*e)) {
        assert_eq!(core.handle(event), None, "{event:?}");
        assert_eq!(core.state(), DrawerState::Closed);
    }
}

#[test]
fn handle_reports_changes_only() {
    let mut core = DrawerCore::default();
    assert_eq!(core.handle(DrawerEvent::Toggle), Some(DrawerState::Open));
    assert_eq!(core.handle(DrawerEvent::Escape), Some(DrawerState::Closed));
    assert_eq!(core.handle(DrawerEvent::Escape), None);
}

/// Walks every event sequence up to length 6 and checks the closing and
/// flipping rules after each step.
#[test]
fn all_sequences_obey_close_and_toggle_rules() {
    fn walk(core: &DrawerCore, depth: usize) {
        if depth == 0 {
            return;
        }
        for event in ALL_EVENTS {
            let before = core.state();
            let mut branch = DrawerCore { state: before };
            branch.handle(event);
            if is_close_event(event) {
                assert_eq!(branch.state(), DrawerState::Closed);
            } else {
                assert_ne!(branch.state(), before);
            }
            walk(&branch, depth - 1);
        }
    }
    walk(&DrawerCore::default(), 6);
}
