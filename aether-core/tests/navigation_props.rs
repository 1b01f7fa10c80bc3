//! Property tests for the navigation state holder.

use aether_core::demo::panel;
use aether_core::{Navigator, ViewId};
use proptest::prelude::*;

fn arb_view() -> impl Strategy<Value = ViewId> {
    prop::sample::select(ViewId::ALL.to_vec())
}

proptest! {
    /// set(X); get() == X, no matter what came before.
    #[test]
    fn set_then_get_round_trips(history in prop::collection::vec(arb_view(), 0..20), target in arb_view()) {
        let mut nav = Navigator::new();
        for view in history {
            nav.set_selection(view);
        }
        nav.set_selection(target);
        prop_assert_eq!(nav.selection(), target);
        prop_assert_eq!(nav.metadata(), target.metadata());
    }

    /// Writing the same value again is unobservable.
    #[test]
    fn repeated_set_is_idempotent(view in arb_view(), repeats in 1usize..10) {
        let mut once = Navigator::new();
        once.set_selection(view);

        let mut many = Navigator::new();
        for _ in 0..repeats {
            many.set_selection(view);
        }
        prop_assert_eq!(once, many);
    }

    /// next/prev are inverse and five steps come full circle.
    #[test]
    fn cycling_is_closed(view in arb_view()) {
        prop_assert_eq!(view.next().prev(), view);
        prop_assert_eq!(view.prev().next(), view);

        let mut v = view;
        for _ in 0..ViewId::ALL.len() {
            v = v.next();
        }
        prop_assert_eq!(v, view);
    }

    /// Slugs parse back to the same view.
    #[test]
    fn slug_round_trips(view in arb_view()) {
        prop_assert_eq!(view.slug().parse::<ViewId>().unwrap(), view);
        prop_assert_eq!(view.slug().to_uppercase().parse::<ViewId>().unwrap(), view);
    }

    /// The panel for the selection always belongs to the selection.
    #[test]
    fn panel_follows_selection(steps in prop::collection::vec(arb_view(), 1..20)) {
        let mut nav = Navigator::new();
        for view in steps {
            nav.set_selection(view);
            prop_assert_eq!(panel(nav.selection()).view, view);
        }
    }
}

#[test]
fn fresh_navigator_is_on_console() {
    assert_eq!(Navigator::new().selection(), ViewId::Console);
    assert_eq!(Navigator::default().selection(), ViewId::Console);
}
