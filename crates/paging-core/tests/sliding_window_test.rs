//! End-to-end traversal scenarios through the public API, driven by the
//! paging-testing harness.

use paging_core::{Direction, PagingError};
use paging_testing::{CursorTestRule, ResolverEvent};

#[test]
fn unbounded_integer_walk() {
    let mut rule = CursorTestRule::unbounded(0);
    rule.assert_window(Some(-1), 0, Some(1));

    rule.advance().unwrap();
    rule.assert_window(Some(0), 1, Some(2));

    rule.retreat().unwrap();
    rule.retreat().unwrap();
    rule.assert_window(Some(-2), -1, Some(0));

    rule.finish();
}

#[test]
fn long_walk_keeps_memory_bounded() {
    let mut rule = CursorTestRule::unbounded(0);
    rule.advance_n(1_000);
    rule.assert_window(Some(999), 1_000, Some(1_001));
    assert_eq!(rule.live_handles(), 3);
    // One probe per construction direction, one per step.
    assert_eq!(rule.source().after_calls(), 1_001);
    assert_eq!(rule.source().before_calls(), 1);
    rule.finish();
}

#[test]
fn bounded_domain_edges() {
    let mut rule = CursorTestRule::clamped(0, 2, 2);
    rule.assert_window(Some(1), 2, None);

    let error = rule.advance().unwrap_err();
    assert_eq!(
        error,
        PagingError::BoundaryReached {
            direction: Direction::Forward
        }
    );
    rule.assert_window(Some(1), 2, None);

    rule.retreat_n(2);
    rule.assert_window(None, 0, Some(1));
    assert_eq!(rule.live_handles(), 2);
    rule.finish();
}

#[test]
fn select_jumps_release_stale_handles() {
    let mut rule = CursorTestRule::unbounded(0);
    rule.select(1_000_000);
    rule.assert_window(Some(999_999), 1_000_000, Some(1_000_001));
    assert_eq!(rule.live_handles(), 3);
    // Selection resolves the new current before its neighbors, so ticket
    // order differs from item order; live_items reports item order.
    assert_eq!(
        rule.resolver().live_items(),
        vec![999_999, 1_000_000, 1_000_001]
    );
    let resolved: Vec<i64> = rule
        .resolver()
        .events()
        .iter()
        .filter_map(|event| match event {
            ResolverEvent::Resolved { item, .. } => Some(*item),
            ResolverEvent::Released { .. } => None,
        })
        .skip(3) // initial window at 0
        .collect();
    assert_eq!(resolved, vec![1_000_000, 999_999, 1_000_001]);
    rule.finish();
}

#[test]
fn every_resolve_is_eventually_released() {
    let mut rule = CursorTestRule::unbounded(0);
    rule.advance_n(10);
    rule.retreat_n(20);
    rule.select(5);
    rule.advance_n(3);
    let resolved = rule.resolver().resolved_count();
    let released = rule.resolver().released_count();
    assert_eq!(resolved - released, rule.live_handles());
    rule.finish();
}
