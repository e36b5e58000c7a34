use crate::window::Window;

#[test]
fn full_window_exposes_all_slots() {
    let window = Window::new(Some(1), 2, Some(3));
    assert_eq!(window.previous(), Some(&1));
    assert_eq!(window.current(), &2);
    assert_eq!(window.next(), Some(&3));
    assert!(window.has_previous());
    assert!(window.has_next());
}

#[test]
fn boundary_window_has_empty_slots() {
    let window = Window::new(None, 7, None);
    assert!(!window.has_previous());
    assert!(!window.has_next());
    assert_eq!(window.items().as_slice(), &[&7]);
}

#[test]
fn items_are_in_traversal_order() {
    let window = Window::new(Some(1), 2, Some(3));
    assert_eq!(window.items().as_slice(), &[&1, &2, &3]);

    let window = Window::new(None, 2, Some(3));
    assert_eq!(window.items().as_slice(), &[&2, &3]);
}

#[test]
fn out_of_order_window_is_logged_not_rejected() {
    // A misbehaving data source can hand the cursor an out-of-order
    // triple; construction warns but still succeeds so traversal keeps
    // working.
    let window = Window::new(Some(5), 2, Some(-1));
    assert_eq!(window.previous(), Some(&5));
    assert_eq!(window.current(), &2);
    assert_eq!(window.next(), Some(&-1));
}

#[test]
fn windows_compare_by_slots() {
    assert_eq!(Window::new(Some(1), 2, Some(3)), Window::new(Some(1), 2, Some(3)));
    assert_ne!(Window::new(Some(1), 2, Some(3)), Window::new(None, 2, Some(3)));
}
