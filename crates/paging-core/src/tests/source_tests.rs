use std::rc::Rc;

use crate::source::{FiniteDataSource, FnDataSource, InfiniteDataSource};

#[test]
fn fn_source_delegates_to_closures() {
    let source = FnDataSource::new(|n: &i64| Some(n - 10), |n: &i64| Some(n + 10));
    assert_eq!(source.item_before(&0), Some(-10));
    assert_eq!(source.item_after(&0), Some(10));
}

#[test]
fn finite_source_sorts_and_dedups() {
    let source = FiniteDataSource::new(vec![3, 1, 2, 2, 1]);
    assert_eq!(source.len(), 3);
    assert_eq!(source.first(), Some(&1));
    assert_eq!(source.last(), Some(&3));
}

#[test]
fn finite_source_neighbors() {
    let source = FiniteDataSource::new(vec![10, 20, 30]);
    assert_eq!(source.item_before(&10), None);
    assert_eq!(source.item_after(&10), Some(20));
    assert_eq!(source.item_before(&20), Some(10));
    assert_eq!(source.item_after(&30), None);
}

#[test]
fn finite_source_unknown_item_is_boundary_both_ways() {
    let source = FiniteDataSource::new(vec![10, 20, 30]);
    assert_eq!(source.item_before(&15), None);
    assert_eq!(source.item_after(&15), None);
}

#[test]
fn finite_source_empty() {
    let source: FiniteDataSource<i64> = FiniteDataSource::new(Vec::new());
    assert!(source.is_empty());
    assert_eq!(source.item_after(&0), None);
}

#[test]
fn forwarding_impls_cover_shared_sources() {
    let source = Rc::new(FiniteDataSource::new(vec![1, 2, 3]));
    assert_eq!(source.item_after(&1), Some(2));

    let boxed: Box<dyn InfiniteDataSource<i64>> =
        Box::new(FnDataSource::new(|n: &i64| Some(n - 1), |n: &i64| Some(n + 1)));
    assert_eq!(boxed.item_before(&0), Some(-1));
}
