// Observable progress cell: clamping, change notification and unsubscribe.

use scrollview_core::{ProgressCell, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

fn recorder(cell: &ProgressCell) -> (Rc<RefCell<Vec<f32>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let sub = cell.subscribe(move |v| sink.borrow_mut().push(v));
    (seen, sub)
}

#[test]
fn new_clamps_initial_value() {
    assert_eq!(ProgressCell::new(2.0).get(), 1.0);
    assert_eq!(ProgressCell::new(-1.0).get(), 0.0);
    assert_eq!(ProgressCell::new(f32::NAN).get(), 0.0);
    assert_eq!(ProgressCell::default().get(), 0.0);
}

#[test]
fn set_clamps_and_notifies() {
    let cell = ProgressCell::new(0.0);
    let (seen, _sub) = recorder(&cell);
    cell.set(0.25);
    cell.set(1.5);
    cell.set(-3.0);
    assert_eq!(*seen.borrow(), vec![0.25, 1.0, 0.0]);
    assert_eq!(cell.get(), 0.0);
}

#[test]
fn unchanged_or_non_finite_values_do_not_notify() {
    let cell = ProgressCell::new(0.5);
    let (seen, _sub) = recorder(&cell);
    cell.set(0.5);
    cell.set(f32::NAN);
    cell.set(f32::INFINITY);
    assert!(seen.borrow().is_empty());
    assert_eq!(cell.get(), 0.5);

    // already clamped to 1: pushing past the end again is not a change
    cell.set(1.0);
    cell.set(7.0);
    assert_eq!(*seen.borrow(), vec![1.0]);
}

#[test]
fn clones_share_one_value() {
    let writer = ProgressCell::new(0.0);
    let reader = writer.clone();
    let (seen, _sub) = recorder(&reader);
    writer.set(0.3);
    assert_eq!(reader.get(), 0.3);
    assert_eq!(*seen.borrow(), vec![0.3]);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let cell = ProgressCell::new(0.0);
    let (a, sub_a) = recorder(&cell);
    let (b, sub_b) = recorder(&cell);
    assert_eq!(cell.subscriber_count(), 2);

    cell.set(0.1);
    drop(sub_a);
    cell.set(0.2);
    sub_b.unsubscribe();
    cell.set(0.3);

    assert_eq!(*a.borrow(), vec![0.1]);
    assert_eq!(*b.borrow(), vec![0.1, 0.2]);
    assert_eq!(cell.subscriber_count(), 0);
}

#[test]
fn subscription_outliving_cell_is_harmless() {
    let cell = ProgressCell::new(0.0);
    let (_seen, sub) = recorder(&cell);
    drop(cell);
    drop(sub);
}

#[test]
fn listener_may_unsubscribe_another_during_notification() {
    let cell = ProgressCell::new(0.0);
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let killer = {
        let slot = slot.clone();
        cell.subscribe(move |_| {
            slot.borrow_mut().take();
        })
    };
    let (seen, victim) = recorder(&cell);
    *slot.borrow_mut() = Some(victim);

    cell.set(0.4);
    cell.set(0.6);
    assert_eq!(cell.subscriber_count(), 1);
    // the victim saw at most the notification already in flight
    assert!(seen.borrow().len() <= 1);
    assert!(!seen.borrow().contains(&0.6));
    drop(killer);
}

#[test]
fn nested_set_does_not_reenter_listener() {
    let cell = ProgressCell::new(0.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let cell = cell.clone();
        let seen = seen.clone();
        cell.clone().subscribe(move |v| {
            seen.borrow_mut().push(v);
            if v > 0.9 {
                cell.set(0.9);
            }
        })
    };
    cell.set(1.0);
    assert_eq!(cell.get(), 0.9);
    assert_eq!(*seen.borrow(), vec![1.0]);
}
