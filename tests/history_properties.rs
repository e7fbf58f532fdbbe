// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Undo/redo and referential-integrity properties of the session.

use trip_pins::models::{Coordinate, Direction, PinDraft};
use trip_pins::services::Session;

mod common;

fn add(session: &mut Session, title: &str, lng: f64, lat: f64) -> String {
    let draft = PinDraft {
        title: title.to_string(),
        ..Default::default()
    };
    let outcome = session
        .add_pin(&draft, Some(Coordinate::new(lng, lat)))
        .expect("add pin");
    assert!(outcome.applied);
    session.pins()[0].id.clone()
}

#[test]
fn test_pin_ids_unique() {
    let mut session = common::empty_session();
    for i in 0..50 {
        add(&mut session, &format!("p{i}"), 0.0, 0.0);
    }
    let ids: std::collections::HashSet<_> = session.pins().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_undo_then_redo_round_trip_for_each_mutation() {
    let mut session = common::empty_session();
    let a = add(&mut session, "A", 1.0, 1.0);
    let b = add(&mut session, "B", 2.0, 2.0);
    session.create_trip("Trip").unwrap();
    let trip = session.trips()[0].id.clone();

    // Each mutation paired with a check that undo/redo round-trips it.
    let mutations: Vec<Box<dyn Fn(&mut Session)>> = vec![
        Box::new({
            let (trip, a) = (trip.clone(), a.clone());
            move |s: &mut Session| assert!(s.toggle_pin_in_trip(&trip, &a).applied)
        }),
        Box::new({
            let (trip, b) = (trip.clone(), b.clone());
            move |s: &mut Session| assert!(s.toggle_pin_in_trip(&trip, &b).applied)
        }),
        Box::new({
            let (trip, b) = (trip.clone(), b.clone());
            move |s: &mut Session| assert!(s.reorder_trip_pins(&trip, &b, Direction::Up).applied)
        }),
        Box::new({
            let a = a.clone();
            move |s: &mut Session| assert!(s.delete_pin(&a).applied)
        }),
        Box::new(|s: &mut Session| assert!(s.create_trip("Second").unwrap().applied)),
        Box::new({
            let trip = trip.clone();
            move |s: &mut Session| assert!(s.delete_trip(&trip).applied)
        }),
    ];

    for mutate in mutations {
        let before = session.snapshot().clone();
        mutate(&mut session);
        let after = session.snapshot().clone();
        assert_ne!(before, after);

        assert!(session.undo().applied);
        assert_eq!(session.snapshot(), &before);
        assert!(session.redo().applied);
        assert_eq!(session.snapshot(), &after);
    }
}

#[test]
fn test_mutation_after_undo_clears_redo() {
    let mut session = common::empty_session();
    add(&mut session, "A", 1.0, 1.0);
    add(&mut session, "B", 2.0, 2.0);

    assert!(session.undo().applied);
    assert!(session.history().can_redo());

    add(&mut session, "C", 3.0, 3.0);
    assert!(!session.history().can_redo());
    let before = session.snapshot().clone();
    assert!(!session.redo().applied);
    assert_eq!(session.snapshot(), &before);
}

#[test]
fn test_undo_on_fresh_session_is_noop() {
    let mut session = common::empty_session();
    let before = session.snapshot().clone();
    assert!(!session.undo().applied);
    assert!(!session.redo().applied);
    assert_eq!(session.snapshot(), &before);
}

#[test]
fn test_delete_pin_removes_from_every_trip() {
    let mut session = common::empty_session();
    let a = add(&mut session, "A", 1.0, 1.0);
    let b = add(&mut session, "B", 2.0, 2.0);
    for name in ["One", "Two", "Three"] {
        session.create_trip(name).unwrap();
    }
    let trip_ids: Vec<String> = session.trips().iter().map(|t| t.id.clone()).collect();
    for trip in &trip_ids {
        session.toggle_pin_in_trip(trip, &a);
        session.toggle_pin_in_trip(trip, &b);
    }

    assert!(session.delete_pin(&a).applied);
    for trip in session.trips() {
        assert!(!trip.pin_ids.contains(&a));
        assert_eq!(trip.pin_ids, vec![b.clone()]);
    }
}

#[test]
fn test_reorder_at_edges_is_noop() {
    let mut session = common::empty_session();
    let a = add(&mut session, "A", 1.0, 1.0);
    let b = add(&mut session, "B", 2.0, 2.0);
    session.create_trip("T").unwrap();
    let trip = session.trips()[0].id.clone();
    session.toggle_pin_in_trip(&trip, &a);
    session.toggle_pin_in_trip(&trip, &b);

    let before = session.snapshot().clone();
    let depth = session.history().undo_depth();
    assert!(!session.reorder_trip_pins(&trip, &a, Direction::Up).applied);
    assert!(!session.reorder_trip_pins(&trip, &b, Direction::Down).applied);
    assert!(!session.reorder_trip_pins(&trip, "missing", Direction::Down).applied);
    assert_eq!(session.snapshot(), &before);
    assert_eq!(session.history().undo_depth(), depth);
}

#[test]
fn test_toggle_twice_restores_membership() {
    let mut session = common::empty_session();
    let a = add(&mut session, "A", 1.0, 1.0);
    session.create_trip("T").unwrap();
    let trip = session.trips()[0].id.clone();

    let before = session.trips()[0].pin_ids.clone();
    session.toggle_pin_in_trip(&trip, &a);
    session.toggle_pin_in_trip(&trip, &a);
    assert_eq!(session.trips()[0].pin_ids, before);
}

#[test]
fn test_history_limit_bounds_undo_depth() {
    let store = trip_pins::db::Store::in_memory();
    let mut session = Session::load(store, 3);
    for i in 0..10 {
        add(&mut session, &format!("p{i}"), 0.0, 0.0);
    }
    assert_eq!(session.history().undo_depth(), 3);
    let mut undone = 0;
    while session.undo().applied {
        undone += 1;
    }
    assert_eq!(undone, 3);
}
