//! Lazy, endless iteration over clock states.

use crate::common::*;
use std::sync::Arc;
use std::thread;

#[test]
fn starts_at_zero_and_ticks_by_one() {
    let clock = fixed(&[4, 10]);
    let mut ticker = clock.iter();
    assert_eq!(
        ticker.next().unwrap(),
        expected(&[0, 0], 0, vec![int(0), int(0)])
    );
    assert_eq!(
        ticker.next().unwrap(),
        expected(&[0, 1], 0, vec![int(0), int(1)])
    );
}

#[test]
fn matches_random_access() {
    let clock = clock(vec![
        DigitSpec::symbols(["A", "B", "C"]),
        DigitSpec::range_step(1, 20, 2),
    ]);
    for (ticks, state) in clock.iter().take(100).enumerate() {
        assert_eq!(state, clock.at(ticks as i64).unwrap());
    }
}

#[test]
fn keeps_going_past_capacity() {
    let clock = fixed(&[3]);
    let last = clock.iter().nth(1_000).unwrap();
    assert_eq!(last.counters, vec![1]);
    assert_eq!(last.cycles, 333);
}

#[test]
fn every_call_restarts() {
    let clock = hms();
    let advanced: Vec<_> = clock.iter().skip(10).take(1).collect();
    assert_eq!(advanced[0].counters, vec![0, 0, 10]);
    assert_eq!(clock.iter().next().unwrap().counters, vec![0, 0, 0]);
}

#[test]
fn iter_from_offset() {
    let clock = hms();
    let states: Vec<_> = clock
        .iter_from(86_398)
        .unwrap()
        .take(3)
        .map(|s| (s.counters, s.cycles))
        .collect();
    assert_eq!(
        states,
        vec![
            (vec![23, 59, 58], 0),
            (vec![23, 59, 59], 0),
            (vec![0, 0, 0], 1),
        ]
    );
}

#[test]
fn independent_sessions_across_threads() {
    let clock = Arc::new(fixed(&[4, 10]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                clock
                    .iter()
                    .take(50)
                    .map(|s| clock.ticks_for(&s).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<i64> = (0..50).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
