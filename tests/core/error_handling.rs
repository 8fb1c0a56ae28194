//! Every error kind, surfaced through the public API.

use crate::common::*;

#[test]
fn negative_index() {
    assert!(matches!(
        fixed(&[4, 10]).at(-1),
        Err(Error::NegativeIndex { index: -1 })
    ));
    assert!(matches!(
        hms().at(i64::MIN),
        Err(Error::NegativeIndex { .. })
    ));
}

#[test]
fn negative_ticks_in_engine() {
    assert!(matches!(
        clockrange::decompose(&[4, 10], -5),
        Err(Error::NegativeTicks { ticks: -5 })
    ));
}

#[test]
fn degenerate_bases_rejected_at_construction() {
    let cases = [
        (vec![DigitSpec::fixed(0)], 0),
        (vec![DigitSpec::fixed(3), DigitSpec::Symbols(vec![])], 1),
        (
            vec![
                DigitSpec::fixed(3),
                DigitSpec::fixed(3),
                DigitSpec::range(10, 1),
            ],
            2,
        ),
    ];
    for (specs, expected_position) in cases {
        match ClockRange::new(specs) {
            Err(Error::DegenerateBase { position, .. }) => {
                assert_eq!(position, expected_position)
            }
            other => panic!("expected DegenerateBase, got {:?}", other),
        }
    }
}

#[test]
fn unsupported_specs() {
    assert!(matches!(
        ClockRange::new(vec![DigitSpec::range_step(0, 10, 0)]),
        Err(Error::UnsupportedSpec { .. })
    ));
    assert!(matches!(
        DigitSpec::from_json(&serde_json::json!("aaa")),
        Err(Error::UnsupportedSpec { .. })
    ));
}

#[test]
fn render_counter_out_of_range() {
    assert!(matches!(
        clockrange::render(&DigitSpec::symbols(["A"]), 1),
        Err(Error::CounterOutOfRange {
            counter: 1,
            limit: 1,
            ..
        })
    ));
}

#[test]
fn reverse_lookup_of_foreign_state() {
    let clock = fixed(&[4, 10]);
    assert!(matches!(
        clock.ticks_for(&CountState::new(vec![1, 2, 3], 0)),
        Err(Error::ArityMismatch {
            expected: 2,
            actual: 3
        })
    ));
    assert!(matches!(
        clock.ticks_for(&CountState::new(vec![1, 10], 0)),
        Err(Error::CounterOutOfRange { position: 1, .. })
    ));
}

#[test]
fn reverse_lookup_overflow() {
    let clock = hms();
    assert!(matches!(
        clock.ticks_for(&CountState::new(vec![0, 0, 0], u64::MAX)),
        Err(Error::Overflow { .. })
    ));
}

#[test]
fn capacity_overflow() {
    let specs = vec![DigitSpec::fixed(u64::MAX); 3];
    assert!(matches!(
        ClockRange::new(specs),
        Err(Error::CapacityOverflow)
    ));
}

#[test]
fn errors_have_descriptive_messages() {
    let err = fixed(&[4]).at(-3).unwrap_err();
    assert!(err.to_string().contains("-3"));
}
