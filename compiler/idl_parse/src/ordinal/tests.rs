use super::*;

const MAX: u64 = OrdinalLimits::DEFAULT_MAX_FIELD;

#[test]
fn test_defaults() {
    let limits = OrdinalLimits::default();
    assert_eq!(limits.max_field, 65_534);
    assert_eq!(limits.max_method, 65_535);
    let custom = limits.with_max_field(100).with_max_method(200);
    assert_eq!((custom.max_field, custom.max_method), (100, 200));
}

#[test]
fn test_below_window_is_accepted() {
    assert_eq!(check_ordinal(0, MAX, false), OrdinalVerdict::Accepted);
    assert_eq!(check_ordinal(MAX - 40, MAX, false), OrdinalVerdict::Accepted);
    assert_eq!(check_ordinal(MAX - 32, MAX, false), OrdinalVerdict::Accepted);
}

#[test]
fn test_window_needs_acknowledgment() {
    assert_eq!(
        check_ordinal(MAX - 31, MAX, false),
        OrdinalVerdict::NeedsAcknowledgment
    );
    assert_eq!(
        check_ordinal(MAX - 1, MAX, false),
        OrdinalVerdict::NeedsAcknowledgment
    );
    assert_eq!(check_ordinal(MAX, MAX, false), OrdinalVerdict::NeedsAcknowledgment);
}

#[test]
fn test_acknowledged_window_is_accepted() {
    assert_eq!(check_ordinal(MAX - 1, MAX, true), OrdinalVerdict::Accepted);
    assert_eq!(check_ordinal(MAX, MAX, true), OrdinalVerdict::Accepted);
}

#[test]
fn test_above_maximum() {
    assert_eq!(check_ordinal(MAX + 1, MAX, false), OrdinalVerdict::ExceedsMaximum);
    assert_eq!(check_ordinal(MAX + 1, MAX, true), OrdinalVerdict::ExceedsMaximum);
}

#[test]
fn test_small_maximum_has_no_safe_range() {
    assert_eq!(check_ordinal(0, 10, false), OrdinalVerdict::NeedsAcknowledgment);
    assert_eq!(check_ordinal(0, 10, true), OrdinalVerdict::Accepted);
}
