use abacus_core::ExactInteger;
use abacus_real::Real;

#[test]
fn reals_serialize_as_their_canonical_strings() {
    assert_eq!(serde_json::to_string(&Real::from(42)).expect("serializes"), "\"42\"");

    let fraction = Real::rational(ExactInteger::from(-6), ExactInteger::from(4));
    assert_eq!(serde_json::to_string(&fraction).expect("serializes"), "\"-3/2\"");

    assert_eq!(serde_json::to_string(&Real::from(2.5)).expect("serializes"), "\"2.5\"");
    assert_eq!(serde_json::to_string(&Real::INFINITY).expect("serializes"), "\"+inf.0\"");
    assert_eq!(serde_json::to_string(&Real::NAN).expect("serializes"), "\"+nan.0\"");
}

#[test]
fn reals_round_trip_through_json() {
    for text in ["0", "-7", "3/4", "-3/2", "2.5", "0.1", "1e300", "+inf.0", "-inf.0"] {
        let value: Real = text.parse().expect("parses");
        let json = serde_json::to_string(&value).expect("serializes");
        let back: Real = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, value, "`{text}` should round-trip");
        assert_eq!(back.is_exact(), value.is_exact());
    }
}

#[test]
fn promoted_integers_round_trip_as_reals() {
    let wide = Real::from(ExactInteger::from(i64::MAX) + ExactInteger::from(1));
    let json = serde_json::to_string(&wide).expect("serializes");
    assert_eq!(json, "\"9223372036854775808\"");
    let back: Real = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, wide);
}

#[test]
fn malformed_strings_fail_to_deserialize() {
    assert!(serde_json::from_str::<Real>("\"junk\"").is_err());
    assert!(serde_json::from_str::<Real>("\"1/0\"").is_err());
    // Prefixes belong to the top-level literal grammar, not this crate's.
    assert!(serde_json::from_str::<Real>("\"#e1\"").is_err());
    // A bare JSON number is not the canonical string form.
    assert!(serde_json::from_str::<Real>("2.5").is_err());
}
