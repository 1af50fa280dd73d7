//! Field-level rule semantics through the public façade.

use modelcheck_validator::prelude::*;
use rstest::rstest;

fn single_field(rules: RuleSet) -> Validator {
    Validator::builder()
        .with_model("m", ModelSchema::new().field("f", rules))
        .build()
}

fn with_field(value: Option<Value>) -> Value {
    match value {
        Some(value) => Value::object([("f", value)]),
        None => Value::object::<&str, _>([]),
    }
}

#[rstest]
// required
#[case(RuleSet::new().required(true), None, false)]
#[case(RuleSet::new().required(true), Some(Value::Null), false)]
#[case(RuleSet::new().required(true), Some(Value::from("")), true)]
#[case(RuleSet::new().required(false), None, true)]
// absent, not required
#[case(RuleSet::new().min(0), None, false)]
#[case(RuleSet::new().max(0), None, true)]
#[case(RuleSet::new().of_type("string"), None, false)]
// present null
#[case(RuleSet::new().max(10), Some(Value::Null), false)]
#[case(RuleSet::new().min(0), Some(Value::Null), false)]
// lengths and numbers
#[case(RuleSet::new().min(3), Some(Value::from("abc")), true)]
#[case(RuleSet::new().min(3), Some(Value::from("ab")), false)]
#[case(RuleSet::new().max(2), Some(Value::from(vec![Value::Null; 3])), false)]
#[case(RuleSet::new().min(1.5).max(2.5), Some(Value::from(2)), true)]
// objects have no comparable
#[case(RuleSet::new().max(10), Some(Value::object([("a", Value::Null)])), false)]
fn rule_outcomes(#[case] rules: RuleSet, #[case] value: Option<Value>, #[case] expected: bool) {
    let validator = single_field(rules);
    assert_eq!(validator.is_valid("m", &with_field(value)), Some(expected));
}

#[rstest]
#[case("string", Value::from("x"))]
#[case("number", Value::from(3.25))]
#[case("date", Value::from(chrono::Utc::now()))]
#[case("uuid", Value::from("123e4567-e89b-12d3-a456-426614174000"))]
fn builtin_types_accept_their_kind(#[case] type_name: &str, #[case] value: Value) {
    let validator = single_field(RuleSet::new().of_type(type_name));
    assert_eq!(validator.is_valid("m", &with_field(Some(value))), Some(true));
}

#[test]
fn unknown_rule_passes_but_unknown_type_fails() {
    let unknown_rule = single_field(RuleSet::new().rule("format", "email"));
    assert_eq!(unknown_rule.is_valid("m", &with_field(None)), Some(true));

    let unknown_type = single_field(RuleSet::new().of_type("email"));
    assert_eq!(
        unknown_type.is_valid("m", &with_field(Some(Value::from("a@b.c")))),
        Some(false)
    );
}

#[test]
fn byte_length_mode() {
    let validator = Validator::builder()
        .length_mode(LengthMode::Bytes)
        .with_model("m", ModelSchema::new().field("f", RuleSet::new().max(3)))
        .build();
    assert_eq!(validator.is_valid("m", &with_field(Some(Value::from("abc")))), Some(true));
    assert_eq!(validator.is_valid("m", &with_field(Some(Value::from("äb")))), Some(true));
    assert_eq!(validator.is_valid("m", &with_field(Some(Value::from("äbc")))), Some(false));
}

#[test]
fn custom_rule_via_builder() {
    fn even(_rule: &RuleValue, value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_f64)
            .is_some_and(|n| n % 2.0 == 0.0)
    }

    let validator = Validator::builder()
        .with_rule("even", even)
        .with_model(
            "m",
            ModelSchema::new().field("f", RuleSet::new().of_type("number").rule("even", true)),
        )
        .build();

    assert_eq!(validator.is_valid("m", &with_field(Some(Value::from(4)))), Some(true));
    assert_eq!(validator.is_valid("m", &with_field(Some(Value::from(5)))), Some(false));
}
