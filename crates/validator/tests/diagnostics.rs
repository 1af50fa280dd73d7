//! Every soft failure is reported as exactly one WARN event carrying its code.

use std::sync::Arc;

use modelcheck_validator::prelude::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Records `(level, code)` for every event that has a `code` field.
#[derive(Clone, Default)]
struct CodeCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

#[derive(Default)]
struct CodeVisitor {
    code: Option<String>,
}

impl Visit for CodeVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "code" {
            self.code = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "code" && self.code.is_none() {
            self.code = Some(format!("{value:?}").trim_matches('"').to_owned());
        }
    }
}

impl<S: Subscriber> Layer<S> for CodeCapture {
    fn on_event(&self, event: &Event<'_>, _cx: Context<'_, S>) {
        let mut visitor = CodeVisitor::default();
        event.record(&mut visitor);
        if let Some(code) = visitor.code {
            self.events.lock().push((*event.metadata().level(), code));
        }
    }
}

fn capture(run: impl FnOnce()) -> Vec<(Level, String)> {
    let capture = CodeCapture::default();
    let subscriber = Registry::default().with(capture.clone());
    tracing::subscriber::with_default(subscriber, run);
    let events = capture.events.lock().clone();
    events
}

fn warning(code: &str) -> Vec<(Level, String)> {
    vec![(Level::WARN, code.to_owned())]
}

fn validator() -> Validator {
    Validator::builder()
        .with_model("typed", ModelSchema::new().field("id", RuleSet::new().of_type("ulid")))
        .with_model("ruled", ModelSchema::new().field("email", RuleSet::new().rule("format", "email")))
        .build()
}

#[test]
fn unknown_model_warns() {
    let validator = validator();
    let events = capture(|| {
        assert!(validator.validate("account", &Value::object([("id", Value::from(1))])).is_indeterminate());
    });
    assert_eq!(events, warning("unknown_model"));
}

#[test]
fn null_target_warns() {
    let validator = validator();
    let events = capture(|| {
        assert!(validator.validate("typed", &Value::Null).is_indeterminate());
    });
    assert_eq!(events, warning("null_target"));
}

#[test]
fn unknown_rule_warns_and_passes() {
    let validator = validator();
    let events = capture(|| {
        assert!(validator.validate("ruled", &Value::object([("email", Value::from("x"))])).is_valid());
    });
    assert_eq!(events, warning("unknown_rule"));
}

#[test]
fn unknown_type_warns_and_fails() {
    let validator = validator();
    let events = capture(|| {
        assert!(validator.validate("typed", &Value::object([("id", Value::from("x"))])).is_invalid());
    });
    assert_eq!(events, warning("unknown_type"));
}

#[test]
fn clean_validation_is_silent() {
    let validator = Validator::builder()
        .with_model("m", ModelSchema::new().field("n", RuleSet::new().of_type("number").max(3)))
        .build();
    let events = capture(|| {
        assert!(validator.validate("m", &Value::object([("n", Value::from(2))])).is_valid());
    });
    assert!(events.is_empty(), "unexpected diagnostics: {events:?}");
}
