use additive::{Additive, ValidationError};

#[derive(Additive, Debug, Clone, PartialEq)]
struct Message {
    recipient: String,
    reply_to: Option<String>,
    #[additive(default = "plain")]
    encoding: String,
    #[additive(default)]
    tag: Option<String>,
}

#[test]
fn test_new_applies_defaults() {
    let message = Message::new("alice".to_string(), None).unwrap();

    assert_eq!(message.recipient, "alice");
    assert_eq!(message.reply_to, None);
    assert_eq!(message.encoding, "plain");
    assert_eq!(message.tag, None);
}

#[test]
fn test_new_rejects_null_mandatory_field() {
    let result = Message::new(None, None);

    assert_eq!(result, Err(ValidationError::NullArgument("recipient")));
}

#[test]
fn test_mandatory_nullable_accepts_both_null_and_value() {
    let without = Message::new("alice".to_string(), None).unwrap();
    assert_eq!(without.reply_to, None);

    let with = Message::new("alice".to_string(), "bob".to_string()).unwrap();
    assert_eq!(with.reply_to, Some("bob".to_string()));
}

#[test]
fn test_with_customizes_defaults_before_validation() {
    let message = Message::with("alice".to_string(), None, |b| {
        b.set_encoding("json".to_string());
        b.set_tag("urgent".to_string());
    })
    .unwrap();

    assert_eq!(message.encoding, "json");
    assert_eq!(message.tag, Some("urgent".to_string()));
}

#[test]
fn test_with_rejects_explicit_null_for_optional_non_nullable() {
    let result = Message::with("alice".to_string(), None, |b| {
        b.set_encoding(None);
    });

    assert_eq!(result, Err(ValidationError::NullField("encoding")));
}

#[test]
fn test_entry_check_fires_before_the_mutator_runs() {
    // The constructor-entry check rejects the null argument immediately,
    // even though the mutator would have repaired it.
    let result = Message::with(None, None, |b| {
        b.set_recipient("alice".to_string());
    });

    assert_eq!(result, Err(ValidationError::NullArgument("recipient")));
}

#[test]
fn test_seeded_builder_with_chained_setters() {
    let mut builder = Message::builder("alice".to_string(), None);
    builder
        .set_encoding("json".to_string())
        .set_tag("draft".to_string());
    let message = builder.build().unwrap();

    assert_eq!(message.encoding, "json");
    assert_eq!(message.tag, Some("draft".to_string()));
}

#[test]
fn test_copy_overrides_selected_fields() {
    let message = Message::new("alice".to_string(), None).unwrap();
    let copy = message
        .copy(|b| {
            b.set_recipient("bob".to_string());
            b.set_reply_to("alice".to_string());
        })
        .unwrap();

    assert_eq!(copy.recipient, "bob");
    assert_eq!(copy.reply_to, Some("alice".to_string()));
    // Fields not touched by the mutator carry over.
    assert_eq!(copy.encoding, "plain");
}

#[test]
fn test_copy_never_mutates_the_source() {
    let source = Message::new("alice".to_string(), "carol".to_string()).unwrap();
    let before = source.clone();

    let _copy = source
        .copy(|b| {
            b.set_recipient("bob".to_string());
            b.set_reply_to(None);
            b.set_encoding("json".to_string());
            b.set_tag("urgent".to_string());
        })
        .unwrap();

    assert_eq!(source, before);
}

#[test]
fn test_build_revalidates_after_setter_null() {
    let message = Message::new("alice".to_string(), None).unwrap();

    // The setter itself succeeds; the violation surfaces at build time.
    let result = message.copy(|b| {
        b.set_recipient(None);
    });

    assert_eq!(result, Err(ValidationError::NullField("recipient")));
}

#[test]
fn test_copy_failure_leaves_no_partial_instance() {
    let message = Message::new("alice".to_string(), None).unwrap();

    let result = message.copy(|b| {
        b.set_encoding(None);
        b.set_tag("still-set".to_string());
    });

    assert!(result.is_err());
    // The source is intact and a fresh copy still works.
    let retry = message.copy(|b| {
        b.set_tag("ok".to_string());
    });
    assert!(retry.is_ok());
}

// Single mandatory non-nullable parameter: `new(None)` fails while a real
// value, even the string "null", succeeds.
#[derive(Additive, Debug, Clone, PartialEq)]
struct MandatoryOnly {
    test: String,
}

#[test]
fn test_mandatory_non_nullable_rejection() {
    assert_eq!(
        MandatoryOnly::new(None),
        Err(ValidationError::NullArgument("test"))
    );

    let ok = MandatoryOnly::new("null".to_string()).unwrap();
    assert_eq!(ok.test, "null");
}

#[derive(Additive, Debug, Clone, PartialEq)]
struct OptionalOnly {
    #[additive(default = "test2")]
    test2: String,
}

#[test]
fn test_optional_non_nullable_default_fallback() {
    let instance = OptionalOnly::new().unwrap();
    assert_eq!(instance.test2, "test2");

    let result = OptionalOnly::with(|b| {
        b.set_test2(None);
    });
    assert_eq!(result, Err(ValidationError::NullField("test2")));
}

// Sealed owner, no optional parameters: the builder exposes no setters and
// copy degenerates to an identity copy.
#[derive(Additive, Debug, Clone, PartialEq)]
#[additive(sealed)]
struct Endpoint {
    host: String,
    port: u16,
}

#[test]
fn test_sealed_identity_copy() {
    let endpoint = Endpoint::new("localhost".to_string(), 8080u16).unwrap();
    let copy = endpoint.copy(|_| {}).unwrap();

    assert_eq!(copy, endpoint);
}

#[derive(Additive, Debug, Clone, PartialEq)]
struct Document {
    title: String,
    #[additive(default = 1u32, frozen)]
    version: u32,
    #[additive(default = String::from("draft"))]
    state: Option<String>,
}

#[test]
fn test_frozen_field_keeps_its_default() {
    let doc = Document::new("notes".to_string()).unwrap();
    assert_eq!(doc.version, 1);
    assert_eq!(doc.state, Some("draft".to_string()));
}

#[test]
fn test_frozen_field_carries_over_on_copy() {
    let doc = Document::new("notes".to_string()).unwrap();
    let copy = doc
        .copy(|b| {
            b.set_title("revised notes".to_string());
            b.set_state(None);
        })
        .unwrap();

    assert_eq!(copy.version, 1);
    assert_eq!(copy.title, "revised notes");
    assert_eq!(copy.state, None);
}

#[derive(Additive, Debug, Clone, PartialEq)]
struct Settings {
    #[additive(default = 30u64)]
    timeout_secs: u64,
    #[additive(default)]
    proxy: Option<String>,
}

#[test]
fn test_struct_with_no_mandatory_parameters() {
    let settings = Settings::new().unwrap();
    assert_eq!(settings.timeout_secs, 30);
    assert_eq!(settings.proxy, None);

    let tuned = Settings::with(|b| {
        b.set_timeout_secs(5u64);
        b.set_proxy("proxy.local:3128".to_string());
    })
    .unwrap();
    assert_eq!(tuned.timeout_secs, 5);
    assert_eq!(tuned.proxy, Some("proxy.local:3128".to_string()));
}

#[test]
fn test_concurrent_copies_share_one_source() {
    use std::sync::Arc;
    use std::thread;

    let source = Arc::new(Message::new("alice".to_string(), None).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let source = Arc::clone(&source);
            thread::spawn(move || {
                source
                    .copy(|b| {
                        b.set_tag(format!("worker-{i}"));
                    })
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let copy = handle.join().unwrap();
        assert_eq!(copy.recipient, "alice");
        assert_eq!(copy.tag, Some(format!("worker-{i}")));
    }

    // Every copy saw the same untouched source.
    assert_eq!(source.recipient, "alice");
    assert_eq!(source.tag, None);
}
