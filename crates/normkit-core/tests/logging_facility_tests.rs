#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::mapping;
use normkit_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_FALLBACK, EVENT_LOG, EVENT_START, FIELD_CHANNEL,
    FIELD_CONTEXT, FIELD_COUNT, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_SEVERITY, FIELD_SOURCE,
};
use normkit_core::errors::NormError;
use normkit_core::logging_facility::test_capture::init_test_capture;
use normkit_core::schema_mapper::{register_all, SchemaRegistry};
use normkit_core::text::{random_or_fallback_with, EntropySource};
use normkit_core::{log_op_end, log_op_error, log_op_start};
use normkit_core::{LogLevel, Logger, Result, TracingWriter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1, "Should have exactly one start event");
}

#[test]
fn test_log_op_end_macro_with_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, count = 42usize);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_COUNT), Some("42"));
}

#[test]
fn test_log_op_error_includes_code_and_kind() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = NormError::InconsistentLengths {
        key: "last".to_string(),
        expected: 2,
        actual: 1,
    };
    log_op_error!(op_name, err);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = &capture.events_for(op_name)[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(
        event.field(FIELD_ERR_CODE),
        Some("ERR_INCONSISTENT_LENGTHS")
    );
    assert_eq!(event.field(FIELD_ERR_KIND), Some("InconsistentLengths"));
}

#[test]
fn test_tracing_writer_maps_levels_and_context() {
    let capture = init_test_capture();
    let channel = "tracing_writer_unique_4";
    let logger = Logger::new(TracingWriter::new(channel));

    logger.log(
        LogLevel::Critical,
        "disk full",
        &mapping(json!({"free": 0})),
    );
    logger.log(LogLevel::Notice, "rotated", &mapping(json!({})));
    logger.debug("details", &mapping(json!({"step": "b"})));

    let events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.field(FIELD_CHANNEL) == Some(channel))
        .collect();

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.event.as_deref() == Some(EVENT_LOG)));

    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field(FIELD_SEVERITY), Some("critical"));
    assert_eq!(events[0].message.as_deref(), Some("disk full"));
    let context: Value = serde_json::from_str(events[0].field(FIELD_CONTEXT).unwrap()).unwrap();
    assert_eq!(context, json!({"free": 0}));

    assert_eq!(events[1].level, Level::INFO);
    assert_eq!(events[2].level, Level::DEBUG);
}

#[test]
fn test_filtered_records_emit_nothing() {
    let capture = init_test_capture();
    let channel = "filtered_writer_unique_5";
    let mut logger = Logger::new(TracingWriter::new(channel));
    logger.set_level(LogLevel::Error);

    assert!(logger.info("quiet", &mapping(json!({}))).is_none());
    assert!(logger.log_raw(0, "bad", &mapping(json!({}))).is_err());

    let count = capture.count_events(|e| e.field(FIELD_CHANNEL) == Some(channel));
    assert_eq!(count, 0);
}

#[test]
fn test_random_fallback_is_logged_at_warn() {
    struct Unplugged;
    impl EntropySource for Unplugged {
        fn fill(&self, _dest: &mut [u8]) -> Result<()> {
            Err(NormError::RandomSourceUnavailable {
                reason: "unplugged".to_string(),
            })
        }
    }

    let capture = init_test_capture();
    let token = random_or_fallback_with(&Unplugged, &mut StdRng::seed_from_u64(9), 12);
    assert!(!token.is_secure());

    let fallback = capture
        .events_for("random")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_FALLBACK))
        .expect("fallback event");
    assert_eq!(fallback.level, Level::WARN);
    assert_eq!(fallback.field(FIELD_SOURCE), Some("fallback"));
    assert_eq!(
        fallback.field(FIELD_ERR_CODE),
        Some("ERR_RANDOM_SOURCE_UNAVAILABLE")
    );
}

#[test]
fn test_register_all_logs_start_end_and_error() {
    struct Sealed;
    impl SchemaRegistry for Sealed {
        fn register(&mut self, name: &str, _definition: &Value, _force: bool) -> Result<()> {
            Err(NormError::SchemaAlreadyRegistered {
                name: name.to_string(),
            })
        }
    }

    let capture = init_test_capture();
    let options = mapping(json!({"sealed_schema_unique_6": {}}));
    assert!(register_all(&mut Sealed, &options).is_err());

    let error = capture
        .events_for("register_all")
        .into_iter()
        .find(|e| e.field("schema") == Some("sealed_schema_unique_6"))
        .expect("error event");
    assert_eq!(error.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(error.field(FIELD_ERR_CODE), Some("ERR_ALREADY_EXISTS"));
}
