use normkit_core::errors::{ExError, ExErrorKind, NormError};

#[test]
fn test_inconsistent_lengths_carries_key() {
    let err = NormError::InconsistentLengths {
        key: "last-name".to_string(),
        expected: 3,
        actual: 2,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InconsistentLengths);
    assert_eq!(ex_err.code(), "ERR_INCONSISTENT_LENGTHS");
    assert_eq!(ex_err.key(), Some("last-name"));
    assert_eq!(ex_err.op(), Some("normalize_stacked"));
    assert!(ex_err.message().contains("expected 3"));
}

#[test]
fn test_not_a_sequence_is_invalid_input() {
    let ex_err: ExError = NormError::NotASequence {
        key: "tags".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert_ne!(ex_err.kind(), ExErrorKind::InconsistentLengths);
}

#[test]
fn test_invalid_pattern_keeps_pattern() {
    let ex_err: ExError = NormError::InvalidPattern {
        pattern: "a*b".to_string(),
        reason: "too big".to_string(),
    }
    .into();

    assert_eq!(ex_err.code(), "ERR_INVALID_PATTERN");
    assert_eq!(ex_err.key(), Some("a*b"));
    assert_eq!(ex_err.message(), "too big");
}

#[test]
fn test_invalid_log_level_conversion() {
    let ex_err: ExError = NormError::InvalidLogLevel {
        level: "0".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidLogLevel);
    assert_eq!(ex_err.op(), Some("log"));
    assert!(ex_err.to_string().starts_with("[ERR_INVALID_LOG_LEVEL]"));
}

#[test]
fn test_error_messages_are_human_readable() {
    let err = NormError::SchemaAlreadyRegistered {
        name: "user".to_string(),
    };
    assert_eq!(err.to_string(), "Schema already registered: user");

    let err = NormError::RandomSourceUnavailable {
        reason: "no device".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Secure random source unavailable: no device"
    );
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::RandomSourceUnavailable,
        ExErrorKind::InvalidPattern,
        ExErrorKind::InconsistentLengths,
        ExErrorKind::InvalidInput,
        ExErrorKind::InvalidLogLevel,
        ExErrorKind::AlreadyExists,
        ExErrorKind::Serialization,
    ];
    let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}
