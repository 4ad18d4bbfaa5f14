use super::*;

#[test]
fn test_config_error_display_messages() {
    let missing = ConfigError::MissingCredential {
        service: "Microsoft Translator Azure".to_string(),
        key: "MICROSOFT_TRANSLATOR_KEY".to_string(),
    };
    assert_eq!(
        missing.to_string(),
        "missing credential for Microsoft Translator Azure: set MICROSOFT_TRANSLATOR_KEY"
    );

    let invalid = ConfigError::InvalidCredential {
        service: "Microsoft Translator RapidApi".to_string(),
    };
    assert_eq!(
        invalid.to_string(),
        "credential for Microsoft Translator RapidApi is not a valid header value"
    );

    let timeout = ConfigError::InvalidTimeout { timeout_ms: 0 };
    assert_eq!(timeout.to_string(), "invalid timeout: 0 ms");
}

#[test]
fn test_translate_error_display_messages() {
    let transport = TranslateError::Transport {
        service: "Microsoft Translator Azure".to_string(),
        message: "connection refused".to_string(),
    };
    assert_eq!(
        transport.to_string(),
        "transport error [service=Microsoft Translator Azure]: connection refused"
    );

    let protocol = TranslateError::Protocol {
        service: "Microsoft Translator Azure".to_string(),
        message: "response array is empty".to_string(),
    };
    assert_eq!(
        protocol.to_string(),
        "protocol error [service=Microsoft Translator Azure]: response array is empty"
    );
}

#[test]
fn test_failure_kind_mapping() {
    let transport = TranslateError::Transport {
        service: "svc".to_string(),
        message: "timeout".to_string(),
    };
    assert_eq!(transport.failure_kind(), FailureKind::Transport);

    let serialization = TranslateError::Serialization {
        service: "svc".to_string(),
        message: "bad payload".to_string(),
    };
    assert_eq!(serialization.failure_kind(), FailureKind::Protocol);

    let protocol = TranslateError::Protocol {
        service: "svc".to_string(),
        message: "not an array".to_string(),
    };
    assert_eq!(protocol.failure_kind(), FailureKind::Protocol);
}
