//! Subscriber installation for registry hosts.

use fleet_telemetry::{init_logging, TelemetryConfig, TelemetryError};

#[test]
fn test_second_install_is_reported() {
    let config = TelemetryConfig {
        console_output: false,
        ..TelemetryConfig::for_registry("latency-sc")
    };

    // Only the first install in this process can succeed.
    let _ = init_logging(&config);
    assert!(matches!(
        init_logging(&config),
        Err(TelemetryError::AlreadyInitialized(_))
    ));
}

#[test]
fn test_container_environment_switches_to_json() {
    let config = TelemetryConfig::from_lookup(|key| match key {
        "KUBERNETES_SERVICE_HOST" => Some("10.96.0.1".to_string()),
        "FLEET_SERVICE_NAME" => Some("fleet-inventory-sc".to_string()),
        _ => None,
    });
    assert!(config.json_logs);
    assert_eq!(config.service_name, "fleet-inventory-sc");
}
