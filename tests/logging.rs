use serial_test::serial;

// The subscriber is process-global, so these must not run in parallel with
// each other.

#[test]
#[serial]
fn init_succeeds() {
    weatherdeck::logging::init(true);
    tracing::debug!("logging smoke test");
}

#[test]
#[serial]
fn repeat_init_is_harmless() {
    weatherdeck::logging::init(false);
    weatherdeck::logging::init(true);
    tracing::info!("still alive after double init");
}
