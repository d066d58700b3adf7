//! Logging for integration test binaries; same initializer as unit tests.
//! Set `TEST_LOG=info` to see handler events.

#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    backoffice_test_support::logging::init();
}
