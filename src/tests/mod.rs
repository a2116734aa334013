
static ONCE: std::sync::Once = std::sync::Once::new();

/// Installs a logger once per test binary, so failing tests show the
/// compiler's trace.
pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
}
