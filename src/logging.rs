use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once, early in `main`.
///
/// `RUST_LOG` is honoured when set (e.g. "dot_paint=debug"); otherwise only info and
/// above is shown. Later calls are ignored.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        // Another logger may already be installed (e.g. by a test harness)
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}
