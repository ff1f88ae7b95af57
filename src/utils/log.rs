use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGER: std::sync::Once = std::sync::Once::new();

/// Install the subscriber once; embedding hosts and tests may both call this.
pub fn init_logger_once() {
    INIT_LOGGER.call_once(|| {
        let env_filter = EnvFilter::from_default_env()
            .add_directive(Level::INFO.into())
            .add_directive("wistia_connect=debug".parse().expect("valid directive"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .init();
    });
}
