use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Build a subscriber that writes to the test harness's captured output.
///
/// `RUST_LOG` takes precedence over `env_filter` when set.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let writer = fmt::Layer::new()
        .with_test_writer()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(writer)
}

/// Install the test subscriber. Safe to call from every test; only the first
/// call in a process takes effect.
pub fn init_test_tracing() {
    let _ = LogTracer::init();
    let _ = get_subscriber("error".into()).try_init();
}
