use crate::error::{GreeterError, GreeterResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/* 📖 # Why log to stderr with a fixed level?

Standard output carries the greeting and nothing else, so log lines go to stderr.
The level is fixed at WARN instead of being read from RUST_LOG.
The fmt layer still honours NO_COLOR, which only affects coloring of the stderr log lines.
*/

pub fn init_tracing() -> GreeterResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::WARN),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| {
            Box::new(GreeterError::message(format!(
                "failed to initialize tracing: {err}"
            )))
        })
}
