//! # Observability
//!
//! Tracing setup for the whole actor system. Log verbosity is controlled via
//! `RUST_LOG` (`info` for lifecycle events, `debug` to see full request
//! payloads). The compact format shows span hierarchy inline, e.g.
//! `INFO checkout:place_order: Sending request`.

/// Initializes the global tracing subscriber.
///
/// Call once, at the top of `main`. Module paths are suppressed in favor of
/// the `entity_type` field the actors attach to every log line.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
