//! # Logging
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Verbosity comes from
//! `RUST_LOG`; with nothing set only errors are shown.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=restaurant_orders::framework=debug cargo run
//! ```
//!
//! At `info` the store logs every create and every successful action with the entity id and
//! store size:
//!
//! ```text
//! INFO Created entity_type="Order" id=5 size=5
//! INFO Action ok entity_type="Order" id=2
//! INFO Countdown started period=60s minutes_per_tick=1
//! ```
//!
//! At `debug` the full request payloads are recorded as structured fields, once per request.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the top of `main`. Tests do not call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
