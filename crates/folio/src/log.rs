pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

#[cfg(all(target_arch = "wasm32", feature = "dev-logging"))]
/// Setup the logging system for the admin console.
/// Installs the panic hook and routes [`tracing`] output to the browser console
/// through [`tracing-web`], with a performance layer for span timings.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
    use tracing_subscriber::fmt::time::UtcTime;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeConsoleWriter)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;

    Ok(())
}

#[cfg(all(target_arch = "wasm32", not(feature = "dev-logging")))]
/// Release builds only install the panic hook.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup the logging system for native binaries.
///
/// Installs [`color_eyre`] error reporting and a [`tracing_subscriber`] fmt
/// subscriber. `RUST_LIB_BACKTRACE` defaults to `1` and `RUST_LOG` defaults to
/// debug output for the folio crates when unset.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "folio=debug,folio_proxy=debug,tower_http=info") }
    }
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
