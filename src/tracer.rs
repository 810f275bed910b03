use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// installs the global stdout subscriber, filtered by `RUST_LOG`
pub fn init() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    println!("[TRACER] initialized");
    Ok(())
}
