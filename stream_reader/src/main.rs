use lambda_runtime::tracing::subscriber::{filter::LevelFilter, EnvFilter};
use lambda_runtime::{run, service_fn, tracing, Error};
mod decode;
mod error;
mod event_handler;
mod model;
mod sink;
use event_handler::function_handler;
use sink::TracingSink;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
    let sink = TracingSink;
    run(service_fn(|event| function_handler(event, &sink))).await
}
