use guesswork::TARGET;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "guesswork=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = guesswork::cli::guesswork::run() {
        if !e.is_interrupted() {
            tracing::error!(target: TARGET, "{}", e);
        }
        std::process::exit(1);
    }
}
