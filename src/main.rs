use gensamples::Options;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // entropy-seeded, so every run differs
    let mut rng = rand::thread_rng();
    gensamples::run(&Options::default(), &mut rng)?;
    Ok(())
}
