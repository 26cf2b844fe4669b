//! dtmf - play touch-tone sequences on the default audio device
//!
//! Run with: cargo run -- 555 0123
//! Or pipe sequences in, one per line: echo "*67#" | cargo run

mod app;

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use app::{Args, Dialer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let dialer = Dialer::from_args(&args)?;
    dialer.run(args.digits).await
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
