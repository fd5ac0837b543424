//! Wireframe console entry point

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wf_cli::{Console, Palette, Session, run_main_view};
use wf_core::Controller;

#[derive(Parser)]
#[command(name = "wf")]
#[command(about = "Edit wireframe models from the console")]
struct Args {
    /// Model file to open (.wf text or .ron snapshot); asked for when omitted
    path: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wf_cli=info,wf_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    tracing::info!("Starting wireframe console");

    let console = Console::new(
        io::stdin().lock(),
        io::stdout().lock(),
        Palette::new(!args.no_color),
    );
    let mut session = Session::new(Controller::new(), console);

    match run_main_view(&mut session, args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
