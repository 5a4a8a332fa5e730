use crate::assess::{run_assess, run_batch, run_symptoms, AssessArgs, BatchArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use chv_triage::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "CHV Triage",
    about = "Serve and run rule-based triage guidance for community health volunteers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a single encounter from the command line
    Assess(AssessArgs),
    /// List the recognized symptom codes
    Symptoms,
    /// Assess every encounter in a CSV file
    Batch(BatchArgs),
    /// Walk through the reference field scenarios
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Symptoms => {
            run_symptoms();
            Ok(())
        }
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
