use crate::demo::{
    run_dashboard, run_demo, run_export, DashboardArgs, DemoArgs, ExportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jobflow::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Tracker",
    about = "Serve and inspect the job-application tracker from the command line",
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
    /// Print a dashboard report for a collection of applications
    Dashboard(DashboardArgs),
    /// Write the CSV export for a collection of applications
    Export(ExportArgs),
    /// Run an end-to-end CLI demo over the bundled sample collection
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
    /// JSON file of applications to seed the in-memory store
    #[arg(long)]
    pub(crate) applications: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard(args) => run_dashboard(args),
        Command::Export(args) => run_export(args),
        Command::Demo(args) => run_demo(args),
    }
}
