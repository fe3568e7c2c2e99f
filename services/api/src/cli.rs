use crate::demo::{run_demo, run_filters, run_jobs_list, CatalogArgs, JobsListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use summit_jobs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "THAT Summit job board",
    about = "Serve and browse the THAT Summit job board from the command line",
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
    /// Browse the job catalog without starting the server
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Walk the catalog through a few representative visitor queries
    Demo(CatalogArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Print one page of postings matching the given search and filters
    List(JobsListArgs),
    /// Print the dropdown values offered for each filter
    Filters(CatalogArgs),
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
        Command::Jobs {
            command: JobsCommand::List(args),
        } => run_jobs_list(args),
        Command::Jobs {
            command: JobsCommand::Filters(args),
        } => run_filters(args),
        Command::Demo(args) => run_demo(args),
    }
}
