//! Command-line interface for vector and hyperplane queries.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    cli::exec(args.subcommand, &mut std::io::stdout().lock())
}
