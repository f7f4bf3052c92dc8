use clap::Parser;
use iccpoc_cli::{Args, Subcommands};

fn main() -> std::process::ExitCode {
    let Args {
        subcommand,
        globals,
        generate,
    } = Args::parse();

    if !globals.quiet {
        let filter = match globals.verbose {
            0 => tracing::level_filters::LevelFilter::INFO,
            1 => tracing::level_filters::LevelFilter::DEBUG,
            2.. => tracing::level_filters::LevelFilter::TRACE,
        };
        let env_filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(filter.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
    }

    let result = match subcommand {
        Some(Subcommands::Generate(args)) => iccpoc_cli::generate::handle_generate(args),
        None => iccpoc_cli::generate::handle_generate(generate),
        Some(Subcommands::Inspect(args)) => iccpoc_cli::inspect::handle_inspect(args),
    };

    if let Err(e) = result {
        if globals.quiet {
            eprintln!("error: {e:#}");
        } else {
            tracing::error!("{e:#}");
        }
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}
