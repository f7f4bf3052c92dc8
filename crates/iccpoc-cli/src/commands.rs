pub mod generate;
pub mod inspect;

pub use generate::GenerateArgs;
pub use inspect::InspectArgs;

#[derive(Debug, clap::Parser)]
#[command(version, about = "Generate an ICC profile with an unterminated colorant name")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommands>,
    #[command(flatten)]
    pub generate: GenerateArgs,
    #[command(flatten)]
    pub globals: GlobalArgs,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct GlobalArgs {
    /// Print debug information; can be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Do not print logs to console.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommands {
    /// Write the crafted profile (assumed if no subcommand is specified).
    #[command(short_flag = 'g')]
    Generate(GenerateArgs),
    /// Report the structure of an existing profile.
    #[command(short_flag = 'I')]
    Inspect(InspectArgs),
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn no_arguments_means_generate_defaults() {
        let args = Args::try_parse_from(["iccpoc"]).unwrap();
        assert!(args.subcommand.is_none());
        assert_eq!(
            args.generate.output,
            std::path::PathBuf::from(iccpoc_core::DEFAULT_OUTPUT)
        );
        assert_eq!(args.generate.entries, 1);
        assert_eq!(args.generate.fill, b'A');
        assert!(!args.generate.json);
    }

    #[test]
    fn generate_flags() {
        let args =
            Args::try_parse_from(["iccpoc", "-o", "out.icc", "--entries", "4", "--fill", "0x7e"])
                .unwrap();
        assert_eq!(args.generate.output, std::path::PathBuf::from("out.icc"));
        assert_eq!(args.generate.entries, 4);
        assert_eq!(args.generate.fill, b'~');
    }

    #[test]
    fn inspect_subcommand() {
        let args = Args::try_parse_from(["iccpoc", "inspect", "x.icc", "-v"]).unwrap();
        assert_eq!(args.globals.verbose, 1);
        match args.subcommand {
            Some(Subcommands::Inspect(inspect)) => {
                assert_eq!(inspect.input, std::path::PathBuf::from("x.icc"));
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn zero_fill_rejected() {
        assert!(Args::try_parse_from(["iccpoc", "--fill", "0x00"]).is_err());
    }
}
