//! Main CLI parser.
//!
//! The report takes no inputs; the only options are ambient ones
//! (verbosity, help, version).

use clap::Parser;

use crate::error::CliError;

/// Print toolchain, platform and time, then confirm the program ran.
///
/// Used as a manual smoke test for an editor's auto-accept mode: if the
/// editor runs this without prompting, the banner appears.
#[derive(Debug, Parser)]
#[command(name = "smokecheck")]
#[command(about = "Print an environment banner confirming successful execution")]
#[command(version = smokecheck_build_info::LONG_VERSION)]
pub struct Cli {
    /// Enable verbose/debug log output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// Help and version requests print and exit here with clap's status;
    /// usage errors come back as [`CliError::Arguments`].
    pub fn parse_args() -> Result<Self, CliError> {
        Self::resolve(Self::try_parse())
    }

    fn resolve(parsed: Result<Self, clap::Error>) -> Result<Self, CliError> {
        match parsed {
            Ok(cli) => Ok(cli),
            Err(err) if err.use_stderr() => {
                Err(CliError::Arguments(err.render().to_string().trim_end().to_string()))
            }
            Err(err) => err.exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["smokecheck"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["smokecheck", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_positional_arguments_rejected() {
        let err = Cli::resolve(Cli::try_parse_from(["smokecheck", "extra"])).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::resolve(Cli::try_parse_from(["smokecheck", "--json"])).unwrap_err();
        assert!(err.to_string().contains("--json"));
    }
}
