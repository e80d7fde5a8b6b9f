use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: torsnake [<options>]

Snake on a field whose edges wrap around

Options:
  -c, --config <path>     Read configuration from the given file
      --cells <n>         Number of cells along each side of the field
      --log-file <path>   Write log messages to the given file
  -h, --help              Display this help message and exit
  -V, --version           Show the program version and exit
";

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliAction {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) cells: Option<u16>,
    pub(crate) log_file: Option<PathBuf>,
}

impl CliAction {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliAction, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("cells") => args.cells = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(CliAction::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliAction::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliAction::Run(args))
    }
}
