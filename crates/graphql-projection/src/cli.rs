use clap::CommandFactory;
use crate::commands::CommandEnum;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Project compiled GraphQL operations and fragments into structural \
             type declarations.",
    name = "graphql-projection",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<CommandEnum>,

    #[arg(
        help="Log at DEBUG level regardless of `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub(crate) verbose: bool,
}
impl Cli {
    pub(crate) fn print_help(&self) -> std::io::Result<()> {
        Self::command().print_help()
    }
}
