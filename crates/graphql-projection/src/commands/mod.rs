mod project;

use crate::CommandResult;
use project::ProjectCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Project compiled operations and fragments into type declarations.
    Project(Box<ProjectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self) -> CommandResult {
        match self {
            Self::Project(cmd) => cmd.run().await,
        }
    }
}
