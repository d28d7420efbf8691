pub(crate) mod merge;

use crate::Cli;
use crate::CommandResult;
use merge::MergeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "batchql")]
pub(crate) enum CommandEnum {
    /// Merge GraphQL query files into a single batched query.
    Merge(Box<MergeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Merge(cmd) => cmd.run(cli).await
        }
    }
}
