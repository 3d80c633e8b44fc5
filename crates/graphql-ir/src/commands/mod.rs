mod rewrite;

use crate::Cli;
use crate::CommandResult;
use rewrite::RewriteCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-ir")]
pub(crate) enum CommandEnum {
    /// Rewrite executable documents into the typed IR tree and print it.
    Rewrite(Box<RewriteCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Rewrite(cmd) => cmd.run(cli).await
        }
    }
}
