use clap::{Args, Subcommand};

mod add;
mod list;

#[derive(Debug, Args)]
pub(crate) struct RoomsCommand {
    #[command(subcommand)]
    command: RoomsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoomsSubcommand {
    List(list::ListRoomsArgs),
    Add(add::AddRoomArgs),
}

pub(crate) async fn run(command: RoomsCommand) -> Result<(), String> {
    match command.command {
        RoomsSubcommand::List(args) => list::run(args).await,
        RoomsSubcommand::Add(args) => add::run(args).await,
    }
}
