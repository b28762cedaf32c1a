use clap::{Args, Subcommand};

mod create;
mod find_room;
mod occupied;

#[derive(Debug, Args)]
pub(crate) struct BookingsCommand {
    #[command(subcommand)]
    command: BookingsSubcommand,
}

#[derive(Debug, Subcommand)]
enum BookingsSubcommand {
    Create(create::CreateBookingArgs),
    FindRoom(find_room::FindRoomArgs),
    Occupied(occupied::OccupiedArgs),
}

pub(crate) async fn run(command: BookingsCommand) -> Result<(), String> {
    match command.command {
        BookingsSubcommand::Create(args) => create::run(args).await,
        BookingsSubcommand::FindRoom(args) => find_room::run(args).await,
        BookingsSubcommand::Occupied(args) => occupied::run(args).await,
    }
}
