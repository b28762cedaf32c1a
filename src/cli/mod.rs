use clap::{Parser, Subcommand};

mod bookings;
mod db;
mod rooms;

#[derive(Debug, Parser)]
#[command(name = "vacancy", about = "Room booking CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Bookings(bookings::BookingsCommand),
    Rooms(rooms::RoomsCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Bookings(command) => bookings::run(command).await,
            Commands::Rooms(command) => rooms::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
