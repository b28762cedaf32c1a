use clap::Args;
use jiff::{Zoned, civil::Date};
use vacancy::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct FindRoomArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long)]
    start_date: Date,

    /// Last night of the stay (YYYY-MM-DD)
    #[arg(long)]
    end_date: Date,
}

pub(crate) async fn run(args: FindRoomArgs) -> Result<(), String> {
    let ctx = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise application: {error}"))?;

    let today = Zoned::now().date();

    let room = ctx
        .bookings
        .find_available_room(args.start_date, args.end_date, today)
        .await
        .map_err(|error| format!("failed to find a room: {error}"))?;

    match room {
        Some(room_id) => println!("room_id: {room_id}"),
        None => println!(
            "no room available for {} to {}",
            args.start_date, args.end_date
        ),
    }

    Ok(())
}
