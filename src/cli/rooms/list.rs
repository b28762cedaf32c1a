use clap::Args;
use vacancy::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct ListRoomsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListRoomsArgs) -> Result<(), String> {
    let ctx = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise application: {error}"))?;

    let rooms = ctx
        .rooms
        .list()
        .await
        .map_err(|error| format!("failed to list rooms: {error}"))?;

    if rooms.is_empty() {
        println!("no rooms found");
        return Ok(());
    }

    for room in rooms {
        println!("room_id: {}", room.id);
        println!("description: {}", room.description);
        println!();
    }

    Ok(())
}
