use clap::Args;
use sqlx::query_scalar;
use vacancy::database;

#[derive(Debug, Args)]
pub(crate) struct AddRoomArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Room description, e.g. a room number or name
    #[arg(long)]
    description: String,
}

pub(crate) async fn run(args: AddRoomArgs) -> Result<(), String> {
    if args.description.trim().is_empty() {
        return Err("description cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    // Room lifecycle is administrative; it does not go through the booking
    // stores.
    let room_id: i64 = query_scalar("INSERT INTO rooms (description) VALUES ($1) RETURNING id")
        .bind(&args.description)
        .fetch_one(&pool)
        .await
        .map_err(|error| format!("failed to add room: {error}"))?;

    println!("room_id: {room_id}");

    Ok(())
}
