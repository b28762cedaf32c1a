use clap::Args;
use jiff::civil::Date;
use vacancy::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct OccupiedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// First date of the window (YYYY-MM-DD)
    #[arg(long)]
    start_date: Date,

    /// Last date of the window (YYYY-MM-DD)
    #[arg(long)]
    end_date: Date,
}

pub(crate) async fn run(args: OccupiedArgs) -> Result<(), String> {
    let ctx = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise application: {error}"))?;

    let dates = ctx
        .bookings
        .fully_occupied_dates(args.start_date, args.end_date)
        .await
        .map_err(|error| format!("failed to list fully occupied dates: {error}"))?;

    if dates.is_empty() {
        println!(
            "no fully occupied dates between {} and {}",
            args.start_date, args.end_date
        );
        return Ok(());
    }

    for date in dates {
        println!("{date}");
    }

    Ok(())
}
