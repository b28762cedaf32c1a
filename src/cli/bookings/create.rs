use clap::Args;
use jiff::{Zoned, civil::Date};
use vacancy::{
    context::AppContext,
    domain::bookings::models::{CustomerId, NewBooking},
};

#[derive(Debug, Args)]
pub(crate) struct CreateBookingArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Customer identifier
    #[arg(long)]
    customer_id: i64,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long)]
    start_date: Date,

    /// Last night of the stay (YYYY-MM-DD)
    #[arg(long)]
    end_date: Date,
}

pub(crate) async fn run(args: CreateBookingArgs) -> Result<(), String> {
    let ctx = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise application: {error}"))?;

    let request = NewBooking::new(
        CustomerId::from_i64(args.customer_id),
        args.start_date,
        args.end_date,
    );

    let today = Zoned::now().date();

    let created = ctx
        .bookings
        .create_booking(request, today)
        .await
        .map_err(|error| format!("failed to create booking: {error}"))?;

    if created {
        println!(
            "booking created for {} to {}",
            args.start_date, args.end_date
        );
    } else {
        println!(
            "no room available for {} to {}",
            args.start_date, args.end_date
        );
    }

    Ok(())
}
