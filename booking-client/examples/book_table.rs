//! Book a table against a running booking store
//!
//! ```bash
//! cargo run -p booking-store &
//! BOOKING_API_URL=http://localhost:3001 cargo run -p booking-client --example book_table
//! ```

use booking_client::{BookingSession, Clock, ClientConfig, DraftField, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_client=debug".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    println!("Booking store: {}", config.bookings_url());
    let store = config.build_store()?;

    let mut session = BookingSession::new();
    let tomorrow = SystemClock.today().succ_opt().ok_or("calendar overflow")?;
    session.update_field(DraftField::Date(Some(tomorrow)))?;

    println!("\nSlots for {}:", tomorrow);
    for slot in session.availability() {
        println!("  {} {}", slot.slot, if slot.eligible { "open" } else { "-" });
    }

    let slot = session
        .availability()
        .into_iter()
        .find(|s| s.eligible)
        .map(|s| s.slot)
        .ok_or("no open slots")?;

    session.update_field(DraftField::Time(slot))?;
    session.update_field(DraftField::Name("Ada Lovelace".into()))?;
    session.update_field(DraftField::Email("ada@example.com".into()))?;
    session.update_field(DraftField::Phone("555-0100".into()))?;
    session.update_field(DraftField::Guests(2))?;

    if let Some(summary) = session.summary() {
        println!("\n{} at {} for {}", summary.date, summary.time, summary.guests);
    }

    match session.submit(&store).await {
        Ok(_) => {
            let view = session.confirmation();
            println!("\n{}", view.title());
            for field in view.fields() {
                println!("  {:<7} {}", field.label, field.value);
            }
        }
        Err(e) => println!("\n❌ {}", e),
    }

    for notice in session.take_notices() {
        println!("[{:?}] {}: {}", notice.kind, notice.title, notice.description);
    }

    Ok(())
}
