use inmet::{Inmet, InmetError, PeriodOfDay, RingBufferSink};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), InmetError> {
    let sink = Arc::new(RingBufferSink::new(64));
    let client = Inmet::builder().sink(sink.clone()).build()?;

    let forecast = client.forecast("3550308").await;
    println!("live: {}, fallback: {}", forecast.is_live(), forecast.is_fallback());

    if let Some(days) = forecast.data().and_then(|f| f.days("3550308")) {
        for (date, day) in days {
            for (period, details) in day.periods() {
                if period == PeriodOfDay::Morning {
                    println!("{date} ({})", details.weekday);
                }
                println!(
                    "  {period}: {} {}°/{}°",
                    details.summary, details.temp_max, details.temp_min
                );
            }
        }
    }

    for entry in sink.entries() {
        println!("[{} {}] {}", entry.at.format("%H:%M:%S"), entry.level, entry.message);
    }

    Ok(())
}
