use inmet::{nearest, search, Inmet, InmetError, LatLon};

#[tokio::main]
async fn main() -> Result<(), InmetError> {
    let client = Inmet::new()?;
    let catalog = client.municipalities().await;
    println!("catalog is live: {}", catalog.is_live());
    let Some(catalog) = catalog.into_data() else {
        return Ok(());
    };

    let here = LatLon(-22.9099, -47.0626);
    if let Some((municipality, km)) = nearest(here, &catalog) {
        println!(
            "Closest to {:?}: {} - {} ({}) at {:.1} km",
            here, municipality.code, municipality.name, municipality.state, km
        );
    }

    for municipality in search("rio", &catalog).iter().take(10) {
        println!("{} {} ({})", municipality.code, municipality.name, municipality.state);
    }

    Ok(())
}
