use std::error::Error;

use station_board::board::{next_train_for_direction, station_directions};
use station_board::domain::StationName;
use station_board::irishrail::{StationClient, StationClientConfig};
use tracing_subscriber::EnvFilter;

/// Station queried when no name is given on the command line.
const DEFAULT_STATION: &str = "Malahide";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STATION.to_string());
    let station = StationName::parse(&name)?;

    let client = StationClient::new(StationClientConfig::new())?;
    let trains = client.fetch_station(&station).await?;

    let directions = station_directions(&station, &trains);

    println!("Next trains from {station}");

    for direction in &directions {
        match next_train_for_direction(&station, &trains, direction) {
            Some(next) => println!(
                "{direction}: {dest}\t\t{due} minutes",
                dest = next.destination,
                due = next.actual_due
            ),
            None => println!("No {} trains", direction.as_str().to_lowercase()),
        }
    }

    Ok(())
}
