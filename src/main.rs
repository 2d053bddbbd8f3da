use dotenv::dotenv;
use itertools::Itertools;
use serde_json::json;
use speech_locations::{
    aggregate, classify,
    prelude::*,
    service::{
        log_service::set_logging,
        record_service::read_records,
        var_service::{
            get_location_preset, get_location_search, get_speeches_path, get_top_locations,
        },
    },
    AggregateMode, CanonicalLocation, resolve_records,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    set_logging().await?;

    let speeches_path = get_speeches_path().await?;
    let top_n = get_top_locations().await?;
    let preset = get_location_preset().await?;
    let search = get_location_search().await?;

    let records = read_records(&speeches_path).await?;
    tracing::info!("Loaded {} records from {}", records.len(), speeches_path.display());

    let locations = resolve_records(&records);
    let filtered: Vec<&CanonicalLocation> = locations
        .iter()
        .filter(|location| classify(location, preset))
        .filter(|location| match &search {
            Some(needle) => location.matches_text(needle),
            None => true,
        })
        .collect();
    tracing::info!(
        "{} of {} records match preset {:?}",
        filtered.len(),
        locations.len(),
        preset.label()
    );

    let labels = aggregate(filtered.iter().copied(), AggregateMode::Label);
    for (location, count) in labels.top(top_n) {
        println!("{}", json!({ "mode": "label", "key": location, "count": count }));
    }

    let states = aggregate(filtered.iter().copied(), AggregateMode::State);
    for (state, count) in &states.counts {
        println!("{}", json!({ "mode": "state", "key": state, "count": count }));
    }
    tracing::info!(
        "Speeches by state: {} total, {} excluded (abroad or unknown). Top states: {}",
        states.total(),
        states.excluded_count,
        states.top(5).iter().map(|(state, _)| state).join(", ")
    );

    Ok(())
}
