use anyhow::Result;
use readings_client::{db::FileSlot, ReadingStore, ReadingType};
use readings_service::{
    config::AppConfig,
    format::format_value,
    observability,
    query::{sorted_by_date, ReadingQuery},
};
use std::env;

fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;

    // Optional type filter, given as the stored tag ("Kilowatts", "Watts", "Temperatura").
    let filter: Option<ReadingType> = env::args().nth(1).map(ReadingType::from);

    let mut store = ReadingStore::new(FileSlot::new(&cfg.storage.dir, cfg.storage.slot.as_str()));
    store.subscribe(|change| tracing::debug!(?change, "readings slot changed"));

    if store.initialize()? {
        tracing::info!(dir = %cfg.storage.dir.display(), "readings slot was empty, seed installed");
    }

    let query = ReadingQuery::new(&store);
    let readings = sorted_by_date(query.filter_by_type(filter.as_ref()));

    for reading in &readings {
        tracing::info!(
            id = reading.id,
            fecha = %reading.date,
            hora = %reading.time,
            medidor = %reading.meter_id,
            valor = %format_value(reading),
            "reading"
        );
    }

    for (kind, count) in query.count_by_type() {
        tracing::info!(kind = %kind, count, "readings by type");
    }

    tracing::info!(
        shown = readings.len(),
        filter = filter.as_ref().map(ReadingType::as_tag).unwrap_or("none"),
        "audit complete"
    );

    Ok(())
}
