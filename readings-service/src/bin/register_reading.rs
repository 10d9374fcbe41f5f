use anyhow::{bail, Result};
use readings_client::{db::FileSlot, ReadingStore, ReadingType};
use readings_service::{
    config::AppConfig,
    format::format_value,
    observability,
    transform::{EntryError, ReadingCandidate, ReadingEntry},
};
use std::env;
use time::{macros::format_description, PrimitiveDateTime};

const USAGE: &str =
    "usage: register_reading <yyyy-mm-dd HH:MM> <medidor> <direccion> <valor> <tipo> [observacion]";

/// Turn positional arguments into a candidate. Missing or unparseable fields
/// stay unset so the validator reports them.
fn candidate_from_args(args: &[String]) -> ReadingCandidate {
    let field = |idx: usize| args.get(idx).map(|s| s.trim()).filter(|s| !s.is_empty());
    let date_time_format = format_description!("[year]-[month]-[day] [hour]:[minute]");

    ReadingCandidate {
        date_time: field(0).and_then(|s| PrimitiveDateTime::parse(s, &date_time_format).ok()),
        meter_id: field(1).map(str::to_string),
        address: field(2).map(str::to_string),
        value: field(3).and_then(|s| s.parse().ok()),
        kind: field(4).map(ReadingType::from),
        note: field(5).map(str::to_string),
    }
}

fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        bail!(USAGE);
    }

    let cfg = AppConfig::load()?;

    let mut store = ReadingStore::new(FileSlot::new(&cfg.storage.dir, cfg.storage.slot.as_str()));
    store.initialize()?;

    let mut entry = ReadingEntry::new(cfg.entry.ids.generator(), cfg.entry.locale);

    match entry.register(&mut store, &candidate_from_args(&args)) {
        Ok(reading) => {
            tracing::info!(
                id = reading.id,
                fecha = %reading.date,
                hora = %reading.time,
                valor = %format_value(&reading),
                "La lectura se ha registrado exitosamente."
            );
            Ok(())
        }
        Err(EntryError::Invalid(e)) => {
            for message in &e.messages {
                tracing::warn!("{message}");
            }
            bail!("{e}");
        }
        Err(e) => Err(e.into()),
    }
}
