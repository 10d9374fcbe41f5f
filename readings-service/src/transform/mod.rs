use readings_client::{
    db::SlotStorage,
    domain::{Reading, ReadingType},
    ReadingStore, StoreError,
};
use time::PrimitiveDateTime;

use crate::{ids::IdGenerator, locale::Locale};

/// Meter codes offered by the entry form.
pub const METER_CODES: [&str; 10] = ["01", "02", "03", "04", "05", "06", "07", "08", "09", "10"];

/// What the rich-text address editor emits when it is left blank.
pub const EMPTY_RICH_TEXT: &str = "<p><br></p>";

pub const MIN_VALUE_EXCLUSIVE: f64 = 9.0;
pub const MAX_VALUE_INCLUSIVE: f64 = 500.0;

pub const MSG_DATE_TIME: &str = "Debe seleccionar la fecha y hora.";
pub const MSG_METER: &str = "Debe seleccionar el medidor.";
pub const MSG_ADDRESS: &str = "Debe ingresar la dirección.";
pub const MSG_VALUE: &str = "El valor debe ser mayor que 9 y menor o igual a 500.";
pub const MSG_TYPE: &str = "Debe seleccionar el tipo de medida.";

/// Raw entry-form input. Every field may be unset.
#[derive(Debug, Clone, Default)]
pub struct ReadingCandidate {
    pub date_time: Option<PrimitiveDateTime>,
    pub meter_id: Option<String>,
    pub address: Option<String>,
    pub value: Option<f64>,
    pub kind: Option<ReadingType>,
    pub note: Option<String>,
}

/// One or more entry-form fields failed their checks.
///
/// `messages` are in form order and meant to be shown to the operator as is.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{}", .messages.join(" "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn address_is_blank(address: &str) -> bool {
    address.replace(EMPTY_RICH_TEXT, "").trim().is_empty()
}

fn value_in_range(value: f64) -> bool {
    value > MIN_VALUE_EXCLUSIVE && value <= MAX_VALUE_INCLUSIVE
}

fn format_date(date_time: PrimitiveDateTime, locale: Locale) -> String {
    format!(
        "{:02}-{}-{}",
        date_time.day(),
        locale.month_name(date_time.month()),
        date_time.year()
    )
}

fn format_time(date_time: PrimitiveDateTime) -> String {
    format!("{:02}:{:02}", date_time.hour(), date_time.minute())
}

/// Pure validation of entry-form input.
///
/// Rules, all checked:
/// - date and time are set.
/// - meter is set and one of [`METER_CODES`].
/// - address is non-blank once the empty rich-text placeholder is removed.
/// - value is set and within (9, 500].
/// - type is one of the three known kinds.
///
/// An id is drawn from `ids` only when every rule passes.
pub fn validate_reading(
    candidate: &ReadingCandidate,
    ids: &mut dyn IdGenerator,
    locale: Locale,
) -> Result<Reading, ValidationError> {
    let mut messages = Vec::new();

    if candidate.date_time.is_none() {
        messages.push(MSG_DATE_TIME.to_string());
    }

    let meter_ok = candidate
        .meter_id
        .as_deref()
        .is_some_and(|m| METER_CODES.contains(&m));
    if !meter_ok {
        messages.push(MSG_METER.to_string());
    }

    if candidate.address.as_deref().map_or(true, address_is_blank) {
        messages.push(MSG_ADDRESS.to_string());
    }

    if !candidate.value.is_some_and(value_in_range) {
        messages.push(MSG_VALUE.to_string());
    }

    if !candidate.kind.as_ref().is_some_and(ReadingType::is_known) {
        messages.push(MSG_TYPE.to_string());
    }

    match (
        candidate.date_time,
        &candidate.meter_id,
        &candidate.address,
        candidate.value,
        &candidate.kind,
    ) {
        (Some(date_time), Some(meter_id), Some(address), Some(value), Some(kind))
            if messages.is_empty() =>
        {
            Ok(Reading {
                id: ids.next_id(),
                date: format_date(date_time, locale),
                time: format_time(date_time),
                meter_id: meter_id.clone(),
                address: address.clone(),
                value,
                kind: kind.clone(),
                note: candidate.note.clone(),
            })
        }
        _ => Err(ValidationError { messages }),
    }
}

/// Entry-form gate: validates candidates and hands accepted readings to a
/// store.
pub struct ReadingEntry<G> {
    ids: G,
    locale: Locale,
}

impl<G: IdGenerator> ReadingEntry<G> {
    pub fn new(ids: G, locale: Locale) -> Self {
        Self { ids, locale }
    }

    pub fn validate(&mut self, candidate: &ReadingCandidate) -> Result<Reading, ValidationError> {
        match validate_reading(candidate, &mut self.ids, self.locale) {
            Ok(reading) => Ok(reading),
            Err(e) => {
                metrics::counter!("readings_validation_rejected_total").increment(1);
                tracing::debug!(errors = e.messages.len(), "reading candidate rejected");
                Err(e)
            }
        }
    }

    /// Validate `candidate` and append it to `store`.
    pub fn register<S: SlotStorage>(
        &mut self,
        store: &mut ReadingStore<S>,
        candidate: &ReadingCandidate,
    ) -> Result<Reading, EntryError> {
        let reading = self.validate(candidate)?;
        store.add(reading.clone())?;
        tracing::info!(
            id = reading.id,
            meter = %reading.meter_id,
            kind = %reading.kind,
            "reading registered"
        );
        Ok(reading)
    }
}
