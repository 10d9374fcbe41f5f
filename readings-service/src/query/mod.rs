use std::collections::BTreeMap;

use readings_client::{
    db::SlotStorage,
    domain::{Reading, ReadingType},
    ReadingStore,
};

use crate::locale::Locale;

/// Rows per page in the review table.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Read-only views over a store's current collection.
pub struct ReadingQuery<'a, S> {
    store: &'a ReadingStore<S>,
}

impl<'a, S: SlotStorage> ReadingQuery<'a, S> {
    pub fn new(store: &'a ReadingStore<S>) -> Self {
        Self { store }
    }

    /// Readings of `kind` in stored order; everything when `kind` is `None`.
    pub fn filter_by_type(&self, kind: Option<&ReadingType>) -> Vec<Reading> {
        let readings = self.store.get_all();
        match kind {
            None => readings,
            Some(kind) => readings.into_iter().filter(|r| &r.kind == kind).collect(),
        }
    }

    /// Number of readings per type tag, including unrecognised tags.
    pub fn count_by_type(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for reading in self.store.get_all() {
            *counts.entry(reading.kind.as_tag().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Calendar key for a stored date. Seeded readings use `yyyy-mm-dd`, the
/// entry form writes `dd-<month name>-yyyy`.
fn date_key(date: &str) -> Option<(i32, u8, u8)> {
    let mut parts = date.trim().splitn(3, '-');
    let (first, second, third) = (parts.next()?, parts.next()?, parts.next()?);

    if first.len() == 4 {
        return Some((first.parse().ok()?, second.parse().ok()?, third.parse().ok()?));
    }

    let month = Locale::parse_month(second)?;
    Some((third.parse().ok()?, month as u8, first.parse().ok()?))
}

/// Newest first by calendar date. Dates that can't be read sort last.
/// Stable, so readings with equal dates keep their stored order.
pub fn sorted_by_date(mut readings: Vec<Reading>) -> Vec<Reading> {
    readings.sort_by(|a, b| date_key(&b.date).cmp(&date_key(&a.date)));
    readings
}

/// Zero-based page of `page_size` rows. Pages past the end are empty.
pub fn page(readings: &[Reading], index: usize, page_size: usize) -> &[Reading] {
    let start = index.saturating_mul(page_size).min(readings.len());
    let end = start.saturating_add(page_size).min(readings.len());
    &readings[start..end]
}
