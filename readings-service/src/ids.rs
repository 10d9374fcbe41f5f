use time::OffsetDateTime;

/// Source of identifiers for newly entered readings.
pub trait IdGenerator {
    fn next_id(&mut self) -> u64;
}

/// Counter starting at a fixed value. Deterministic, for tests and imports.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Milliseconds since the Unix epoch, bumped past the previous id when two
/// calls land in the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    fn now_millis() -> u64 {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        u64::try_from(millis).unwrap_or(0)
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> u64 {
        let id = Self::now_millis().max(self.last + 1);
        self.last = id;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> u64 {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
        assert_eq!(ids.next_id(), 12);
    }

    #[test]
    fn clock_ids_never_repeat_within_a_millisecond() {
        let mut ids = ClockIds::default();
        let drawn: Vec<u64> = (0..1000).map(|_| ids.next_id()).collect();

        assert!(drawn.windows(2).all(|w| w[0] < w[1]));
        assert!(drawn[0] > 1_600_000_000_000);
    }
}
