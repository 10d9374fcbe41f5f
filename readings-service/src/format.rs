use readings_client::domain::{Reading, ReadingType};

/// Display unit for a reading type. Unrecognised types have no unit.
pub fn unit_for(kind: &ReadingType) -> &'static str {
    match kind {
        ReadingType::Kilowatts => "kW",
        ReadingType::Watts => "W",
        ReadingType::Temperature => "C",
        ReadingType::Other(_) => "",
    }
}

/// `"<value> <unit>"`, the way the review table shows a reading.
pub fn format_value(reading: &Reading) -> String {
    format!("{} {}", reading.value, unit_for(&reading.kind))
}
