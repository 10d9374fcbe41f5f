use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of magnitude a reading measures.
///
/// Stored as the tag the entry form writes (`"Kilowatts"`, `"Watts"`,
/// `"Temperatura"`). Tags written by anything else are kept verbatim in
/// `Other` so existing slot content survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReadingType {
    Kilowatts,
    Watts,
    Temperature,
    Other(String),
}

impl ReadingType {
    /// The three kinds an operator can pick when entering a reading.
    pub const KNOWN: [ReadingType; 3] = [
        ReadingType::Kilowatts,
        ReadingType::Watts,
        ReadingType::Temperature,
    ];

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Kilowatts => "Kilowatts",
            Self::Watts => "Watts",
            Self::Temperature => "Temperatura",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ReadingType {
    fn from(tag: &str) -> Self {
        match tag {
            "Kilowatts" => Self::Kilowatts,
            "Watts" => Self::Watts,
            "Temperatura" => Self::Temperature,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ReadingType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Kilowatts" | "Watts" | "Temperatura" => Self::from(tag.as_str()),
            _ => Self::Other(tag),
        }
    }
}

impl From<ReadingType> for String {
    fn from(kind: ReadingType) -> Self {
        match kind {
            ReadingType::Other(tag) => tag,
            known => known.as_tag().to_string(),
        }
    }
}

impl fmt::Display for ReadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One recorded meter measurement.
///
/// Field names on the wire are the ones already present in persisted slots
/// (`fecha`, `hora`, `medidor`, ...). `date` and `time` are kept exactly as
/// stored; readings entered through the form and seeded readings use
/// different date layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: u64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "medidor")]
    pub meter_id: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "tipo")]
    pub kind: ReadingType,
    #[serde(rename = "observacion", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_uses_persisted_field_names() {
        let reading = Reading {
            id: 7,
            date: "2025-12-03".to_string(),
            time: "18:40".to_string(),
            meter_id: "Z03".to_string(),
            address: "Pasaje Lirio 9".to_string(),
            value: 19.8,
            kind: ReadingType::Temperature,
            note: None,
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["fecha"], "2025-12-03");
        assert_eq!(json["hora"], "18:40");
        assert_eq!(json["medidor"], "Z03");
        assert_eq!(json["direccion"], "Pasaje Lirio 9");
        assert_eq!(json["valor"], 19.8);
        assert_eq!(json["tipo"], "Temperatura");
        assert!(json.get("observacion").is_none());
    }

    #[test]
    fn unknown_type_tag_is_preserved() {
        let raw = r#"{"id":1,"fecha":"f","hora":"h","medidor":"01","direccion":"d","valor":5,"tipo":"Voltios"}"#;
        let reading: Reading = serde_json::from_str(raw).unwrap();

        assert_eq!(reading.kind, ReadingType::Other("Voltios".to_string()));
        assert!(!reading.kind.is_known());
        assert_eq!(reading.value, 5.0);
        assert_eq!(reading.note, None);

        let back = serde_json::to_value(&reading).unwrap();
        assert_eq!(back["tipo"], "Voltios");
    }

    #[test]
    fn known_tags_map_to_variants() {
        assert_eq!(ReadingType::from("Kilowatts"), ReadingType::Kilowatts);
        assert_eq!(ReadingType::from("Watts"), ReadingType::Watts);
        assert_eq!(ReadingType::from("Temperatura"), ReadingType::Temperature);
        assert_eq!(
            ReadingType::from("Temperature"),
            ReadingType::Other("Temperature".to_string())
        );
    }
}
