use crate::domain::{Reading, ReadingType};

/// Sample readings written to an absent or empty slot.
///
/// These predate the entry form's range check (204 is above 500) and use
/// meter codes outside "01".."10".
pub fn seed_readings() -> Vec<Reading> {
    vec![
        Reading {
            id: 201,
            date: "2025-12-01".to_string(),
            time: "09:20".to_string(),
            meter_id: "X10".to_string(),
            address: "Calle Aurora 12, Quilpué".to_string(),
            value: 245.7,
            kind: ReadingType::Kilowatts,
            note: Some("Lectura inicial".to_string()),
        },
        Reading {
            id: 202,
            date: "2025-12-02".to_string(),
            time: "13:05".to_string(),
            meter_id: "Y22".to_string(),
            address: "Av. El Sol 45, Viña del Mar".to_string(),
            value: 102.4,
            kind: ReadingType::Watts,
            note: Some("Prueba sensor".to_string()),
        },
        Reading {
            id: 203,
            date: "2025-12-03".to_string(),
            time: "18:40".to_string(),
            meter_id: "Z03".to_string(),
            address: "Pasaje Lirio 9, Valparaíso".to_string(),
            value: 19.8,
            kind: ReadingType::Temperature,
            note: Some("Exterior".to_string()),
        },
        Reading {
            id: 204,
            date: "2025-12-04".to_string(),
            time: "07:10".to_string(),
            meter_id: "W11".to_string(),
            address: "Camino Verde 200, Quilpué".to_string(),
            value: 510.2,
            kind: ReadingType::Kilowatts,
            note: Some("Consumo alto".to_string()),
        },
        Reading {
            id: 205,
            date: "2025-12-05".to_string(),
            time: "20:30".to_string(),
            meter_id: "V08".to_string(),
            address: "Calle Larga 77, Villa Alemana".to_string(),
            value: 64.6,
            kind: ReadingType::Watts,
            note: Some("Baja demanda".to_string()),
        },
    ]
}
