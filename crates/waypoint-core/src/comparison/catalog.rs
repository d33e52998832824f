//! Destinations that can be compared.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationOption {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    /// Miles from Newark.
    pub distance_from_newark: u32,
    /// Hours of flying from Newark.
    pub flight_time: f64,
    pub climate: &'static str,
}

pub const DESTINATIONS: &[DestinationOption] = &[
    DestinationOption {
        id: "caribbean",
        name: "Caribbean",
        region: "Caribbean Islands",
        distance_from_newark: 1600,
        flight_time: 4.0,
        climate: "Tropical",
    },
    DestinationOption {
        id: "mexico",
        name: "Cancun, Mexico",
        region: "Mexico",
        distance_from_newark: 1550,
        flight_time: 3.5,
        climate: "Tropical",
    },
    DestinationOption {
        id: "bahamas",
        name: "Bahamas",
        region: "Caribbean",
        distance_from_newark: 1100,
        flight_time: 2.5,
        climate: "Tropical",
    },
    DestinationOption {
        id: "bermuda",
        name: "Bermuda",
        region: "Atlantic",
        distance_from_newark: 775,
        flight_time: 2.0,
        climate: "Subtropical",
    },
    DestinationOption {
        id: "hawaii",
        name: "Hawaii",
        region: "Pacific",
        distance_from_newark: 4950,
        flight_time: 11.0,
        climate: "Tropical",
    },
    DestinationOption {
        id: "europe",
        name: "Mediterranean",
        region: "Europe",
        distance_from_newark: 4280,
        flight_time: 9.0,
        climate: "Mediterranean",
    },
];

pub fn find_destination(id: &str) -> Option<&'static DestinationOption> {
    DESTINATIONS.iter().find(|destination| destination.id == id)
}
