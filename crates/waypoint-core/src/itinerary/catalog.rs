//! Sample itineraries a plan can start from.

#[derive(Debug, Clone, Copy)]
pub struct ExcursionTemplate {
    pub name: &'static str,
    pub duration: &'static str,
    pub price: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PortTemplate {
    pub name: &'static str,
    pub country: &'static str,
    pub arrival_time: &'static str,
    pub departure_time: &'static str,
    pub day_number: u32,
    pub description: &'static str,
    pub top_attractions: &'static [&'static str],
    pub excursions: &'static [ExcursionTemplate],
}

#[derive(Debug, Clone, Copy)]
pub struct ItineraryTemplate {
    pub key: &'static str,
    pub cruise_line: &'static str,
    pub ship_name: &'static str,
    pub departure_port: &'static str,
    pub duration: u32,
    pub ports: &'static [PortTemplate],
}

pub const ITINERARY_TEMPLATES: &[ItineraryTemplate] = &[
    ItineraryTemplate {
        key: "caribbean-7",
        cruise_line: "Royal Caribbean",
        ship_name: "Symphony of the Seas",
        departure_port: "Cape Liberty, Bayonne NJ",
        duration: 7,
        ports: &[
            PortTemplate {
                name: "Cape Liberty",
                country: "New Jersey",
                arrival_time: "Embarkation",
                departure_time: "4:00 PM",
                day_number: 1,
                description: "Convenient departure from Bayonne, just 30 minutes from Newark",
                top_attractions: &["Statue of Liberty views", "Manhattan skyline"],
                excursions: &[],
            },
            PortTemplate {
                name: "Perfect Day at CocoCay",
                country: "Bahamas",
                arrival_time: "8:00 AM",
                departure_time: "5:00 PM",
                day_number: 3,
                description: "Royal Caribbean's private island paradise",
                top_attractions: &["Thrill Waterpark", "Oasis Lagoon", "Coco Beach Club"],
                excursions: &[
                    ExcursionTemplate {
                        name: "Beach Day Pass",
                        duration: "All Day",
                        price: 0.0,
                        description: "Enjoy free beach access",
                    },
                    ExcursionTemplate {
                        name: "Thrill Waterpark",
                        duration: "All Day",
                        price: 89.0,
                        description: "13 waterslides and wave pool",
                    },
                ],
            },
            PortTemplate {
                name: "Nassau",
                country: "Bahamas",
                arrival_time: "8:00 AM",
                departure_time: "6:00 PM",
                day_number: 4,
                description: "Capital of the Bahamas with colonial charm",
                top_attractions: &["Atlantis Resort", "Queen's Staircase", "Straw Market"],
                excursions: &[
                    ExcursionTemplate {
                        name: "Atlantis Beach Day",
                        duration: "6 hours",
                        price: 195.0,
                        description: "Access to beaches and aquarium",
                    },
                    ExcursionTemplate {
                        name: "Swimming with Pigs",
                        duration: "5 hours",
                        price: 265.0,
                        description: "Famous swimming pigs excursion",
                    },
                ],
            },
        ],
    },
    ItineraryTemplate {
        key: "alaska-7",
        cruise_line: "Norwegian Cruise Line",
        ship_name: "Norwegian Bliss",
        departure_port: "Seattle, WA",
        duration: 7,
        ports: &[
            PortTemplate {
                name: "Seattle",
                country: "USA",
                arrival_time: "Embarkation",
                departure_time: "4:00 PM",
                day_number: 1,
                description: "Fly from Newark to Seattle (5.5 hour flight)",
                top_attractions: &["Pike Place Market", "Space Needle"],
                excursions: &[],
            },
            PortTemplate {
                name: "Ketchikan",
                country: "Alaska",
                arrival_time: "7:00 AM",
                departure_time: "3:00 PM",
                day_number: 3,
                description: "Salmon capital of the world",
                top_attractions: &["Creek Street", "Totem Poles", "Misty Fjords"],
                excursions: &[
                    ExcursionTemplate {
                        name: "Misty Fjords Seaplane",
                        duration: "2 hours",
                        price: 259.0,
                        description: "Scenic flightseeing tour",
                    },
                    ExcursionTemplate {
                        name: "Alaska Lumberjack Show",
                        duration: "1.5 hours",
                        price: 45.0,
                        description: "Entertaining competition show",
                    },
                ],
            },
        ],
    },
    ItineraryTemplate {
        key: "mediterranean-7",
        cruise_line: "Celebrity Cruises",
        ship_name: "Celebrity Edge",
        departure_port: "Barcelona, Spain",
        duration: 7,
        ports: &[
            PortTemplate {
                name: "Barcelona",
                country: "Spain",
                arrival_time: "Embarkation",
                departure_time: "5:00 PM",
                day_number: 1,
                description: "Fly from Newark to Barcelona (8 hour flight)",
                top_attractions: &["Sagrada Familia", "Park Güell", "Las Ramblas"],
                excursions: &[],
            },
            PortTemplate {
                name: "Palma de Mallorca",
                country: "Spain",
                arrival_time: "8:00 AM",
                departure_time: "6:00 PM",
                day_number: 2,
                description: "Beautiful Balearic island",
                top_attractions: &["Cathedral of Palma", "Bellver Castle", "Beaches"],
                excursions: &[
                    ExcursionTemplate {
                        name: "Caves of Drach",
                        duration: "4 hours",
                        price: 75.0,
                        description: "Underground lake and concert",
                    },
                    ExcursionTemplate {
                        name: "Palma City Tour",
                        duration: "3 hours",
                        price: 55.0,
                        description: "Guided walking tour",
                    },
                ],
            },
        ],
    },
];

/// Departure terminal advice printed at the end of itinerary reports.
pub const TERMINAL_TIPS: &[&str] = &[
    "Cape Liberty, Bayonne: 30 minutes from Newark",
    "Brooklyn Cruise Terminal: 45 minutes from Newark",
    "Manhattan Cruise Terminal: 40 minutes from Newark",
    "Book cruise line transfers for guaranteed boarding",
];

pub fn find_template(key: &str) -> Option<&'static ItineraryTemplate> {
    ITINERARY_TEMPLATES.iter().find(|template| template.key == key)
}

pub fn template_keys() -> impl Iterator<Item = &'static str> {
    ITINERARY_TEMPLATES.iter().map(|template| template.key)
}
