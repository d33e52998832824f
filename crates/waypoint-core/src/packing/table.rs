//! Static packing item tables.

use super::model::{Activity, Destination, PackingCategory};

/// Categories every checklist starts from, in listing order.
pub const BASE_CATEGORIES: [PackingCategory; 5] = [
    PackingCategory::Documents,
    PackingCategory::Clothing,
    PackingCategory::Toiletries,
    PackingCategory::Electronics,
    PackingCategory::Accessories,
];

/// Extra items added for a winter sailing.
pub const WINTER_ITEMS: &[&str] = &["Heavy Coat", "Warm Gloves", "Scarf", "Warm Hat"];

/// Travel tips printed at the end of the checklist report.
pub const AIRPORT_TIPS: &[&str] = &[
    "Arrive 3 hours early for international cruises",
    "Use Terminal C for most cruise line shuttles",
    "Pre-book parking at Newark Airport for savings",
    "TSA PreCheck saves 30+ minutes during peak travel",
];

impl PackingCategory {
    /// Items listed under a base category. Non-base categories have none.
    pub fn base_items(&self) -> &'static [&'static str] {
        match self {
            Self::Documents => &[
                "Passport (valid for 6+ months)",
                "Driver's License",
                "Cruise Documents/Boarding Pass",
                "Travel Insurance Papers",
                "Credit Cards & Cash",
                "Emergency Contact List",
                "Prescription List",
                "Vaccination Card",
            ],
            Self::Clothing => &[
                "Casual Daywear",
                "Evening/Formal Wear",
                "Swimwear",
                "Cover-ups",
                "Underwear & Socks",
                "Sleepwear",
                "Light Jacket/Sweater",
                "Comfortable Walking Shoes",
                "Dress Shoes",
                "Sandals/Flip Flops",
            ],
            Self::Toiletries => &[
                "Toothbrush & Toothpaste",
                "Shampoo & Conditioner",
                "Body Wash/Soap",
                "Deodorant",
                "Razor & Shaving Cream",
                "Sunscreen (SPF 30+)",
                "After-Sun Lotion",
                "Moisturizer",
                "Medications",
                "First Aid Kit",
                "Hand Sanitizer",
                "Face Masks",
            ],
            Self::Electronics => &[
                "Phone & Charger",
                "Camera & Memory Cards",
                "Power Bank",
                "Universal Adapter",
                "Headphones/Earbuds",
                "E-Reader/Tablet",
                "Extension Cord (non-surge)",
                "Waterproof Phone Case",
            ],
            Self::Accessories => &[
                "Sunglasses",
                "Hat/Cap",
                "Day Backpack/Tote",
                "Reusable Water Bottle",
                "Lanyard for Key Card",
                "Luggage Tags",
                "Zip-Lock Bags",
                "Laundry Bag",
                "Travel Umbrella",
                "Binoculars",
            ],
            Self::Destination | Self::Activities | Self::Seasonal | Self::Personal => &[],
        }
    }
}

impl Destination {
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Self::Caribbean => &[
                "Reef-Safe Sunscreen",
                "Snorkel Gear (optional)",
                "Beach Towel",
                "Insect Repellent",
                "Light Rain Jacket",
                "Water Shoes",
            ],
            Self::Alaska => &[
                "Warm Layers",
                "Rain Jacket & Pants",
                "Waterproof Boots",
                "Gloves & Warm Hat",
                "Binoculars for Wildlife",
                "Thermal Underwear",
            ],
            Self::Mediterranean => &[
                "Modest Clothing for Churches",
                "Comfortable Walking Shoes",
                "Light Scarf/Shawl",
                "Euros/Local Currency",
                "Outlet Adapter (Type C/F)",
                "Phrasebook/Translation App",
            ],
            Self::Bahamas => &[
                "Beach Games/Toys",
                "Underwater Camera",
                "Extra Swimsuits",
                "Aloe Vera Gel",
                "Beach Bag",
                "Snacks for Excursions",
            ],
            Self::Norway => &[
                "Heavy Coat",
                "Wool Socks",
                "Fleece or Wool Layers",
                "Waterproof Gloves",
                "Neck Gaiter/Balaclava",
                "Hand Warmers",
            ],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Caribbean => "Caribbean",
            Self::Alaska => "Alaska",
            Self::Mediterranean => "Mediterranean",
            Self::Bahamas => "Bahamas",
            Self::Norway => "Norway",
        }
    }
}

impl Activity {
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Self::FormalNights => &[
                "Formal Dress/Suit",
                "Dress Shoes",
                "Evening Bag/Clutch",
                "Jewelry/Accessories",
                "Bow Tie/Necktie",
                "Dress Socks",
            ],
            Self::WaterSports => &[
                "Rash Guard",
                "Water Shoes",
                "Dry Bag",
                "GoPro/Action Camera",
                "Waterproof Watch",
                "Quick-Dry Towel",
            ],
            Self::ShoreExcursions => &[
                "Comfortable Walking Shoes",
                "Small Backpack",
                "Portable Snacks",
                "Cash for Tips/Vendors",
                "Guidebook/Map",
                "Portable Phone Charger",
            ],
            Self::SpaWellness => &[
                "Workout Clothes",
                "Athletic Shoes",
                "Yoga Mat (travel)",
                "Massage Oil",
                "Face Masks",
                "Nail Care Kit",
            ],
            Self::Photography => &[
                "Extra Camera Batteries",
                "Lens Cleaning Kit",
                "Tripod",
                "Camera Bag",
                "SD Card Reader",
                "Backup Storage Device",
            ],
        }
    }
}
