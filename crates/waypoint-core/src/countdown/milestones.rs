//! Planning milestones counted back from departure.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// Days before departure the milestone falls due.
    pub days_out: i64,
    pub title: &'static str,
    pub description: &'static str,
}

/// Ordered from furthest out to departure day.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        days_out: 120,
        title: "Book Your Cruise",
        description: "Best prices and cabin selection available",
    },
    Milestone {
        days_out: 90,
        title: "Final Payment Due",
        description: "Complete your cruise payment to secure booking",
    },
    Milestone {
        days_out: 75,
        title: "Book Shore Excursions",
        description: "Popular excursions sell out - book early!",
    },
    Milestone {
        days_out: 60,
        title: "Travel Documents",
        description: "Ensure passport is valid for 6+ months after travel",
    },
    Milestone {
        days_out: 45,
        title: "Online Check-In Opens",
        description: "Complete online check-in for faster boarding",
    },
    Milestone {
        days_out: 30,
        title: "Pre-Cruise Purchases",
        description: "Buy drink packages, dining, WiFi at discounted rates",
    },
    Milestone {
        days_out: 21,
        title: "Travel Insurance Deadline",
        description: "Last chance for comprehensive coverage",
    },
    Milestone {
        days_out: 14,
        title: "Start Packing",
        description: "Begin gathering items for your cruise",
    },
    Milestone {
        days_out: 7,
        title: "Final Preparations",
        description: "Print documents, check weather, arrange transportation",
    },
    Milestone {
        days_out: 3,
        title: "Pre-Cruise Hotel",
        description: "Check-in if staying near port before cruise",
    },
    Milestone {
        days_out: 1,
        title: "Tomorrow!",
        description: "Final packing, charge devices, get excited!",
    },
    Milestone {
        days_out: 0,
        title: "Cruise Day!",
        description: "Bon Voyage! Have an amazing cruise!",
    },
];
