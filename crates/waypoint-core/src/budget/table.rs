//! Static budget category table.

use super::model::BudgetSection;

/// One row of the default budget breakdown.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplate {
    pub name: &'static str,
    /// Percentage of the total budget at the moderate style.
    pub percentage: f64,
    pub section: BudgetSection,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

pub const CATEGORY_TEMPLATES: &[CategoryTemplate] = &[
    CategoryTemplate {
        name: "Cruise Fare",
        percentage: 40.0,
        section: BudgetSection::PreTrip,
        description: "Base cruise price including taxes and fees",
        tips: &[
            "Book during Wave Season (Jan-Mar) for 20-30% savings",
            "Consider repositioning cruises for up to 50% off",
            "Check for Essex County resident discounts",
        ],
    },
    CategoryTemplate {
        name: "Airfare",
        percentage: 15.0,
        section: BudgetSection::PreTrip,
        description: "Flights to/from cruise port",
        tips: &[
            "Book flights 2-3 months in advance",
            "Use Newark Airport for best connections",
            "Consider cruise line air packages for protection",
        ],
    },
    CategoryTemplate {
        name: "Shore Excursions",
        percentage: 15.0,
        section: BudgetSection::ShoreExcursions,
        description: "Port activities and tours",
        tips: &[
            "Book independently to save 30-50%",
            "Research free walking tours",
            "Prioritize must-see experiences",
        ],
    },
    CategoryTemplate {
        name: "Onboard Spending",
        percentage: 10.0,
        section: BudgetSection::Onboard,
        description: "Drinks, spa, casino, shopping",
        tips: &[
            "Set daily limits for discretionary spending",
            "Buy drink packages if you consume 5+ drinks/day",
            "Take advantage of port day spa discounts",
        ],
    },
    CategoryTemplate {
        name: "Dining & Specialty",
        percentage: 8.0,
        section: BudgetSection::Onboard,
        description: "Specialty restaurants and room service",
        tips: &[
            "Lunch at specialty restaurants costs less",
            "Look for dining package deals",
            "Main dining room is always free",
        ],
    },
    CategoryTemplate {
        name: "Gratuities",
        percentage: 5.0,
        section: BudgetSection::Onboard,
        description: "Mandatory service charges",
        tips: &[
            "Budget $15-17 per person per day",
            "Pre-pay to avoid surprise charges",
            "Additional tips for exceptional service",
        ],
    },
    CategoryTemplate {
        name: "Pre/Post Hotels",
        percentage: 5.0,
        section: BudgetSection::PreTrip,
        description: "Hotels before or after cruise",
        tips: &[
            "Stay near Newark Airport for convenience",
            "Book cruise line hotels for guaranteed transfer",
            "Consider arriving a day early",
        ],
    },
    CategoryTemplate {
        name: "Miscellaneous",
        percentage: 2.0,
        section: BudgetSection::Miscellaneous,
        description: "Parking, transfers, insurance",
        tips: &[
            "Newark Airport parking: $18-39/day",
            "Travel insurance: 5-10% of trip cost",
            "Factor in pet sitting if needed",
        ],
    },
];

/// General advice printed at the end of every budget report.
pub const BUDGET_TIPS: &[&str] = &[
    "Set daily spending limits",
    "Track all expenses in real-time",
    "Keep emergency fund separate",
    "Review budget mid-cruise",
];

/// Local savings printed in budget reports.
pub const LOCAL_SAVINGS: &[&str] = &[
    "5% resident discount on cruise fare",
    "Free Newark Airport shuttle from some hotels",
    "Group booking discounts available",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_percentages_cover_whole_budget() {
        let sum: f64 = CATEGORY_TEMPLATES.iter().map(|t| t.percentage).sum();
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn test_category_names_are_unique() {
        let names: HashSet<&str> = CATEGORY_TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), CATEGORY_TEMPLATES.len());
    }
}
