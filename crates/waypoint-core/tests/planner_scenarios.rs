use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use waypoint_core::budget::{BudgetConfig, BudgetPlanner, BudgetStyle, ExpenseField};
use waypoint_core::config::FreshnessConfig;
use waypoint_core::itinerary::{ItineraryConfig, ItineraryPlanner};
use waypoint_core::packing::{Destination, PackingConfig, PackingPlan, PackingPlanner, Season};
use waypoint_core::persistence::{SessionStore, SessionVault, StorageKey};
use waypoint_core::{PlannerTool, Result};

#[derive(Default)]
struct MemoryStore {
    entries: Mutex<HashMap<&'static str, String>>,
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load_raw(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key.as_str()).cloned())
    }

    async fn save_raw(&self, key: StorageKey, raw: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.as_str(), raw.to_string());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<()> {
        self.entries.lock().unwrap().remove(key.as_str());
        Ok(())
    }
}

fn planned(plan: &<BudgetPlanner as PlannerTool>::Plan, name: &str) -> f64 {
    BudgetPlanner::items(plan)
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.detail.planned)
        .unwrap()
}

fn quantity(plan: &PackingPlan, name: &str) -> Option<u32> {
    plan.items
        .iter()
        .find(|item| item.name == name)
        .and_then(|item| item.detail.quantity)
}

#[test]
fn budget_styles_scale_cruise_fare() {
    let moderate =
        BudgetPlanner::derive(&BudgetConfig::new(5000.0, 2, 7, BudgetStyle::Moderate)).unwrap();
    assert_eq!(planned(&moderate, "Cruise Fare"), 2000.0);

    let luxury =
        BudgetPlanner::derive(&BudgetConfig::new(5000.0, 2, 7, BudgetStyle::Luxury)).unwrap();
    assert_eq!(planned(&luxury, "Cruise Fare"), 3000.0);
}

#[test]
fn packing_quantities_follow_trip_length() {
    let week = PackingPlanner::derive(&PackingConfig::new(Destination::Caribbean, 7, Season::Summer))
        .unwrap();
    assert_eq!(quantity(&week, "Casual Daywear"), Some(6));
    assert_eq!(quantity(&week, "Evening/Formal Wear"), Some(2));

    let short = PackingPlanner::derive(&PackingConfig::new(Destination::Caribbean, 5, Season::Summer))
        .unwrap();
    assert_eq!(quantity(&short, "Evening/Formal Wear"), Some(1));
}

#[test]
fn blank_custom_names_leave_lists_unchanged() {
    let mut budget = BudgetPlanner::derive(&BudgetConfig::default()).unwrap();
    let before = BudgetPlanner::items(&budget).len();
    assert!(BudgetPlanner::add_custom(&mut budget, "", None).is_none());
    assert!(BudgetPlanner::add_custom(&mut budget, "   \t", None).is_none());
    assert_eq!(BudgetPlanner::items(&budget).len(), before);

    let mut packing = PackingPlanner::derive(&PackingConfig::default()).unwrap();
    let before = PackingPlanner::items(&packing).len();
    assert!(PackingPlanner::add_custom(&mut packing, " ", Some("personal")).is_none());
    assert_eq!(PackingPlanner::items(&packing).len(), before);

    let mut itinerary = ItineraryPlanner::derive(&ItineraryConfig::default()).unwrap();
    let before = ItineraryPlanner::items(&itinerary).len();
    assert!(ItineraryPlanner::add_custom(&mut itinerary, "", Some("Nassau")).is_none());
    assert_eq!(ItineraryPlanner::items(&itinerary).len(), before);
}

#[tokio::test]
async fn week_old_packing_snapshot_is_not_restored() {
    let store = Arc::new(MemoryStore::default());
    let vault = SessionVault::new(store.clone());
    let windows = FreshnessConfig::default();
    let saved_at = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();

    let plan = PackingPlanner::derive(&PackingConfig::default()).unwrap();
    vault
        .save(PackingPlanner::STORAGE_KEY, &plan, saved_at)
        .await
        .unwrap();

    let window = PackingPlanner::freshness(&windows);
    let next_day: Option<PackingPlan> = vault
        .load(PackingPlanner::STORAGE_KEY, window, saved_at + Duration::days(1))
        .await;
    assert_eq!(next_day, Some(plan));

    let eight_days: Option<PackingPlan> = vault
        .load(PackingPlanner::STORAGE_KEY, window, saved_at + Duration::days(8))
        .await;
    assert!(eight_days.is_none());

    // Stale data stays where it is until it is overwritten or reset.
    assert!(
        store
            .load_raw(StorageKey::PACKING)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn budget_snapshot_survives_a_month_minus_a_second() {
    let vault = SessionVault::new(Arc::new(MemoryStore::default()));
    let saved_at = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
    let window = BudgetPlanner::freshness(&FreshnessConfig::default());

    let mut plan = BudgetPlanner::derive(&BudgetConfig::default()).unwrap();
    BudgetPlanner::items_mut(&mut plan).update_field("item-1", ExpenseField::Actual, 812.5);
    vault
        .save(BudgetPlanner::STORAGE_KEY, &plan, saved_at)
        .await
        .unwrap();

    let restored: Option<<BudgetPlanner as PlannerTool>::Plan> = vault
        .load(
            BudgetPlanner::STORAGE_KEY,
            window,
            saved_at + Duration::days(30) - Duration::seconds(1),
        )
        .await;
    assert_eq!(
        restored.unwrap().items.get("item-1").unwrap().detail.actual,
        812.5
    );

    let expired: Option<<BudgetPlanner as PlannerTool>::Plan> = vault
        .load(BudgetPlanner::STORAGE_KEY, window, saved_at + Duration::days(30))
        .await;
    assert!(expired.is_none());
}

#[tokio::test]
async fn itinerary_snapshot_has_no_age_limit() {
    let vault = SessionVault::new(Arc::new(MemoryStore::default()));
    let saved_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let plan = ItineraryPlanner::derive(&ItineraryConfig::new("alaska-7")).unwrap();
    vault
        .save(ItineraryPlanner::STORAGE_KEY, &plan, saved_at)
        .await
        .unwrap();

    let window = ItineraryPlanner::freshness(&FreshnessConfig::default());
    let restored: Option<<ItineraryPlanner as PlannerTool>::Plan> = vault
        .load(
            ItineraryPlanner::STORAGE_KEY,
            window,
            saved_at + Duration::days(900),
        )
        .await;
    assert_eq!(restored, Some(plan));
}

#[test]
fn storage_keys_and_profiles_are_distinct() {
    let keys = [
        BudgetPlanner::STORAGE_KEY,
        PackingPlanner::STORAGE_KEY,
        ItineraryPlanner::STORAGE_KEY,
    ];
    assert_eq!(
        keys.map(|key| key.as_str()),
        ["cruiseBudget", "packingChecklist", "cruiseItinerary"]
    );
    assert_eq!(BudgetPlanner::EXPORT.file_prefix, "cruise-budget");
    assert_eq!(PackingPlanner::EXPORT.email_source, "packing-checklist-tool");
    assert_eq!(ItineraryPlanner::EXPORT.email_type, "cruise-itinerary");
}
