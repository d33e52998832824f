use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use waypoint_application::{PlannerContext, PlannerSession, Stage};
use waypoint_core::budget::{BudgetConfig, BudgetPlanner, BudgetStyle, ExpenseField};
use waypoint_core::config::AppConfig;
use waypoint_core::error::DeliveryError;
use waypoint_core::export::{PlanEmail, PlanMailer};
use waypoint_core::itinerary::{ItineraryConfig, ItineraryPlanner};
use waypoint_core::packing::{PackingConfig, PackingPlanner};
use waypoint_core::persistence::{FixedClock, SessionStore, StorageKey};
use waypoint_core::Result;
use waypoint_infrastructure::MemorySessionStore;

/// Records every email handed to it; optionally fails each send.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<PlanEmail>>,
    fail: bool,
}

impl RecordingMailer {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn sent(&self) -> Vec<PlanEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanMailer for RecordingMailer {
    async fn send(&self, email: &PlanEmail) -> Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(DeliveryError::Rejected { status: 500 }.into());
        }
        Ok(())
    }
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn context(store: &Arc<MemorySessionStore>, now: DateTime<Utc>) -> PlannerContext {
    PlannerContext::new(store.clone(), &AppConfig::default()).with_clock(Arc::new(FixedClock(now)))
}

fn item_id(session: &PlannerSession<BudgetPlanner>, name: &str) -> String {
    session
        .items()
        .unwrap()
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.id.clone())
        .unwrap()
}

#[tokio::test]
async fn mount_without_snapshot_starts_configuring() {
    let store = Arc::new(MemorySessionStore::new());
    let session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;

    assert_eq!(session.stage(), Stage::Configuring);
    assert!(session.plan().is_none());
}

#[tokio::test]
async fn edits_survive_remount_within_window() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session
        .generate(BudgetConfig::new(5000.0, 2, 7, BudgetStyle::Moderate))
        .await
        .unwrap();

    let fare = item_id(&session, "Cruise Fare");
    assert!(session.toggle(&fare).await.unwrap());
    assert!(
        session
            .update_field(&fare, ExpenseField::Actual, 2100.0)
            .await
            .unwrap()
    );

    let later = start() + Duration::days(29);
    let restored = PlannerSession::<BudgetPlanner>::mount(context(&store, later)).await;
    assert_eq!(restored.stage(), Stage::Planned);
    let row = restored.items().unwrap().get(&fare).unwrap();
    assert!(row.checked);
    assert_eq!(row.detail.actual, 2100.0);
}

#[tokio::test]
async fn snapshot_older_than_window_is_not_restored() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session.generate(BudgetConfig::default()).await.unwrap();

    let expired = start() + Duration::days(30);
    let session = PlannerSession::<BudgetPlanner>::mount(context(&store, expired)).await;
    assert_eq!(session.stage(), Stage::Configuring);
    assert!(store.load_raw(StorageKey::BUDGET).await.unwrap().is_some());
}

#[tokio::test]
async fn no_op_edit_leaves_snapshot_untouched() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session.generate(BudgetConfig::default()).await.unwrap();
    let before = store.load_raw(StorageKey::BUDGET).await.unwrap();

    let mut session =
        PlannerSession::<BudgetPlanner>::mount(context(&store, start() + Duration::hours(1)))
            .await;
    assert!(!session.toggle("item-999").await.unwrap());
    assert!(!session.remove("item-999").await.unwrap());
    assert_eq!(session.add_custom("   ", None).await.unwrap(), None);

    assert_eq!(store.load_raw(StorageKey::BUDGET).await.unwrap(), before);
}

#[tokio::test]
async fn editing_before_generate_is_rejected() {
    let mut session = PlannerSession::<BudgetPlanner>::mount(PlannerContext::ephemeral(
        &AppConfig::default(),
    ))
    .await;

    let err = session.toggle("item-1").await.unwrap_err();
    assert!(err.is_validation());
    assert!(session.report().unwrap_err().is_validation());
}

#[tokio::test]
async fn generate_replaces_previous_edits() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session.generate(BudgetConfig::default()).await.unwrap();
    let fare = item_id(&session, "Cruise Fare");
    session.toggle(&fare).await.unwrap();
    session.add_custom("Spa Day", None).await.unwrap().unwrap();

    let plan = session
        .generate(BudgetConfig::new(8000.0, 2, 7, BudgetStyle::Moderate))
        .await
        .unwrap();
    assert_eq!(plan.items.checked_count(), 0);
    assert!(!plan.items.contains_name("Spa Day"));
}

#[tokio::test]
async fn packing_bulk_check_and_reset() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<PackingPlanner>::mount(context(&store, start())).await;
    session.generate(PackingConfig::default()).await.unwrap();

    assert_eq!(session.bulk_check("documents", true).await.unwrap(), 8);
    assert_eq!(session.bulk_check("documents", true).await.unwrap(), 0);
    assert_eq!(session.items().unwrap().checked_count(), 8);

    session.reset().await.unwrap();
    assert_eq!(session.stage(), Stage::Configuring);
    assert!(store.load_raw(StorageKey::PACKING).await.unwrap().is_none());
}

#[tokio::test]
async fn itinerary_custom_excursion_needs_a_port() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<ItineraryPlanner>::mount(context(&store, start())).await;
    session
        .generate(ItineraryConfig::new("caribbean-7"))
        .await
        .unwrap();

    assert_eq!(session.add_custom("Snorkel", None).await.unwrap(), None);
    assert_eq!(
        session
            .add_custom("Snorkel", Some("Atlantis"))
            .await
            .unwrap(),
        None
    );
    let id = session
        .add_custom("Snorkel", Some("Nassau"))
        .await
        .unwrap()
        .unwrap();
    assert!(id.starts_with("custom-"));
}

#[tokio::test]
async fn report_is_named_after_the_clock() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session.generate(BudgetConfig::default()).await.unwrap();

    let report = session.report().unwrap();
    assert_eq!(
        report.file_name,
        format!("cruise-budget-{}.txt", start().timestamp_millis())
    );
    assert!(report.contents.contains("Cruise Fare"));
    assert!(session.print_view().unwrap().contains("CRUISE BUDGET PLAN"));
}

#[tokio::test]
async fn invalid_address_sends_nothing() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session.generate(BudgetConfig::default()).await.unwrap();
    let mailer = RecordingMailer::default();

    for address in ["", "   ", "not-an-email", "a@b"] {
        let err = session.email(&mailer, address).await.unwrap_err();
        assert!(err.is_validation());
    }
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn successful_email_sends_once() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<BudgetPlanner>::mount(context(&store, start())).await;
    session.generate(BudgetConfig::default()).await.unwrap();
    let mailer = RecordingMailer::default();

    let notice = session.email(&mailer, " traveler@example.com ").await.unwrap();
    assert!(notice.is_success());
    assert_eq!(
        notice.message,
        "Budget plan has been sent to traveler@example.com! Check your inbox."
    );
    assert_eq!(session.pending_email(), None);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "traveler@example.com");
    assert_eq!(sent[0].kind, "budget-plan");
    assert_eq!(sent[0].source, "budget-planner-tool");
    assert_eq!(sent[0].timestamp, start());
    assert!(sent[0].message.contains("Cruise Fare"));
}

#[tokio::test]
async fn failed_email_keeps_address_for_retry() {
    let store = Arc::new(MemorySessionStore::new());
    let mut session = PlannerSession::<PackingPlanner>::mount(context(&store, start())).await;
    session.generate(PackingConfig::default()).await.unwrap();
    let mailer = RecordingMailer::failing();

    let notice = session.email(&mailer, "traveler@example.com").await.unwrap();
    assert!(!notice.is_success());
    assert_eq!(
        notice.message,
        "Failed to send checklist. Please try again or call us at 833-874-1019."
    );
    assert_eq!(session.pending_email(), Some("traveler@example.com"));
    assert_eq!(mailer.sent().len(), 1);
}
