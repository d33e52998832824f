//! Cruise countdown use case.

use chrono::{DateTime, Utc};
use waypoint_core::countdown::{COUNTDOWN_EXPORT, CruiseCountdown, TimeLeft};
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::export::{Notice, PlanEmail, PlanMailer, validate_email};
use waypoint_core::persistence::{FreshnessWindow, StorageKey};

use crate::context::PlannerContext;

pub struct CountdownSession {
    ctx: PlannerContext,
    window: FreshnessWindow,
    countdown: Option<CruiseCountdown>,
}

impl CountdownSession {
    pub async fn mount(ctx: PlannerContext) -> Self {
        let window = ctx.freshness.countdown();
        let countdown = ctx
            .vault
            .load::<CruiseCountdown>(StorageKey::COUNTDOWN, window, ctx.clock.now())
            .await;
        Self {
            ctx,
            window,
            countdown,
        }
    }

    pub fn window(&self) -> FreshnessWindow {
        self.window
    }

    pub fn countdown(&self) -> Option<&CruiseCountdown> {
        self.countdown.as_ref()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.ctx.clock.now()
    }

    pub fn time_left(&self) -> Option<TimeLeft> {
        self.countdown
            .as_ref()
            .map(|countdown| countdown.time_left(self.now()))
    }

    /// Starts or replaces the countdown. A departure before today is rejected.
    pub async fn set(&mut self, mut countdown: CruiseCountdown) -> Result<&CruiseCountdown> {
        countdown.validate(self.now().date_naive())?;
        if countdown.reminder_email.is_none() {
            countdown.reminder_email = self
                .countdown
                .as_ref()
                .and_then(|previous| previous.reminder_email.clone());
        }
        self.ctx
            .vault
            .save(StorageKey::COUNTDOWN, &countdown, self.now())
            .await?;
        tracing::debug!("Counting down to {}", countdown.cruise_date);
        Ok(self.countdown.insert(countdown))
    }

    /// Emails the upcoming milestones to `address` with one request.
    ///
    /// The address is remembered only when delivery succeeds.
    pub async fn remind(&mut self, mailer: &dyn PlanMailer, address: &str) -> Result<Notice> {
        let address = validate_email(address)?;
        let now = self.now();
        let countdown = self
            .countdown
            .as_mut()
            .ok_or_else(|| WaypointError::validation("set a cruise date first"))?;
        let email = PlanEmail::new(
            &COUNTDOWN_EXPORT,
            address.clone(),
            countdown.reminder_message(now),
            now,
        );

        match mailer.send(&email).await {
            Ok(()) => {
                countdown.reminder_email = Some(address.clone());
                self.ctx
                    .vault
                    .save(StorageKey::COUNTDOWN, &*countdown, now)
                    .await?;
                Ok(Notice::sent(&COUNTDOWN_EXPORT, &address))
            }
            Err(err) => {
                tracing::warn!("Failed to email countdown reminder: {}", err);
                Ok(Notice::send_failed(&COUNTDOWN_EXPORT, &self.ctx.contact.phone))
            }
        }
    }

    pub async fn reset(&mut self) -> Result<()> {
        self.ctx.vault.clear(StorageKey::COUNTDOWN).await?;
        self.countdown = None;
        tracing::info!("Reset cruise countdown");
        Ok(())
    }
}
