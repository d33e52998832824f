//! Planner session use case.
//!
//! `PlannerSession` drives one tool through configure, derive, edit, persist
//! and export. Every change that actually alters the plan is written through
//! the vault before the call returns.

use waypoint_core::error::{Result, WaypointError};
use waypoint_core::export::{
    Notice, PlanEmail, PlanMailer, ReportContext, ReportFile, validate_email,
};
use waypoint_core::item::{ItemList, LineDetail};
use waypoint_core::persistence::FreshnessWindow;
use waypoint_core::tool::PlannerTool;

use crate::context::PlannerContext;

/// Where the tool is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No plan yet; the user is filling in the configuration.
    Configuring,
    /// A plan exists and can be edited and exported.
    Planned,
}

type DetailField<T> = <<T as PlannerTool>::Detail as LineDetail>::Field;

pub struct PlannerSession<T: PlannerTool> {
    ctx: PlannerContext,
    window: FreshnessWindow,
    plan: Option<T::Plan>,
    /// Address of the last failed send, kept so the caller can retry.
    pending_email: Option<String>,
}

impl<T: PlannerTool> PlannerSession<T> {
    /// Opens the tool, restoring the saved plan when it is still fresh.
    pub async fn mount(ctx: PlannerContext) -> Self {
        let window = T::freshness(&ctx.freshness);
        let plan = ctx
            .vault
            .load::<T::Plan>(T::STORAGE_KEY, window, ctx.clock.now())
            .await;
        match &plan {
            Some(_) => tracing::debug!("Restored {} plan", T::NAME),
            None => tracing::debug!("No {} plan to restore", T::NAME),
        }
        Self {
            ctx,
            window,
            plan,
            pending_email: None,
        }
    }

    pub fn stage(&self) -> Stage {
        match self.plan {
            Some(_) => Stage::Planned,
            None => Stage::Configuring,
        }
    }

    pub fn window(&self) -> FreshnessWindow {
        self.window
    }

    pub fn plan(&self) -> Option<&T::Plan> {
        self.plan.as_ref()
    }

    pub fn items(&self) -> Option<&ItemList<T::Detail>> {
        self.plan.as_ref().map(T::items)
    }

    pub fn pending_email(&self) -> Option<&str> {
        self.pending_email.as_deref()
    }

    fn require_plan(&self) -> Result<&T::Plan> {
        self.plan.as_ref().ok_or_else(|| no_plan(T::NAME))
    }

    /// Derives a fresh plan, replacing any previous one and its edits.
    pub async fn generate(&mut self, config: T::Config) -> Result<&T::Plan> {
        let plan = T::derive(&config)?;
        tracing::info!("Generated {} plan", T::NAME);
        self.replace(plan).await
    }

    /// Installs a complete plan, e.g. one decoded from a share link.
    pub async fn replace(&mut self, plan: T::Plan) -> Result<&T::Plan> {
        self.persist(&plan).await?;
        self.pending_email = None;
        Ok(self.plan.insert(plan))
    }

    /// Applies `edit` to the plan and saves it when `edit` reports a change.
    pub async fn edit<F>(&mut self, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut T::Plan) -> bool,
    {
        let plan = self.plan.as_mut().ok_or_else(|| no_plan(T::NAME))?;
        if !edit(plan) {
            return Ok(false);
        }
        self.ctx
            .vault
            .save(T::STORAGE_KEY, &*plan, self.ctx.clock.now())
            .await?;
        Ok(true)
    }

    pub async fn toggle(&mut self, id: &str) -> Result<bool> {
        self.edit(|plan| T::items_mut(plan).toggle_checked(id)).await
    }

    pub async fn update_field(
        &mut self,
        id: &str,
        field: DetailField<T>,
        value: f64,
    ) -> Result<bool> {
        self.edit(|plan| T::items_mut(plan).update_field(id, field, value))
            .await
    }

    /// Checks or unchecks every row in a category. Returns the rows changed.
    pub async fn bulk_check(&mut self, category: &str, value: bool) -> Result<usize> {
        let mut changed = 0;
        self.edit(|plan| {
            changed = T::items_mut(plan).bulk_check_category(category, value);
            changed > 0
        })
        .await?;
        Ok(changed)
    }

    pub async fn add_custom(
        &mut self,
        name: &str,
        category: Option<&str>,
    ) -> Result<Option<String>> {
        let mut added = None;
        self.edit(|plan| {
            added = T::add_custom(plan, name, category);
            added.is_some()
        })
        .await?;
        Ok(added)
    }

    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        self.edit(|plan| T::items_mut(plan).remove_item(id)).await
    }

    pub async fn rename(&mut self, id: &str, name: &str) -> Result<bool> {
        self.edit(|plan| T::items_mut(plan).rename_item(id, name)).await
    }

    /// Forgets the plan and deletes its snapshot.
    pub async fn reset(&mut self) -> Result<()> {
        self.ctx.vault.clear(T::STORAGE_KEY).await?;
        self.plan = None;
        self.pending_email = None;
        tracing::info!("Reset {} planner", T::NAME);
        Ok(())
    }

    /// Renders the downloadable report, named after the current time.
    pub fn report(&self) -> Result<ReportFile> {
        let plan = self.require_plan()?;
        let now = self.ctx.clock.now();
        let ctx = ReportContext::new(now, self.ctx.contact.clone());
        let contents = T::render_report(plan, &ctx)?;
        Ok(ReportFile::new(T::EXPORT.file_prefix, now, contents))
    }

    pub fn print_view(&self) -> Result<String> {
        T::render_print(self.require_plan()?)
    }

    /// Sends the plan summary to `address` with one request.
    ///
    /// An invalid address is an error and nothing is sent. A delivery failure
    /// is reported through the returned notice, and the address is kept in
    /// [`pending_email`](Self::pending_email).
    pub async fn email(&mut self, mailer: &dyn PlanMailer, address: &str) -> Result<Notice> {
        let address = validate_email(address)?;
        let plan = self.require_plan()?;
        let message = T::email_summary(plan)?;
        let email = PlanEmail::new(&T::EXPORT, address.clone(), message, self.ctx.clock.now());

        match mailer.send(&email).await {
            Ok(()) => {
                self.pending_email = None;
                Ok(Notice::sent(&T::EXPORT, &address))
            }
            Err(err) => {
                tracing::warn!("Failed to email {} plan: {}", T::NAME, err);
                self.pending_email = Some(address);
                Ok(Notice::send_failed(&T::EXPORT, &self.ctx.contact.phone))
            }
        }
    }

    async fn persist(&self, plan: &T::Plan) -> Result<()> {
        self.ctx
            .vault
            .save(T::STORAGE_KEY, plan, self.ctx.clock.now())
            .await
    }
}

fn no_plan(tool: &str) -> WaypointError {
    WaypointError::validation(format!("no {} plan yet; create one first", tool))
}
