//! Cruise price calculator use case.

use waypoint_core::error::Result;
use waypoint_core::persistence::{FreshnessWindow, StorageKey};
use waypoint_core::pricing::{AddOn, PricePreferences, PriceQuote};

use crate::context::PlannerContext;

/// Saved calculator inputs. The quote is derived on demand and never stored.
pub struct PriceSession {
    ctx: PlannerContext,
    window: FreshnessWindow,
    preferences: PricePreferences,
}

impl PriceSession {
    pub async fn mount(ctx: PlannerContext) -> Self {
        let window = ctx.freshness.pricing();
        let preferences = ctx
            .vault
            .load::<PricePreferences>(StorageKey::PRICE_CALCULATOR, window, ctx.clock.now())
            .await
            .unwrap_or_default();
        Self {
            ctx,
            window,
            preferences,
        }
    }

    pub fn window(&self) -> FreshnessWindow {
        self.window
    }

    pub fn preferences(&self) -> &PricePreferences {
        &self.preferences
    }

    pub fn quote(&self) -> Result<PriceQuote> {
        PriceQuote::compute(&self.preferences)
    }

    /// Replaces the inputs. Out-of-range values are rejected and nothing is
    /// saved. Returns whether anything changed.
    pub async fn update(&mut self, preferences: PricePreferences) -> Result<bool> {
        preferences.validate()?;
        if self.preferences == preferences {
            return Ok(false);
        }
        self.preferences = preferences;
        self.persist().await?;
        Ok(true)
    }

    /// Returns whether the package is now selected.
    pub async fn toggle_add_on(&mut self, add_on: AddOn) -> Result<bool> {
        let selected = self.preferences.toggle_add_on(add_on);
        self.persist().await?;
        Ok(selected)
    }

    pub async fn reset(&mut self) -> Result<()> {
        self.ctx.vault.clear(StorageKey::PRICE_CALCULATOR).await?;
        self.preferences = PricePreferences::default();
        tracing::info!("Reset price calculator");
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        self.ctx
            .vault
            .save(StorageKey::PRICE_CALCULATOR, &self.preferences, self.ctx.clock.now())
            .await
    }
}
