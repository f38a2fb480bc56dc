//! Subscription plan selection
//!
//! Plans are a fixed catalog; selection is single-slot and re-selecting a
//! different plan replaces the previous choice.

use shared::error::{AppError, ErrorCode};
use shared::models::{SubscriptionPlan, default_plans};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("subscription plan {0} not found")]
    NotFound(u32),
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        let PlanError::NotFound(id) = &err;
        AppError::with_message(ErrorCode::PlanNotFound, err.to_string()).with_detail("plan_id", *id)
    }
}

pub struct PlanPicker {
    plans: Vec<SubscriptionPlan>,
    selected: Option<u32>,
}

impl PlanPicker {
    pub fn new() -> Self {
        Self {
            plans: default_plans(),
            selected: None,
        }
    }

    pub fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }

    /// Select a plan by id, replacing any previous selection
    pub fn select(&mut self, plan_id: u32) -> Result<&SubscriptionPlan, PlanError> {
        let plan = self
            .plans
            .iter()
            .find(|plan| plan.id == plan_id)
            .ok_or(PlanError::NotFound(plan_id))?;
        self.selected = Some(plan_id);
        tracing::debug!(plan_id, plan = %plan.name, "subscription plan selected");
        Ok(plan)
    }

    pub fn selected(&self) -> Option<&SubscriptionPlan> {
        let id = self.selected?;
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Default for PlanPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_and_replaces() {
        let mut picker = PlanPicker::new();
        assert!(picker.selected().is_none());

        picker.select(1).unwrap();
        assert_eq!(picker.selected().map(|p| p.id), Some(1));

        // Re-selecting replaces, it does not stack
        picker.select(3).unwrap();
        assert_eq!(picker.selected().map(|p| p.id), Some(3));

        picker.clear();
        assert!(picker.selected().is_none());
    }

    #[test]
    fn rejects_unknown_plan() {
        let mut picker = PlanPicker::new();
        assert!(matches!(picker.select(42), Err(PlanError::NotFound(42))));
        assert!(picker.selected().is_none());
    }
}
