//! The timeline generator: turns a [`PlanRequest`] into an ordered task
//! checklist plus a budget breakdown.
//!
//! Pure computation. No I/O happens here; persistence and presentation
//! belong to the CLI layer.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::catalog::{RuleCatalog, TaskContext};
use crate::costs::{generate_cost_breakdown, scale_costs};
use crate::models::{EventTask, GeneratedPlan, PlanRequest};

/// Rejections raised before any computation. Invalid input never produces
/// a degenerate plan.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("event type must not be empty")]
    EmptyEventType,
    #[error("guest count must be at least 1")]
    InvalidGuestCount,
    #[error("budget must be greater than zero, got {0}")]
    InvalidBudget(f64),
    #[error("invalid event date '{0}': expected YYYY-MM-DD")]
    InvalidEventDate(String),
}

/// Parses a plain `YYYY-MM-DD` event date. No time-of-day or timezone is
/// involved, so the calendar day can never shift.
pub fn parse_event_date(date: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| PlanError::InvalidEventDate(date.to_string()))
}

fn validate(request: &PlanRequest) -> Result<NaiveDate, PlanError> {
    if request.event_type.trim().is_empty() {
        return Err(PlanError::EmptyEventType);
    }
    if request.guest_count == 0 {
        return Err(PlanError::InvalidGuestCount);
    }
    if !(request.budget > 0.0) || !request.budget.is_finite() {
        return Err(PlanError::InvalidBudget(request.budget));
    }
    parse_event_date(&request.event_date)
}

/// Generates the event plan: base tasks, family tasks driven by the
/// collected answers, deadlines counted back from the event date, costs
/// scaled by guest count and event type, and the independent cost
/// breakdown.
///
/// Deterministic for identical inputs apart from the generated task ids.
pub fn generate_timeline(
    catalog: &RuleCatalog,
    request: &PlanRequest,
) -> Result<GeneratedPlan, PlanError> {
    let event_date = validate(request)?;

    let ctx = TaskContext {
        event_type: &request.event_type,
        guest_count: request.guest_count,
        budget: request.budget,
        answers: &request.answers,
    };

    let mut tasks: Vec<EventTask> = catalog
        .assemble_templates(&ctx)
        .into_iter()
        .map(|template| {
            let base_cost = template.cost.base_amount(request.budget, request.guest_count);
            let (estimated, recommended) = scale_costs(
                base_cost,
                request.guest_count,
                &request.event_type,
                template.category,
            );
            EventTask {
                // Assigned after sorting.
                id: String::new(),
                task: template.task,
                deadline: template.offset.resolve(event_date),
                estimated_cost: estimated,
                recommended_cost: template.cost.is_budget_share().then_some(recommended),
                completed: false,
                suggested_vendor_category: template.category,
                description: Some(template.description),
            }
        })
        .collect();

    // Stable: equal deadlines keep template order (base before family).
    tasks.sort_by_key(|t| t.deadline);

    let seed = Local::now().timestamp_millis();
    for (index, task) in tasks.iter_mut().enumerate() {
        task.id = format!("task-{}-{}", seed, index);
    }

    let cost_breakdown =
        generate_cost_breakdown(request.budget, request.guest_count, &request.event_type);

    Ok(GeneratedPlan {
        tasks,
        cost_breakdown,
    })
}
