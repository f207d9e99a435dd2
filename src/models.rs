use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Vendor/budget category tags emitted by the rule catalog.
///
/// The planner only attaches these tags to tasks and breakdown items;
/// resolving them to actual vendors is the caller's business.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorCategory {
    #[serde(rename = "Venues")]
    Venues,
    #[serde(rename = "Catering & Sweets")]
    CateringAndSweets,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Photography & Videography")]
    PhotographyAndVideography,
    #[serde(rename = "Decoration")]
    Decoration,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Invitations & Printables")]
    InvitationsAndPrintables,
    #[serde(rename = "Beauty & Grooming")]
    BeautyAndGrooming,
    #[serde(rename = "Lighting & Sound")]
    LightingAndSound,
    #[serde(rename = "Security and Crowd Control")]
    SecurityAndCrowdControl,
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
}

impl VendorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            VendorCategory::Venues => "Venues",
            VendorCategory::CateringAndSweets => "Catering & Sweets",
            VendorCategory::Entertainment => "Entertainment",
            VendorCategory::PhotographyAndVideography => "Photography & Videography",
            VendorCategory::Decoration => "Decoration",
            VendorCategory::Transportation => "Transportation",
            VendorCategory::InvitationsAndPrintables => "Invitations & Printables",
            VendorCategory::BeautyAndGrooming => "Beauty & Grooming",
            VendorCategory::LightingAndSound => "Lighting & Sound",
            VendorCategory::SecurityAndCrowdControl => "Security and Crowd Control",
            VendorCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single checklist entry in a generated event plan.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventTask {
    /// Unique identifier within the plan.
    pub id: String,
    /// Human-readable task description.
    pub task: String,
    /// Calendar deadline; on or before the event date for every task
    /// except the post-event thank-you notes.
    pub deadline: NaiveDate,
    /// Minimum cost estimate in whole currency units.
    pub estimated_cost: f64,
    /// "Go beyond the minimum" estimate; only present for budget-share
    /// tasks, where the event-type quality multiplier applies.
    #[serde(default)]
    pub recommended_cost: Option<f64>,
    /// Whether the task has been ticked off. Always false at generation.
    #[serde(default)]
    pub completed: bool,
    /// Vendor category that can take this task on, if any.
    #[serde(default)]
    pub suggested_vendor_category: Option<VendorCategory>,
    /// Free-text elaboration shown alongside the task.
    #[serde(default)]
    pub description: Option<String>,
}

/// One budget category allocation in the cost breakdown.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CostBreakdownItem {
    pub category: VendorCategory,
    /// Share of the total budget; all items of one breakdown sum to 100.
    pub percentage: u32,
    /// Allocation scaled by the guest multiplier.
    pub estimated_cost: f64,
    /// Allocation scaled by guest and quality multipliers.
    pub recommended_cost: f64,
    /// Static explanatory text for the category.
    pub description: String,
}

/// A clarifying question the caller asks before generating a plan.
///
/// Answer keys in [`Answers`] are the option labels of these questions.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub multi_select: bool,
}

/// A collected answer: checkbox flag, free text, or a multi-choice list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// Truthiness drives which optional tasks get appended: an unchecked
    /// flag, empty string, or empty list contributes nothing.
    pub fn is_truthy(&self) -> bool {
        match self {
            AnswerValue::Flag(b) => *b,
            AnswerValue::Text(s) => !s.is_empty(),
            AnswerValue::List(v) => !v.is_empty(),
        }
    }
}

/// Answers keyed by question option label.
pub type Answers = HashMap<String, AnswerValue>;

/// Input to the timeline generator.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanRequest {
    pub event_type: String,
    /// Event date as `YYYY-MM-DD`.
    pub event_date: String,
    pub guest_count: u32,
    pub budget: f64,
    #[serde(default)]
    pub answers: Answers,
}

/// Output of one generation call: the ordered checklist plus the
/// percentage-based budget breakdown.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GeneratedPlan {
    pub tasks: Vec<EventTask>,
    pub cost_breakdown: Vec<CostBreakdownItem>,
}

/// A generated plan together with the inputs that produced it, as saved
/// to disk by the CLI.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventPlan {
    pub event_type: String,
    pub event_date: NaiveDate,
    pub guest_count: u32,
    pub budget: f64,
    /// Timestamp when the plan was generated (ISO 8601).
    pub generated_at: String,
    pub tasks: Vec<EventTask>,
    pub cost_breakdown: Vec<CostBreakdownItem>,
}
