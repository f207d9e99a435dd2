use std::collections::HashSet;

use chrono::NaiveDate;
use eventline::catalog::RuleCatalog;
use eventline::models::{Answers, AnswerValue, PlanRequest};
use eventline::timeline::{generate_timeline, PlanError};

fn request(event_type: &str, date: &str, guests: u32, budget: f64, answers: Answers) -> PlanRequest {
    PlanRequest {
        event_type: event_type.into(),
        event_date: date.into(),
        guest_count: guests,
        budget,
        answers,
    }
}

fn checked(options: &[&str]) -> Answers {
    options
        .iter()
        .map(|o| (o.to_string(), AnswerValue::Flag(true)))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_validation_rejects_bad_input() {
    let catalog = RuleCatalog::builtin();
    let ok = request("Birthday Party", "2025-06-01", 30, 1000.0, Answers::new());

    let mut r = ok.clone();
    r.event_type = "  ".into();
    assert_eq!(
        generate_timeline(&catalog, &r).unwrap_err(),
        PlanError::EmptyEventType
    );

    let mut r = ok.clone();
    r.guest_count = 0;
    assert_eq!(
        generate_timeline(&catalog, &r).unwrap_err(),
        PlanError::InvalidGuestCount
    );

    let mut r = ok.clone();
    r.budget = 0.0;
    assert_eq!(
        generate_timeline(&catalog, &r).unwrap_err(),
        PlanError::InvalidBudget(0.0)
    );

    let mut r = ok.clone();
    r.budget = -50.0;
    assert!(matches!(
        generate_timeline(&catalog, &r).unwrap_err(),
        PlanError::InvalidBudget(_)
    ));

    let mut r = ok;
    r.event_date = "20-12-2025".into();
    assert!(matches!(
        generate_timeline(&catalog, &r).unwrap_err(),
        PlanError::InvalidEventDate(_)
    ));
}

#[test]
fn test_tasks_sorted_by_deadline() {
    let catalog = RuleCatalog::builtin();
    let plan = generate_timeline(
        &catalog,
        &request(
            "Lebanese Wedding",
            "2025-12-20",
            200,
            30_000.0,
            checked(&["Traditional Zaffe Procession", "Dabke Performance"]),
        ),
    )
    .unwrap();

    for pair in plan.tasks.windows(2) {
        assert!(pair[0].deadline <= pair[1].deadline);
    }
}

#[test]
fn test_single_post_event_task() {
    let catalog = RuleCatalog::builtin();
    let event_date = date(2025, 12, 20);
    let plan = generate_timeline(
        &catalog,
        &request("Lebanese Wedding", "2025-12-20", 200, 30_000.0, Answers::new()),
    )
    .unwrap();

    let after: Vec<_> = plan
        .tasks
        .iter()
        .filter(|t| t.deadline > event_date)
        .collect();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].task, "Send thank-you notes and follow-up");
    assert_eq!(after[0].deadline, date(2026, 1, 3));
    // Sorted ascending, so it is the last task.
    assert_eq!(plan.tasks.last().unwrap().task, after[0].task);
}

#[test]
fn test_task_ids_unique_and_completed_false() {
    let catalog = RuleCatalog::builtin();
    let plan = generate_timeline(
        &catalog,
        &request("Corporate Conference", "2025-10-01", 120, 20_000.0, Answers::new()),
    )
    .unwrap();

    let ids: HashSet<&str> = plan.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), plan.tasks.len());
    assert!(plan.tasks.iter().all(|t| !t.completed));
}

#[test]
fn test_deterministic_apart_from_ids() {
    let catalog = RuleCatalog::builtin();
    let req = request(
        "Lebanese Wedding",
        "2025-12-20",
        200,
        30_000.0,
        checked(&["Traditional Zaffe Procession", "Live Arabic Music Band"]),
    );

    let a = generate_timeline(&catalog, &req).unwrap();
    let b = generate_timeline(&catalog, &req).unwrap();

    assert_eq!(a.tasks.len(), b.tasks.len());
    for (x, y) in a.tasks.iter().zip(&b.tasks) {
        assert_eq!(x.task, y.task);
        assert_eq!(x.deadline, y.deadline);
        assert_eq!(x.estimated_cost, y.estimated_cost);
        assert_eq!(x.recommended_cost, y.recommended_cost);
        assert_eq!(x.suggested_vendor_category, y.suggested_vendor_category);
    }
}

#[test]
fn test_wedding_scenario() {
    let catalog = RuleCatalog::builtin();
    let plan = generate_timeline(
        &catalog,
        &request(
            "Lebanese Wedding",
            "2025-12-20",
            200,
            30_000.0,
            checked(&["Traditional Zaffe Procession"]),
        ),
    )
    .unwrap();

    // 200 guests is a large event: venue booking moves out to 6 months.
    let venue = plan
        .tasks
        .iter()
        .find(|t| t.task == "Research and book venue")
        .unwrap();
    assert_eq!(venue.deadline, date(2025, 6, 20));
    // 35% of 30000 = 10500, band 1.3 with large-venue boost 1.2.
    assert_eq!(venue.estimated_cost, 16_380.0);
    assert_eq!(venue.recommended_cost, Some(22_932.0));

    // Zaffe: 8% of 30000 = 2400, entertainment scaling at 200 guests
    // is 1.3 * 1.15.
    let zaffe = plan
        .tasks
        .iter()
        .find(|t| t.task == "Organize traditional Zaffe procession")
        .unwrap();
    assert_eq!(zaffe.estimated_cost, 3_588.0);
    assert_eq!(zaffe.recommended_cost, Some(5_023.0));

    // Venues allocation at 35% for weddings.
    let venues_pct = plan
        .cost_breakdown
        .iter()
        .find(|i| i.category == eventline::models::VendorCategory::Venues)
        .unwrap()
        .percentage;
    assert_eq!(venues_pct, 35);
}

#[test]
fn test_small_birthday_scenario() {
    let catalog = RuleCatalog::builtin();
    let plan = generate_timeline(
        &catalog,
        &request("Birthday Party", "2025-06-01", 30, 1000.0, Answers::new()),
    )
    .unwrap();

    // With no answers, the birthday family appends nothing: just the 13
    // base tasks (single invitation task for non-weddings).
    assert_eq!(plan.tasks.len(), 13);

    // Thank-you notes: 2 per guest, small-event multiplier 0.8.
    let thanks = plan
        .tasks
        .iter()
        .find(|t| t.task == "Send thank-you notes and follow-up")
        .unwrap();
    assert_eq!(thanks.estimated_cost, 48.0);
    assert_eq!(thanks.recommended_cost, None);

    // Non-wedding venue deadline: 4 months out for a small event.
    let venue = plan
        .tasks
        .iter()
        .find(|t| t.task == "Research and book venue")
        .unwrap();
    assert_eq!(venue.deadline, date(2025, 2, 1));
}

#[test]
fn test_unknown_event_type_gets_base_tasks_only() {
    let catalog = RuleCatalog::builtin();
    let plan = generate_timeline(
        &catalog,
        &request(
            "Some Unknown Festival",
            "2025-09-15",
            80,
            5_000.0,
            checked(&["Keynote Speakers", "Custom Birthday Cake"]),
        ),
    )
    .unwrap();
    // Answers cannot summon family tasks without a family match.
    assert_eq!(plan.tasks.len(), 13);
}

#[test]
fn test_large_event_boundary() {
    let catalog = RuleCatalog::builtin();
    let venue_deadline = |guests: u32| {
        generate_timeline(
            &catalog,
            &request("Graduation Party", "2025-12-01", guests, 8_000.0, Answers::new()),
        )
        .unwrap()
        .tasks
        .into_iter()
        .find(|t| t.task == "Research and book venue")
        .unwrap()
        .deadline
    };
    // 150 guests is not large (strict greater-than), 151 is.
    assert_eq!(venue_deadline(150), date(2025, 8, 1));
    assert_eq!(venue_deadline(151), date(2025, 6, 1));
}

#[test]
fn test_every_selected_wedding_option_appends_its_task() {
    let catalog = RuleCatalog::builtin();
    let mut answers = Answers::new();
    for q in catalog.questions_for("Lebanese Wedding") {
        if q.multi_select {
            for option in &q.options {
                answers.insert(option.clone(), AnswerValue::Flag(true));
            }
        }
    }

    let plan = generate_timeline(
        &catalog,
        &request("Lebanese Wedding", "2025-12-20", 200, 30_000.0, answers),
    )
    .unwrap();

    // 14 wedding base tasks + 8 answer-driven tasks + 4 wedding
    // essentials. Options without an append rule (e.g. "DJ with Mixed
    // Music") contribute nothing.
    assert_eq!(plan.tasks.len(), 26);

    for expected in [
        "Organize traditional Zaffe procession",
        "Arrange Dabke performance and instruction",
        "Plan traditional Lebanese feast menu",
        "Book live Arabic music band",
        "Book wedding photographer and videographer",
        "Design elaborate floral arrangements",
        "Order wedding cake and traditional sweets",
        "Book bridal beauty services",
    ] {
        assert!(
            plan.tasks.iter().any(|t| t.task == expected),
            "missing task: {}",
            expected
        );
    }
}

#[test]
fn test_falsy_answers_append_nothing() {
    let catalog = RuleCatalog::builtin();
    let mut answers = Answers::new();
    answers.insert("Traditional Zaffe Procession".into(), AnswerValue::Flag(false));
    answers.insert("Dabke Performance".into(), AnswerValue::Text(String::new()));
    answers.insert("Bridal Beauty Services".into(), AnswerValue::List(vec![]));

    let plan = generate_timeline(
        &catalog,
        &request("Lebanese Wedding", "2025-12-20", 100, 10_000.0, answers),
    )
    .unwrap();
    // Only base + essentials: nothing answer-driven.
    assert_eq!(plan.tasks.len(), 18);
}

#[test]
fn test_costs_non_negative() {
    let catalog = RuleCatalog::builtin();
    let plan = generate_timeline(
        &catalog,
        &request("Eid al-Fitr Celebration", "2025-03-30", 60, 2_000.0,
            checked(&["Traditional Religious Decorations", "Community Involvement"])),
    )
    .unwrap();
    for t in &plan.tasks {
        assert!(t.estimated_cost >= 0.0);
        if let Some(rec) = t.recommended_cost {
            assert!(rec >= t.estimated_cost);
        }
    }
}
