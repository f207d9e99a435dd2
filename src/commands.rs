use std::io::{self, Write};

use chrono::Local;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::catalog::{RuleCatalog, EVENT_TYPES};
use crate::models::{Answers, AnswerValue, CostBreakdownItem, EventPlan, EventTask, PlanRequest};
use crate::storage::{delete_plan, load_plan, save_plan};
use crate::timeline::{generate_timeline, parse_event_date};

/// Parses `--answer` flags: a bare option label counts as a checked
/// checkbox; `key=value` stores free text.
pub fn parse_answers(raw: &[String]) -> Answers {
    let mut answers = Answers::new();
    for entry in raw {
        match entry.split_once('=') {
            Some((key, value)) => {
                answers.insert(key.trim().to_string(), AnswerValue::Text(value.to_string()));
            }
            None => {
                answers.insert(entry.trim().to_string(), AnswerValue::Flag(true));
            }
        }
    }
    answers
}

/// Generates a plan, saves it, and prints the timeline and budget tables.
pub fn cmd_generate(
    event_type: String,
    date: String,
    guests: u32,
    budget: f64,
    raw_answers: Vec<String>,
    silent: bool,
) {
    let request = PlanRequest {
        event_type,
        event_date: date,
        guest_count: guests,
        budget,
        answers: parse_answers(&raw_answers),
    };

    let catalog = RuleCatalog::builtin();
    let generated = match generate_timeline(&catalog, &request) {
        Ok(g) => g,
        Err(e) => {
            if !silent {
                eprintln!("Cannot generate plan: {}", e);
            }
            return;
        }
    };

    // The date was validated by the generator.
    let event_date = match parse_event_date(&request.event_date) {
        Ok(d) => d,
        Err(e) => {
            if !silent {
                eprintln!("Cannot generate plan: {}", e);
            }
            return;
        }
    };

    let plan = EventPlan {
        event_type: request.event_type.clone(),
        event_date,
        guest_count: request.guest_count,
        budget: request.budget,
        generated_at: Local::now().to_rfc3339(),
        tasks: generated.tasks,
        cost_breakdown: generated.cost_breakdown,
    };

    if let Err(e) = save_plan(&plan) {
        if !silent {
            eprintln!("Failed to save plan: {}", e);
        }
        return;
    }

    if !silent {
        println!(
            "Plan generated for {} on {} ({} guests, budget {:.0}): {} tasks.",
            plan.event_type,
            plan.event_date,
            plan.guest_count,
            plan.budget,
            plan.tasks.len()
        );
        print_task_table(&plan.tasks);
        print_breakdown_table(&plan.cost_breakdown);
    }
}

/// Prints the saved plan's tasks; hides completed ones unless `all`.
pub fn cmd_show(all: bool) {
    let plan = match load_plan() {
        Some(p) => p,
        None => {
            println!("No saved plan. Run `eventline generate` first.");
            return;
        }
    };

    println!(
        "{} on {} — {} guests, budget {:.0}",
        plan.event_type, plan.event_date, plan.guest_count, plan.budget
    );

    let tasks: Vec<EventTask> = if all {
        plan.tasks
    } else {
        plan.tasks.into_iter().filter(|t| !t.completed).collect()
    };
    if tasks.is_empty() {
        println!("No pending tasks.");
        return;
    }
    print_task_table(&tasks);
}

/// Prints the saved plan's cost breakdown.
pub fn cmd_budget() {
    let plan = match load_plan() {
        Some(p) => p,
        None => {
            println!("No saved plan. Run `eventline generate` first.");
            return;
        }
    };
    println!(
        "Budget breakdown for {} ({:.0} total)",
        plan.event_type, plan.budget
    );
    print_breakdown_table(&plan.cost_breakdown);
}

/// Marks a task complete (or pending again). Accepts either the full task
/// id or the 1-based position shown by `show --all`.
pub fn cmd_set_completed(task_ref: String, completed: bool, silent: bool) {
    let mut plan = match load_plan() {
        Some(p) => p,
        None => {
            if !silent {
                eprintln!("No saved plan.");
            }
            return;
        }
    };

    let index = match find_task(&plan.tasks, &task_ref) {
        Some(i) => i,
        None => {
            if !silent {
                eprintln!("Task '{}' not found.", task_ref);
            }
            return;
        }
    };
    plan.tasks[index].completed = completed;
    let label = if completed { "complete" } else { "pending" };

    if let Err(e) = save_plan(&plan) {
        if !silent {
            eprintln!("Failed to save plan: {}", e);
        }
    } else if !silent {
        println!("Task '{}' marked as {}.", plan.tasks[index].task, label);
    }
}

fn find_task(tasks: &[EventTask], task_ref: &str) -> Option<usize> {
    if let Some(i) = tasks.iter().position(|t| t.id == task_ref) {
        return Some(i);
    }
    // Fall back to the 1-based table position.
    task_ref
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&i| i < tasks.len())
}

/// Prints the question set used to collect answers for an event type.
pub fn cmd_questions(event_type: String) {
    let catalog = RuleCatalog::builtin();
    let questions = catalog.questions_for(&event_type);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Question").add_attribute(Attribute::Bold),
            Cell::new("Options").add_attribute(Attribute::Bold),
            Cell::new("Multi").add_attribute(Attribute::Bold),
        ]);
    for q in questions {
        table.add_row(vec![
            Cell::new(&q.id),
            Cell::new(&q.question),
            Cell::new(q.options.join("\n")),
            Cell::new(if q.multi_select { "yes" } else { "no" }),
        ]);
    }
    println!("{table}");
    println!("Pass chosen options to `generate` via --answer \"<option>\".");
}

/// Lists the recognized event type labels.
pub fn cmd_types() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![Cell::new("Event Type").add_attribute(Attribute::Bold)]);
    for event_type in EVENT_TYPES {
        table.add_row(vec![*event_type]);
    }
    println!("{table}");
}

/// Deletes the saved plan.
pub fn cmd_reset(force: bool) {
    if !force {
        print!("Are you sure you want to delete the saved plan? This cannot be undone. [y/N] ");
        io::stdout().flush().unwrap();
        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        if input.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = delete_plan() {
        eprintln!("Failed to delete plan: {}", e);
    } else {
        println!("Saved plan deleted.");
    }
}

fn print_task_table(tasks: &[EventTask]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Deadline").add_attribute(Attribute::Bold),
            Cell::new("Days Left").add_attribute(Attribute::Bold),
            Cell::new("Est").add_attribute(Attribute::Bold),
            Cell::new("Rec").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    let today = Local::now().date_naive();

    for (i, t) in tasks.iter().enumerate() {
        let days_left = (t.deadline - today).num_days();
        let time_left_str = if days_left < 0 {
            format!("{}d overdue", days_left.abs())
        } else if days_left == 0 {
            "Today".to_string()
        } else {
            format!("{}d", days_left)
        };

        let deadline_color = if t.completed {
            Color::Grey
        } else if days_left < 0 {
            Color::Red
        } else if days_left <= 14 {
            Color::Yellow
        } else {
            Color::Green
        };

        let status = if t.completed { "Done" } else { "Pending" };
        let status_color = if t.completed { Color::Green } else { Color::Yellow };

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&t.task),
            Cell::new(t.deadline),
            Cell::new(time_left_str).fg(deadline_color),
            Cell::new(format!("{:.0}", t.estimated_cost)),
            Cell::new(
                t.recommended_cost
                    .map(|c| format!("{:.0}", c))
                    .unwrap_or_else(|| "-".into()),
            ),
            Cell::new(
                t.suggested_vendor_category
                    .map(|c| c.label().to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(status).fg(status_color),
        ]);
    }

    println!("{table}");
}

fn print_breakdown_table(items: &[CostBreakdownItem]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("%").add_attribute(Attribute::Bold),
            Cell::new("Est").add_attribute(Attribute::Bold),
            Cell::new("Rec").add_attribute(Attribute::Bold),
            Cell::new("Covers").add_attribute(Attribute::Bold),
        ]);

    for item in items {
        table.add_row(vec![
            Cell::new(item.category.label()),
            Cell::new(format!("{}%", item.percentage)),
            Cell::new(format!("{:.0}", item.estimated_cost)),
            Cell::new(format!("{:.0}", item.recommended_cost)),
            Cell::new(&item.description),
        ]);
    }

    let total_pct: u32 = items.iter().map(|i| i.percentage).sum();
    let total_est: f64 = items.iter().map(|i| i.estimated_cost).sum();
    let total_rec: f64 = items.iter().map(|i| i.recommended_cost).sum();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", total_pct)).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", total_est)).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", total_rec)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    println!("{table}");
}
