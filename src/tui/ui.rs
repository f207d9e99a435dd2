use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, ViewMode};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Plan summary
                Constraint::Min(0),    // Table
                Constraint::Length(3), // Help
            ]
            .as_ref(),
        )
        .split(f.area());

    let summary = match &app.plan {
        Some(plan) => format!(
            "{} on {}  |  {} guests  |  budget {:.0}",
            plan.event_type, plan.event_date, plan.guest_count, plan.budget
        ),
        None => "No saved plan. Run `eventline generate` first.".to_string(),
    };
    f.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL).title("Eventline")),
        chunks[0],
    );

    match app.view_mode {
        ViewMode::Tasks => {
            let today = Local::now().date_naive();

            let rows: Vec<Row> = app
                .tasks
                .iter()
                .map(|t| {
                    let days_left = (t.deadline - today).num_days();
                    let time_left_str = if days_left < 0 {
                        format!("{}d overdue", days_left.abs())
                    } else if days_left == 0 {
                        "Today".to_string()
                    } else {
                        format!("{}d", days_left)
                    };

                    let style = if t.completed {
                        Style::default().fg(Color::DarkGray)
                    } else if days_left < 0 {
                        Style::default().fg(Color::Red)
                    } else if days_left <= 14 {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::Green)
                    };

                    Row::new(vec![
                        Cell::from(if t.completed { "[x]" } else { "[ ]" }),
                        Cell::from(t.task.clone()),
                        Cell::from(t.deadline.to_string()),
                        Cell::from(time_left_str),
                        Cell::from(format!("{:.0}", t.estimated_cost)),
                        Cell::from(
                            t.recommended_cost
                                .map(|c| format!("{:.0}", c))
                                .unwrap_or_else(|| "-".into()),
                        ),
                        Cell::from(
                            t.suggested_vendor_category
                                .map(|c| c.label().to_string())
                                .unwrap_or_default(),
                        ),
                    ])
                    .style(style)
                })
                .collect();

            let widths = [
                Constraint::Length(3),
                Constraint::Min(30),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(24),
            ];

            let table = Table::new(rows, widths)
                .header(
                    Row::new(vec!["", "Task", "Deadline", "Time Left", "Est", "Rec", "Category"])
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                        .bottom_margin(1),
                )
                .block(Block::default().borders(Borders::ALL).title("Timeline"))
                .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
                .highlight_symbol(">> ");

            f.render_stateful_widget(table, chunks[1], &mut app.state);
        }
        ViewMode::Budget => {
            let items = app
                .plan
                .as_ref()
                .map(|p| p.cost_breakdown.as_slice())
                .unwrap_or_default();

            let rows: Vec<Row> = items
                .iter()
                .map(|item| {
                    Row::new(vec![
                        Cell::from(item.category.label()),
                        Cell::from(format!("{}%", item.percentage)),
                        Cell::from(format!("{:.0}", item.estimated_cost)),
                        Cell::from(format!("{:.0}", item.recommended_cost)),
                        Cell::from(item.description.clone()),
                    ])
                })
                .collect();

            let widths = [
                Constraint::Length(26),
                Constraint::Length(5),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(30),
            ];

            let table = Table::new(rows, widths)
                .header(
                    Row::new(vec!["Category", "%", "Est", "Rec", "Covers"])
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                        .bottom_margin(1),
                )
                .block(Block::default().borders(Borders::ALL).title("Budget"));

            f.render_widget(table, chunks[1]);
        }
    }

    let help_text = match app.view_mode {
        ViewMode::Tasks => "q: Quit | j/k: Move | Space: Toggle Done | c: Show/Hide Completed | v: Budget View",
        ViewMode::Budget => "q: Quit | v: Timeline View",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, chunks[2]);
}
