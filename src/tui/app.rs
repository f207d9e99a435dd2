use ratatui::widgets::TableState;

use crate::models::{EventPlan, EventTask};
use crate::storage::{load_plan, save_plan};

pub enum ViewMode {
    Tasks,
    Budget,
}

pub struct App {
    /// The saved plan, if one exists.
    pub plan: Option<EventPlan>,
    /// Tasks currently displayed (completed ones filtered out unless
    /// `show_completed`).
    pub tasks: Vec<EventTask>,
    pub state: TableState,
    pub view_mode: ViewMode,
    pub show_completed: bool,
}

impl App {
    /// Creates a new App instance and loads the saved plan.
    pub fn new() -> App {
        let mut app = App {
            plan: load_plan(),
            tasks: Vec::new(),
            state: TableState::default(),
            view_mode: ViewMode::Tasks,
            show_completed: false,
        };
        app.reload();
        app
    }

    /// Refreshes the displayed task list from the plan.
    pub fn reload(&mut self) {
        self.tasks.clear();
        if let Some(plan) = &self.plan {
            for t in &plan.tasks {
                if self.show_completed || !t.completed {
                    self.tasks.push(t.clone());
                }
            }
        }

        if self.tasks.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.tasks.len() {
                self.state.select(Some(self.tasks.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }

    /// Selects the next task.
    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous task.
    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Toggles the completion state of the selected task and persists it.
    pub fn toggle_selected(&mut self) {
        if let ViewMode::Budget = self.view_mode {
            return;
        }
        let selected_id = match self.state.selected().and_then(|i| self.tasks.get(i)) {
            Some(t) => t.id.clone(),
            None => return,
        };
        if let Some(plan) = &mut self.plan {
            if let Some(t) = plan.tasks.iter_mut().find(|t| t.id == selected_id) {
                t.completed = !t.completed;
            }
            let _ = save_plan(plan);
        }
        self.reload();
    }

    /// Toggles the visibility of completed tasks.
    pub fn toggle_completed(&mut self) {
        self.show_completed = !self.show_completed;
        self.reload();
    }

    /// Toggles between the timeline and budget views.
    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Tasks => ViewMode::Budget,
            ViewMode::Budget => ViewMode::Tasks,
        };
    }
}
