//! Event timeline & budget planner.
//!
//! The core ([`catalog`], [`costs`], [`timeline`]) is a pure, rule-driven
//! derivation: event type, date, guest count, budget, and collected
//! answers go in; an ordered task checklist with deadlines counted back
//! from the event date and a percentage-based budget breakdown come out.
//! The surrounding modules ([`storage`], [`commands`], [`tui`]) are the
//! calling application: they persist the generated plan as JSON and
//! present it in the terminal.

pub mod catalog;
pub mod commands;
pub mod costs;
pub mod models;
pub mod storage;
pub mod timeline;
pub mod tui;
