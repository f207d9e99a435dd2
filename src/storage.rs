use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::models::EventPlan;

/// Returns the path to the saved plan file (`plan.json`).
///
/// The path is determined in the following order:
/// 1. `EVENTLINE_DB` environment variable.
/// 2. `~/.local/share/eventline/plan.json` (on Linux).
/// 3. `./plan.json` (fallback).
fn plan_path() -> PathBuf {
    std::env::var("EVENTLINE_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push("eventline");
            if !p.exists() {
                let _ = fs::create_dir_all(&p);
            }
            p.push("plan.json");
            p
        })
}

/// Loads the saved plan.
///
/// Returns `None` if no plan has been saved or the file cannot be read.
pub fn load_plan() -> Option<EventPlan> {
    let path = plan_path();
    if !path.exists() {
        return None;
    }
    let mut f = match OpenOptions::new().read(true).open(&path) {
        Ok(f) => f,
        Err(_) => return None,
    };
    let mut s = String::new();
    if f.read_to_string(&mut s).is_err() {
        return None;
    }
    serde_json::from_str(&s).ok()
}

/// Saves the plan, overwriting any previously saved one.
pub fn save_plan(plan: &EventPlan) -> std::io::Result<()> {
    let path = plan_path();
    let s = serde_json::to_string_pretty(plan).unwrap();
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Deletes the saved plan file.
pub fn delete_plan() -> std::io::Result<()> {
    let path = plan_path();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
