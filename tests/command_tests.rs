use eventline::commands::*;
use eventline::models::AnswerValue;
use eventline::storage::load_plan;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

// Use a mutex to ensure tests run serially since they modify the environment variable
static TEST_MUTEX: Mutex<()> = Mutex::new(());

fn with_test_db<F>(test_name: &str, f: F)
where
    F: FnOnce(PathBuf),
{
    let _guard = TEST_MUTEX.lock().unwrap();

    let mut db_path = env::temp_dir();
    db_path.push(format!("eventline_test_{}.json", test_name));

    // Set env var
    env::set_var("EVENTLINE_DB", db_path.to_str().unwrap());

    // Clean up before test
    if db_path.exists() {
        fs::remove_file(&db_path).unwrap();
    }

    // Run test
    f(db_path.clone());

    // Clean up after test
    if db_path.exists() {
        fs::remove_file(&db_path).unwrap();
    }
    env::remove_var("EVENTLINE_DB");
}

#[test]
fn test_generate_saves_plan() {
    with_test_db("generate", |_path| {
        cmd_generate(
            "Lebanese Wedding".into(),
            "2025-12-20".into(),
            200,
            30_000.0,
            vec!["Traditional Zaffe Procession".into()],
            true,
        );

        let plan = load_plan().expect("plan should be saved");
        assert_eq!(plan.event_type, "Lebanese Wedding");
        assert_eq!(plan.guest_count, 200);
        assert!(plan
            .tasks
            .iter()
            .any(|t| t.task == "Organize traditional Zaffe procession"));
        let total_pct: u32 = plan.cost_breakdown.iter().map(|i| i.percentage).sum();
        assert_eq!(total_pct, 100);
    });
}

#[test]
fn test_generate_rejects_invalid_input() {
    with_test_db("generate_invalid", |_path| {
        cmd_generate(
            "Birthday Party".into(),
            "2025-06-01".into(),
            0,
            1000.0,
            vec![],
            true,
        );
        assert!(load_plan().is_none());
    });
}

#[test]
fn test_complete_by_position_and_id() {
    with_test_db("complete", |_path| {
        cmd_generate(
            "Birthday Party".into(),
            "2025-06-01".into(),
            30,
            1000.0,
            vec![],
            true,
        );

        // By 1-based position
        cmd_set_completed("1".into(), true, true);
        let plan = load_plan().unwrap();
        assert!(plan.tasks[0].completed);

        // By id
        let id = plan.tasks[1].id.clone();
        cmd_set_completed(id, true, true);
        let plan = load_plan().unwrap();
        assert!(plan.tasks[1].completed);

        // And back to pending
        cmd_set_completed("1".into(), false, true);
        let plan = load_plan().unwrap();
        assert!(!plan.tasks[0].completed);
    });
}

#[test]
fn test_regenerate_overwrites_plan() {
    with_test_db("regenerate", |_path| {
        cmd_generate(
            "Birthday Party".into(),
            "2025-06-01".into(),
            30,
            1000.0,
            vec![],
            true,
        );
        cmd_generate(
            "Corporate Conference".into(),
            "2025-10-01".into(),
            120,
            20_000.0,
            vec![],
            true,
        );

        let plan = load_plan().unwrap();
        assert_eq!(plan.event_type, "Corporate Conference");
    });
}

#[test]
fn test_reset_deletes_plan() {
    with_test_db("reset", |_path| {
        cmd_generate(
            "Birthday Party".into(),
            "2025-06-01".into(),
            30,
            1000.0,
            vec![],
            true,
        );
        assert!(load_plan().is_some());

        cmd_reset(true);
        assert!(load_plan().is_none());
    });
}

#[test]
fn test_parse_answers() {
    let answers = parse_answers(&[
        "Traditional Zaffe Procession".to_string(),
        "scale=Grand Celebration (400+ guests)".to_string(),
    ]);
    assert_eq!(
        answers.get("Traditional Zaffe Procession"),
        Some(&AnswerValue::Flag(true))
    );
    assert_eq!(
        answers.get("scale"),
        Some(&AnswerValue::Text("Grand Celebration (400+ guests)".into()))
    );
}
