#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dayplan::db::tasks::Tasks;
    use dayplan::db::users::Users;
    use dayplan::libs::formatter::format_due_date;
    use dayplan::libs::task::{Task, TaskCategory, TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PlannerFlowTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for PlannerFlowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PlannerFlowTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(PlannerFlowTestContext)]
    #[test]
    fn test_full_planner_flow(_ctx: &mut PlannerFlowTestContext) {
        let mut users = Users::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        // Step 1: Register an account
        let registered = users.register("flow_planner", "flow_password").unwrap();
        let user_id = registered.id.unwrap();

        // Step 2: Sign in with the same credentials
        let signed_in = users.authenticate("flow_planner", "flow_password").unwrap();
        assert_eq!(signed_in.id, Some(user_id));
        assert_eq!(signed_in.username, "flow_planner");

        // Step 3: Plan a task for the morning of January 3rd
        let due = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let task = Task::new(Some(user_id), "Buy milk", due, TaskStatus::default(), TaskCategory::Achievement);
        let task_id = tasks.insert(&task).unwrap();

        // Step 4: The day view for January 3rd shows it, not yet started
        let day_view = tasks.fetch(Some(user_id), TaskFilter::Date(due.date())).unwrap();
        assert_eq!(day_view.len(), 1);
        assert_eq!(day_view[0].id, Some(task_id));
        assert_eq!(day_view[0].text, "Buy milk");
        assert_eq!(day_view[0].status, TaskStatus::NotYetStarted);

        // Step 5: The week view around that date shows it too
        let week_view = tasks.fetch(Some(user_id), TaskFilter::Week(due.date())).unwrap();
        assert_eq!(week_view.len(), 1);
        assert_eq!(week_view[0].id, Some(task_id));

        // Step 6: Mark it done and read it back
        tasks.set_status(task_id, TaskStatus::Completed).unwrap();
        let day_view = tasks.fetch(Some(user_id), TaskFilter::Date(due.date())).unwrap();
        assert_eq!(day_view.len(), 1);
        assert_eq!(day_view[0].status, TaskStatus::Completed);

        // Step 7: The due stamp renders the way the planner shows it
        assert_eq!(format_due_date(&day_view[0].due_at), "03 January 2024, 09:00:00");
    }

    #[test_context(PlannerFlowTestContext)]
    #[test]
    fn test_anonymous_quick_capture_flow(_ctx: &mut PlannerFlowTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // No account: tasks land in the anonymous context
        let due = NaiveDate::from_ymd_opt(2031, 7, 9).unwrap().and_hms_opt(14, 0, 0).unwrap();
        let task = Task::new(None, "Water the plants", due, TaskStatus::default(), TaskCategory::Improve);
        let task_id = tasks.insert(&task).unwrap();

        let day_view = tasks.fetch(None, TaskFilter::Date(due.date())).unwrap();
        assert_eq!(day_view.len(), 1);
        assert_eq!(day_view[0].id, Some(task_id));
        assert_eq!(day_view[0].user_id, None);

        tasks.set_status(task_id, TaskStatus::Canceled).unwrap();
        let day_view = tasks.fetch(None, TaskFilter::Date(due.date())).unwrap();
        assert_eq!(day_view[0].status, TaskStatus::Canceled);
    }

    #[test_context(PlannerFlowTestContext)]
    #[test]
    fn test_two_accounts_keep_separate_schedules(_ctx: &mut PlannerFlowTestContext) {
        let mut users = Users::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        let alice = users.register("flow_alice", "alice_password").unwrap();
        let bob = users.register("flow_bob", "bob_password").unwrap();
        let alice_id = alice.id.unwrap();
        let bob_id = bob.id.unwrap();

        let due = NaiveDate::from_ymd_opt(2033, 3, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
        tasks
            .insert(&Task::new(Some(alice_id), "Review quarterly goals", due, TaskStatus::default(), TaskCategory::Strategic))
            .unwrap();
        tasks
            .insert(&Task::new(Some(bob_id), "Practice scales", due, TaskStatus::default(), TaskCategory::NewLearning))
            .unwrap();

        let alice_view = tasks.fetch(Some(alice_id), TaskFilter::Date(due.date())).unwrap();
        assert_eq!(alice_view.len(), 1);
        assert_eq!(alice_view[0].text, "Review quarterly goals");

        let bob_view = tasks.fetch(Some(bob_id), TaskFilter::Date(due.date())).unwrap();
        assert_eq!(bob_view.len(), 1);
        assert_eq!(bob_view[0].text, "Practice scales");
    }
}
