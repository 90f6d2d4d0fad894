#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use taskdeck::db::tasks::TaskStore;
    use taskdeck::libs::error::TaskError;
    use taskdeck::libs::repository::{SharedStore, TaskRepository};
    use taskdeck::libs::task::{NewTask, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RepoTestContext {
        _temp_dir: TempDir,
        store: SharedStore,
    }

    impl TestContext for RepoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::open(temp_dir.path().join("taskdeck.db")).unwrap();
            RepoTestContext {
                _temp_dir: temp_dir,
                store: Arc::new(Mutex::new(store)),
            }
        }
    }

    fn repo(ctx: &RepoTestContext) -> TaskRepository {
        TaskRepository::with_store(ctx.store.clone())
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            ..NewTask::default()
        }
    }

    fn all(repo: &TaskRepository) -> Vec<Task> {
        repo.list().snapshot().unwrap()
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn add_and_read_back(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        let fields = NewTask {
            title: "Buy milk".to_string(),
            description: Some("2 liters".to_string()),
            due_date: Some(Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap()),
            category: Some("Shopping".to_string()),
            tags: vec!["errand".to_string(), "food".to_string()],
        };
        repo.add(&fields).unwrap();

        let tasks = all(&repo);
        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description.as_deref(), Some("2 liters"));
        assert_eq!(task.due_date, fields.due_date);
        assert_eq!(task.category.as_deref(), Some("Shopping"));
        assert_eq!(task.tags, vec!["errand", "food"]);
        assert!(!task.is_completed);
        assert!(task.updated_at.is_none());
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn blank_title_is_rejected_without_touching_the_store(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        let err = repo.add(&new_task("  ")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert_eq!(err.to_string(), "Title cannot be empty");
        assert!(all(&repo).is_empty());
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn update_stamps_updated_at(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        repo.add(&new_task("Original")).unwrap();

        let mut task = all(&repo).remove(0);
        task.title = "Renamed".to_string();
        task.tags = vec!["later".to_string()];
        repo.update(&task).unwrap();

        let updated = repo.get(task.id).unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.tags, vec!["later"]);
        let stamped = updated.updated_at.expect("update stamps updated_at");
        assert!(stamped >= updated.created_at);
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn update_of_missing_id_fails_loudly(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        repo.add(&new_task("Only task")).unwrap();
        let mut task = all(&repo).remove(0);
        task.id = 9999;

        let err = repo.update(&task).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(9999)));
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn update_with_blank_title_is_rejected(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        repo.add(&new_task("Valid")).unwrap();
        let mut task = all(&repo).remove(0);
        task.title = "   ".to_string();

        let err = repo.update(&task).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert_eq!(repo.get(task.id).unwrap().unwrap().title, "Valid");
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn delete_is_idempotent(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        repo.add(&new_task("Short lived")).unwrap();
        let id = all(&repo)[0].id;

        repo.delete(id).unwrap();
        assert!(all(&repo).is_empty());

        // Deleting again is a no-op, not an error.
        repo.delete(id).unwrap();
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn toggle_twice_restores_original_state(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        repo.add(&new_task("Flip me")).unwrap();
        let id = all(&repo)[0].id;

        repo.toggle_completion(id).unwrap();
        assert!(repo.get(id).unwrap().unwrap().is_completed);

        repo.toggle_completion(id).unwrap();
        let task = repo.get(id).unwrap().unwrap();
        assert!(!task.is_completed);
        assert!(task.updated_at.is_some());
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn toggle_of_missing_id_fails(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        let err = repo.toggle_completion(42).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(42)));
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn incomplete_and_category_queries_narrow_the_result(ctx: &mut RepoTestContext) {
        let repo = repo(ctx);
        let mut work = new_task("report");
        work.category = Some("Work".to_string());
        repo.add(&work).unwrap();
        repo.add(&new_task("chore")).unwrap();

        let chore_id = all(&repo).iter().find(|t| t.title == "chore").unwrap().id;
        repo.toggle_completion(chore_id).unwrap();

        let incomplete = repo.list_incomplete().snapshot().unwrap();
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0].title, "report");

        let by_category = repo.list_by_category("Work").snapshot().unwrap();
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].title, "report");
        assert!(repo.list_by_category("Personal").snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn subscriptions_emit_current_snapshot_then_changes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store: SharedStore = Arc::new(Mutex::new(TaskStore::open(temp_dir.path().join("taskdeck.db")).unwrap()));
        let repo = TaskRepository::with_store(store.clone());
        repo.add(&new_task("first")).unwrap();

        let mut subscription = repo.list();
        let initial = subscription.recv().await.unwrap();
        assert_eq!(initial.len(), 1);

        // A mutation through another handle of the same store is observed.
        let writer = TaskRepository::with_store(store);
        writer.add(&new_task("second")).unwrap();
        let next = subscription.recv().await.unwrap();
        assert_eq!(next.len(), 2);
    }
}
