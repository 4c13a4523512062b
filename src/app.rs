//! Wiring between user events and the task list.
//!
//! Every event follows the same path: mutate the store, persist if the
//! collection changed, then show the resulting notice. Deleting a task and
//! logging out are held behind their own confirmation gates.

use std::time::Duration;

use log::{error, info};

use crate::context::ServiceContext;
use crate::gate::{ConfirmationGate, DELETE_TASK_PROMPT, LOGOUT_PROMPT};
use crate::notify::NotificationChannel;
use crate::persistence::TaskPersistence;
use crate::session::SessionTokens;
use crate::tasks::{Notice, Outcome, Task, TaskId, TaskStore};

/// A task list session bound to one service context.
pub struct TaskApp<'a> {
    ctx: &'a ServiceContext,
    store: TaskStore,
    notices: NotificationChannel,
    delete_gate: ConfirmationGate<TaskId>,
    logout_gate: ConfirmationGate<()>,
}

impl<'a> TaskApp<'a> {
    /// Loads the persisted collection and opens a session over it.
    #[must_use]
    pub fn open(ctx: &'a ServiceContext, notice_ttl: Duration) -> Self {
        let store = TaskStore::from_tasks(TaskPersistence::new(ctx).load());
        info!("event=app_open tasks={}", store.len());
        Self {
            ctx,
            store,
            notices: NotificationChannel::new(notice_ttl),
            delete_gate: ConfirmationGate::new(DELETE_TASK_PROMPT),
            logout_gate: ConfirmationGate::new(LOGOUT_PROMPT),
        }
    }

    /// The tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// The task with `id`, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// The notice currently on screen.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        self.notices.current()
    }

    /// Clears the notice on screen.
    pub fn dismiss_notice(&mut self) {
        self.notices.dismiss();
    }

    /// Adds a task.
    pub fn add(&mut self, title: &str, description: &str) -> Notice {
        let outcome = self.store.add(self.ctx.id_gen.as_ref(), title, description);
        self.settle(outcome)
    }

    /// Flips completion on the task with `id`.
    pub fn toggle_complete(&mut self, id: TaskId) -> Notice {
        let outcome = self.store.toggle_complete(id);
        self.settle(outcome)
    }

    /// Replaces title and description on the task with `id`.
    pub fn edit(&mut self, id: TaskId, title: &str, description: &str) -> Notice {
        let outcome = self.store.edit(id, title, description);
        self.settle(outcome)
    }

    /// Gate guarding task deletion.
    #[must_use]
    pub fn delete_gate(&self) -> &ConfirmationGate<TaskId> {
        &self.delete_gate
    }

    /// Asks for confirmation before deleting the task with `id`.
    pub fn request_delete(&mut self, id: TaskId) {
        self.delete_gate.request(id);
    }

    /// Deletes the task the delete gate was opened for.
    ///
    /// Returns `None` if no deletion was pending.
    pub fn confirm_delete(&mut self) -> Option<Notice> {
        let id = self.delete_gate.confirm()?;
        let outcome = self.store.delete(id);
        Some(self.settle(outcome))
    }

    /// Closes the delete gate without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.delete_gate.cancel();
    }

    /// Gate guarding logout.
    #[must_use]
    pub fn logout_gate(&self) -> &ConfirmationGate<()> {
        &self.logout_gate
    }

    /// Asks for confirmation before logging out.
    pub fn request_logout(&mut self) {
        self.logout_gate.request(());
    }

    /// Clears the session tokens if a logout was pending.
    ///
    /// Returns `true` if the gate was open and both tokens were removed.
    pub fn confirm_logout(&mut self) -> bool {
        let Some(()) = self.logout_gate.confirm() else {
            return false;
        };
        match SessionTokens::new(self.ctx).clear() {
            Ok(()) => {
                info!("event=logout status=ok");
                true
            }
            Err(err) => {
                error!("event=logout status=failed reason={err:?}");
                false
            }
        }
    }

    /// Closes the logout gate and stays logged in.
    pub fn cancel_logout(&mut self) {
        self.logout_gate.cancel();
    }

    fn settle(&mut self, outcome: Outcome) -> Notice {
        if outcome.changed {
            // A failed write is logged inside save; memory stays authoritative.
            let _ = TaskPersistence::new(self.ctx).save(self.store.tasks());
        }
        if let Some(message) = outcome.notice.message() {
            self.notices.notify(message);
        }
        outcome.notice
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::adapters::memory::SequentialIdGenerator;
    use crate::notify::DEFAULT_TTL;
    use crate::persistence::TASKS_KEY;
    use crate::ports::KeyValueStore;
    use crate::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

    fn ctx() -> ServiceContext {
        let mut ctx = ServiceContext::in_memory();
        ctx.id_gen = Box::new(SequentialIdGenerator::starting_at(1));
        ctx
    }

    fn stored(ctx: &ServiceContext) -> Vec<Task> {
        TaskPersistence::new(ctx).load()
    }

    #[test]
    fn add_persists_and_notifies() {
        let ctx = ctx();
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);

        assert_eq!(app.add("Buy milk", "2L"), Notice::TaskAdded);

        assert_eq!(app.notice().as_deref(), Some("Task Added"));
        assert_eq!(stored(&ctx), app.tasks());
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
            Err("read-only file system".into())
        }
        fn remove(&self, _key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
            Ok(())
        }
    }

    #[test]
    fn failed_save_keeps_task_and_notice() {
        let mut ctx = ctx();
        ctx.kv = Box::new(ReadOnlyStore);
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);

        assert_eq!(app.add("Buy milk", "2L"), Notice::TaskAdded);

        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].title, "Buy milk");
        assert_eq!(app.notice().as_deref(), Some("Task Added"));
    }

    #[test]
    fn rejected_add_notifies_without_writing() {
        let ctx = ctx();
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);

        assert_eq!(app.add("", "x"), Notice::FillBothFields);

        assert_eq!(app.notice().as_deref(), Some("Please fill in both fields"));
        assert_eq!(ctx.kv.get(TASKS_KEY).unwrap(), None);
    }

    #[test]
    fn open_restores_saved_tasks() {
        let ctx = ctx();
        {
            let mut app = TaskApp::open(&ctx, DEFAULT_TTL);
            let _ = app.add("one", "1");
            let _ = app.add("two", "2");
            let _ = app.toggle_complete(TaskId(1));
        }

        let app = TaskApp::open(&ctx, DEFAULT_TTL);
        let titles: Vec<&str> = app.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["two", "one"]);
        assert!(app.task(TaskId(1)).unwrap().completed);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn delete_needs_request_then_confirm() {
        let ctx = ctx();
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);
        let _ = app.add("doomed", "soon");

        assert_eq!(app.confirm_delete(), None);
        assert_eq!(app.tasks().len(), 1);

        app.request_delete(TaskId(1));
        assert!(app.delete_gate().is_visible());
        app.cancel_delete();
        assert_eq!(app.confirm_delete(), None);
        assert_eq!(app.tasks().len(), 1);

        app.request_delete(TaskId(1));
        assert_eq!(app.confirm_delete(), Some(Notice::TaskDeleted));
        assert!(app.tasks().is_empty());
        assert!(stored(&ctx).is_empty());
        assert_eq!(app.notice().as_deref(), Some("Task deleted"));
    }

    #[test]
    fn edit_updates_store_and_storage() {
        let ctx = ctx();
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);
        let _ = app.add("Old", "Old desc");

        assert_eq!(app.edit(TaskId(1), "New", "Desc"), Notice::TaskUpdated);

        assert_eq!(stored(&ctx)[0].title, "New");
        assert_eq!(app.notice().as_deref(), Some("Task updated"));
    }

    #[test]
    fn blank_edit_shows_nothing() {
        let ctx = ctx();
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);
        let _ = app.add("keep", "me");
        app.dismiss_notice();

        assert_eq!(app.edit(TaskId(1), "", ""), Notice::None);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn logout_clears_tokens_only_after_confirm() {
        let ctx = ctx();
        ctx.kv.set(ACCESS_TOKEN_KEY, "a").unwrap();
        ctx.kv.set(REFRESH_TOKEN_KEY, "r").unwrap();
        let mut app = TaskApp::open(&ctx, DEFAULT_TTL);

        app.request_logout();
        app.cancel_logout();
        assert!(!app.confirm_logout());
        assert!(SessionTokens::new(&ctx).is_logged_in());

        app.request_logout();
        assert!(app.confirm_logout());
        assert_eq!(SessionTokens::new(&ctx).load().unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn notices_expire_inside_a_runtime() {
        let ctx = ctx();
        let mut app = TaskApp::open(&ctx, Duration::from_millis(2000));
        let _ = app.add("a", "b");

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let _ = app.toggle_complete(TaskId(1));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(app.notice().as_deref(), Some("Task status updated"));

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(app.notice(), None);
    }
}
