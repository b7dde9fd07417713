//! In-memory task storage.
//!
//! One [`TaskStore`] lives for the whole process. A single `RwLock` guards
//! both the id-to-task map and the per-user index, so create and delete stay
//! atomic across the two and concurrent commands never lose an index append.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{Task, TaskStatus};

#[derive(Debug, Default)]
struct StoreInner {
    /// Primary map: task id -> task
    tasks: HashMap<String, Task>,
    /// Per-user index: user id -> owned task ids, insertion-ordered
    user_tasks: HashMap<String, Vec<String>>,
}

/// Process-wide task store with a per-user index.
#[derive(Debug, Default)]
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task and append its id to the owning user's index.
    pub async fn insert(&self, user_id: &str, task: Task) {
        let mut inner = self.inner.write().await;
        inner
            .user_tasks
            .entry(user_id.to_string())
            .or_default()
            .push(task.id.clone());
        inner.tasks.insert(task.id.clone(), task);
    }

    /// Look up a task by id.
    pub async fn get(&self, task_id: &str) -> Option<Task> {
        self.inner.read().await.tasks.get(task_id).cloned()
    }

    /// Snapshot of a user's index: the number of indexed ids and the tasks
    /// that still exist in the store, in index order. Index entries pointing
    /// at since-deleted tasks count toward the total but produce no task.
    pub async fn snapshot_for_user(&self, user_id: &str) -> (usize, Vec<Task>) {
        let inner = self.inner.read().await;
        let Some(ids) = inner.user_tasks.get(user_id) else {
            return (0, Vec::new());
        };
        let tasks = ids
            .iter()
            .filter_map(|id| inner.tasks.get(id).cloned())
            .collect();
        (ids.len(), tasks)
    }

    /// Set a task's status in place, returning the updated task.
    pub async fn set_status(&self, task_id: &str, status: TaskStatus) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.get_mut(task_id)?;
        task.status = status;
        Some(task.clone())
    }

    /// Remove a task, dropping the first matching id from the calling
    /// user's index. A caller who does not own the task leaves the owner's
    /// index entry dangling; listings skip dangling ids.
    pub async fn remove(&self, user_id: &str, task_id: &str) -> Option<Task> {
        let mut inner = self.inner.write().await;
        if !inner.tasks.contains_key(task_id) {
            return None;
        }
        if let Some(ids) = inner.user_tasks.get_mut(user_id) {
            if let Some(pos) = ids.iter().position(|id| id == task_id) {
                ids.remove(pos);
            }
        }
        inner.tasks.remove(task_id)
    }

    /// Totals for the health endpoint: (tasks, distinct users seen).
    pub async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.tasks.len(), inner.user_tasks.len())
    }

    /// Full dump of all tasks and the complete user index, for the
    /// operator-only debug endpoint.
    pub async fn dump(&self) -> (Vec<Task>, HashMap<String, Vec<String>>) {
        let inner = self.inner.read().await;
        (
            inner.tasks.values().cloned().collect(),
            inner.user_tasks.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::extract::ParsedTask;
    use std::sync::Arc;

    fn task(title: &str) -> Task {
        Task::new(ParsedTask {
            title: title.to_string(),
            description: None,
            deadline: None,
        })
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let store = TaskStore::new();
        let t = task("Write report");
        let id = t.id.clone();
        store.insert("U1", t).await;

        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.title, "Write report");
        assert_eq!(store.counts().await, (1, 1));
    }

    #[tokio::test]
    async fn test_remove_clears_store_and_index() {
        let store = TaskStore::new();
        let t = task("Temp");
        let id = t.id.clone();
        store.insert("U1", t).await;

        let removed = store.remove("U1", &id).await.unwrap();
        assert_eq!(removed.title, "Temp");
        assert!(store.get(&id).await.is_none());

        let (indexed, tasks) = store.snapshot_for_user("U1").await;
        assert_eq!(indexed, 0);
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_remove_by_non_owner_leaves_dangling_index_entry() {
        let store = TaskStore::new();
        let t = task("Shared");
        let id = t.id.clone();
        store.insert("U1", t).await;

        // U2 deletes a task it does not own: the task goes away, but U1's
        // index still references the dead id.
        assert!(store.remove("U2", &id).await.is_some());

        let (indexed, tasks) = store.snapshot_for_user("U1").await;
        assert_eq!(indexed, 1);
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_set_status_mutates_in_place() {
        let store = TaskStore::new();
        let t = task("Flip me");
        let id = t.id.clone();
        store.insert("U1", t).await;

        let updated = store.set_status(&id, TaskStatus::Completed).await.unwrap();
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(store.get(&id).await.unwrap().status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_concurrent_creates_lose_no_index_appends() {
        let store = Arc::new(TaskStore::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert("U1", task(&format!("task {}", i))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let (indexed, tasks) = store.snapshot_for_user("U1").await;
        assert_eq!(indexed, 32);
        assert_eq!(tasks.len(), 32);
        assert_eq!(store.counts().await, (32, 1));
    }
}
