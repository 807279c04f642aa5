use std::sync::Arc;

use smarttodo_storage::StorageBox;

use crate::{
    checklist_storage,
    entities::checklist::{Checklist, ChecklistTask},
    lookup::{self, Lookup},
    utils,
    write_queue::WriteQueue,
};

/// Authoritative in-memory collection of checklists.
///
/// Every mutation builds a new snapshot of the whole collection, publishes it
/// and enqueues a write of that snapshot. Mutations never wait for the write.
/// Readers holding a previous snapshot keep seeing it unchanged.
pub struct ChecklistStore {
    checklists: Arc<Vec<Checklist>>,
    writer: WriteQueue,
}

impl ChecklistStore {
    pub fn new(checklists: Vec<Checklist>, writer: WriteQueue) -> Self {
        Self {
            checklists: Arc::new(checklists),
            writer,
        }
    }

    /// Load the persisted collection, a missing or corrupt document starts empty
    pub async fn load(storage: &StorageBox, writer: WriteQueue) -> Self {
        let checklists = checklist_storage::load(storage).await;
        tracing::info!(count = checklists.len(), "loaded checklists");
        Self::new(checklists, writer)
    }

    /// Current snapshot, most recently created first
    pub fn checklists(&self) -> Arc<Vec<Checklist>> {
        Arc::clone(&self.checklists)
    }

    pub fn get(&self, id: &str) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    /// Checklists whose title contains `query`, ignoring case. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&Checklist> {
        let query = query.trim().to_lowercase();
        self.checklists
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&query))
            .collect()
    }

    pub fn find_by_prefix(&self, reference: &str) -> Lookup<&Checklist> {
        lookup::find_by_prefix(self.checklists.as_slice(), reference, |c| c.id.as_str())
    }

    pub fn find_task_by_prefix<'a>(
        &self,
        checklist: &'a Checklist,
        reference: &str,
    ) -> Lookup<&'a ChecklistTask> {
        lookup::find_by_prefix(checklist.tasks.as_slice(), reference, |t| t.id.as_str())
    }

    /// Prepend a new empty checklist.
    ///
    /// The title is trimmed but not validated, an empty title is stored as is.
    pub fn create(&mut self, title: &str) -> Checklist {
        let checklist = Checklist {
            id: utils::new_id("checklist"),
            title: title.trim().to_owned(),
            created_at: utils::unix_now_ms(),
            tasks: Vec::new(),
        };
        tracing::debug!(id = %checklist.id, "create checklist");

        let created = checklist.clone();
        self.update_and_persist(move |prev| {
            let mut next = Vec::with_capacity(prev.len() + 1);
            next.push(created);
            next.extend_from_slice(prev);
            next
        });
        checklist
    }

    /// Replace the title of a checklist with the trimmed `title`.
    ///
    /// Returns the renamed checklist, `None` when the id is unknown.
    pub fn rename_checklist(&mut self, id: &str, title: &str) -> Option<Checklist> {
        tracing::debug!(id, "rename checklist");
        let title = title.trim();
        let mut renamed = None;

        self.update_and_persist(|prev| {
            prev.iter()
                .map(|list| {
                    if list.id == id {
                        let list = Checklist {
                            title: title.to_owned(),
                            ..list.clone()
                        };
                        renamed = Some(list.clone());
                        list
                    } else {
                        list.clone()
                    }
                })
                .collect()
        });
        renamed
    }

    /// Returns the removed checklist, `None` when the id is unknown
    pub fn delete_checklist(&mut self, id: &str) -> Option<Checklist> {
        tracing::debug!(id, "delete checklist");
        let removed = self.get(id).cloned();

        self.update_and_persist(|prev| prev.iter().filter(|list| list.id != id).cloned().collect());
        removed
    }

    /// Append a new uncompleted task.
    ///
    /// Nothing happens (and nothing is written) when the trimmed title is
    /// empty. Returns `None` when the title is empty or the checklist unknown.
    pub fn add_task(&mut self, checklist_id: &str, title: &str) -> Option<ChecklistTask> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }
        tracing::debug!(checklist_id, "add task");

        let task = ChecklistTask {
            id: utils::new_id("task"),
            title: trimmed.to_owned(),
            completed: false,
            created_at: utils::unix_now_ms(),
        };
        let mut added = None;

        self.update_and_persist(|prev| {
            prev.iter()
                .map(|list| {
                    if list.id == checklist_id {
                        let mut tasks = list.tasks.clone();
                        tasks.push(task.clone());
                        added = Some(task.clone());
                        Checklist {
                            tasks,
                            ..list.clone()
                        }
                    } else {
                        list.clone()
                    }
                })
                .collect()
        });
        added
    }

    /// Flip the completion of a task, returns the task in its new state
    pub fn toggle_task(&mut self, checklist_id: &str, task_id: &str) -> Option<ChecklistTask> {
        tracing::debug!(checklist_id, task_id, "toggle task");
        let mut toggled = None;

        self.update_and_persist(|prev| {
            prev.iter()
                .map(|list| {
                    if list.id != checklist_id {
                        return list.clone();
                    }
                    Checklist {
                        tasks: list
                            .tasks
                            .iter()
                            .map(|task| {
                                if task.id == task_id {
                                    let task = ChecklistTask {
                                        completed: !task.completed,
                                        ..task.clone()
                                    };
                                    toggled = Some(task.clone());
                                    task
                                } else {
                                    task.clone()
                                }
                            })
                            .collect(),
                        ..list.clone()
                    }
                })
                .collect()
        });
        toggled
    }

    /// Returns the removed task, `None` when either id is unknown
    pub fn delete_task(&mut self, checklist_id: &str, task_id: &str) -> Option<ChecklistTask> {
        tracing::debug!(checklist_id, task_id, "delete task");
        let removed = self
            .get(checklist_id)
            .and_then(|list| list.get_task(task_id))
            .cloned();

        self.update_and_persist(|prev| {
            prev.iter()
                .map(|list| {
                    if list.id == checklist_id {
                        Checklist {
                            tasks: list
                                .tasks
                                .iter()
                                .filter(|task| task.id != task_id)
                                .cloned()
                                .collect(),
                            ..list.clone()
                        }
                    } else {
                        list.clone()
                    }
                })
                .collect()
        });
        removed
    }

    fn update_and_persist<F>(&mut self, updater: F)
    where
        F: FnOnce(&[Checklist]) -> Vec<Checklist>,
    {
        let next = Arc::new(updater(&self.checklists));
        checklist_storage::save(&self.writer, next.as_slice());
        self.checklists = next;
    }
}
