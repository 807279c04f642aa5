use serde_derive::{Deserialize, Serialize};

pub type ChecklistId = String;
pub type TaskId = String;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTask {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// unix timestamp in milliseconds
    pub created_at: u64,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    /// unix timestamp in milliseconds
    pub created_at: u64,
    /// insertion order, newest last
    pub tasks: Vec<ChecklistTask>,
}

impl Checklist {
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Ratio of completed tasks in `[0, 1]`, an empty checklist has a progress of 0
    pub fn progress(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.completed_count() as f64 / total as f64,
        }
    }

    /// e.g. "67%"
    pub fn percentage_label(&self) -> String {
        format!("{}%", (self.progress() * 100.0).round() as u32)
    }

    pub fn get_task(&self, task_id: &str) -> Option<&ChecklistTask> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}
