use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}

/// The checklist widget. Completion state lives only for the session.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: titles.into_iter().map(Task::new).collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Flip the done state of the task at `index`. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let task = self.tasks.get_mut(index)?;
        task.done = !task.done;
        Some(task.done)
    }

    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}
