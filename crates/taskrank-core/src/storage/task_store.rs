//! Task list persistence.
//!
//! The host app talks to its backend through a fetch-task-list / save-task
//! contract. [`TaskSource`] is that contract; [`JsonTaskStore`] implements it
//! over a local JSON array file.
//!
//! The file may hold more than [`Task`] models: backend fields, values the
//! forgiving deserializer dropped, even non-object entries. Writes edit the
//! raw records in place so all of that survives.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, StoreError};
use crate::task::Task;

/// Supplier and sink of task records.
pub trait TaskSource {
    /// Every stored task, completed ones included, in stored order.
    fn fetch_tasks(&self) -> Result<Vec<Task>>;

    /// Insert the task, or replace the stored task with the same id.
    fn save_task(&self, task: &Task) -> Result<()>;
}

/// JSON array of task records on disk.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
}

fn parse_record(record: &Value) -> Option<Task> {
    if !record.is_object() {
        return None;
    }
    serde_json::from_value(record.clone()).ok()
}

fn position_of(records: &[Value], id: &str) -> Option<usize> {
    records
        .iter()
        .position(|r| parse_record(r).is_some_and(|t| t.id == id))
}

fn task_fields(task: &Task) -> Result<Map<String, Value>> {
    match serde_json::to_value(task)? {
        Value::Object(fields) => Ok(fields),
        _ => Ok(Map::new()),
    }
}

/// Apply the difference between `old` and `new` to a raw record.
///
/// Fields whose modeled value did not change keep their raw text, so an
/// unrecognized `"priority": "URGENT"` or a numeric id is not rewritten.
fn merge_into(raw: &mut Map<String, Value>, old: &Task, new: &Task) -> Result<()> {
    let before = task_fields(old)?;
    let after = task_fields(new)?;
    for key in before.keys() {
        if !after.contains_key(key) {
            raw.remove(key);
        }
    }
    for (key, value) in after {
        if before.get(&key) != Some(&value) {
            raw.insert(key, value);
        }
    }
    Ok(())
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_failed(&self, message: impl ToString) -> StoreError {
        StoreError::ReadFailed {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }

    /// Every entry of the array, parsed or not.
    fn read_records(&self) -> Result<Vec<Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.read_failed(e).into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content).map_err(|e| self.read_failed(e))? {
            Value::Array(records) => Ok(records),
            _ => Err(StoreError::NotAnArray {
                path: self.path.clone(),
            }
            .into()),
        }
    }

    fn write_records(&self, records: &[Value]) -> Result<()> {
        let write_failed = |message: String| StoreError::WriteFailed {
            path: self.path.clone(),
            message,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, content).map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }

    /// Mark a task completed.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no task has this id.
    pub fn complete_task(&self, id: &str) -> Result<Task> {
        let mut records = self.read_records()?;
        let index = position_of(&records, id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let record = &mut records[index];
        if let Value::Object(fields) = record {
            fields.insert("completed".to_string(), Value::Bool(true));
        }
        let done = parse_record(record).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.write_records(&records)?;
        Ok(done)
    }

    /// Delete a task by id.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no task has this id.
    pub fn remove_task(&self, id: &str) -> Result<()> {
        let mut records = self.read_records()?;
        let index = position_of(&records, id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        records.remove(index);
        self.write_records(&records)
    }
}

impl TaskSource for JsonTaskStore {
    fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let records = self.read_records()?;
        let mut tasks = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match parse_record(record) {
                Some(task) => tasks.push(task),
                None => {
                    tracing::warn!(index, path = %self.path.display(), "skipping non-object task record");
                }
            }
        }
        Ok(tasks)
    }

    fn save_task(&self, task: &Task) -> Result<()> {
        let mut records = self.read_records()?;
        match position_of(&records, &task.id) {
            Some(index) => {
                let record = &mut records[index];
                let old = parse_record(record).unwrap_or_else(|| Task::new(task.id.clone(), ""));
                if let Value::Object(fields) = record {
                    merge_into(fields, &old, task)?;
                }
            }
            None => records.push(serde_json::to_value(task)?),
        }
        self.write_records(&records)
    }
}
