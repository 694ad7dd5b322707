//! Task records as supplied by the host application.
//!
//! Records arrive from the backend (or the local JSON store) and are read-only
//! to the prioritizer. Deserialization is deliberately forgiving: a malformed
//! field degrades to its default instead of rejecting the record, so one bad
//! entry can never hide the rest of a schedule.

use std::fmt;

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Three-step scale shared by `priority` and `importance`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Parse the wire spelling. Only the exact lowercase names are recognized.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier. Numeric ids are kept as their decimal text.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_text")]
    pub description: Option<String>,
    /// Scheduled day.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    /// Effective due date when present; overrides `date`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    /// Urgency amplifier. `None` covers both absent and unrecognized values.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_level")]
    pub priority: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_level")]
    pub importance: Option<Level>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub completed: bool,
}

impl Task {
    /// Create an open task with no dates and default levels.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            description: None,
            date: None,
            end_date: None,
            priority: None,
            importance: None,
            completed: false,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_priority(mut self, priority: Level) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_importance(mut self, importance: Level) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Host-side filter: drop finished tasks before ranking.
pub fn active_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| !t.completed).cloned().collect()
}

/// Parse a calendar date, ignoring any time-of-day suffix.
///
/// Accepts `YYYY-MM-DD` optionally followed by `T...` or ` ...`
/// (e.g. an RFC 3339 timestamp); the time part never affects the day.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(s.trim(), "%Y-%m-%d").ok()?;
    if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
        Some(date)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Loose::deserialize(d)? {
        Loose::Text(s) => s,
        Loose::Int(n) => n.to_string(),
        Loose::Float(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(lenient_opt_text(d)?.unwrap_or_default())
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Loose::deserialize(d)? {
        Loose::Text(s) => Some(s),
        _ => None,
    })
}

fn lenient_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
    Ok(match Loose::deserialize(d)? {
        Loose::Text(s) if s.trim().is_empty() => None,
        Loose::Text(s) => {
            let parsed = parse_day(&s);
            if parsed.is_none() {
                tracing::warn!(value = %s, "ignoring unparseable task date");
            }
            parsed
        }
        _ => None,
    })
}

fn lenient_level<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Level>, D::Error> {
    Ok(match Loose::deserialize(d)? {
        Loose::Text(s) => Level::from_label(&s),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(matches!(Loose::deserialize(d)?, Loose::Flag(true)))
}
