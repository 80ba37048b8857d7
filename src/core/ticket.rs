//! Ticket model for the kanban board
//!
//! A `Ticket` is one card on the board. Its wire representation (both in the
//! REST API and in the board file on disk) uses camelCase field names and the
//! human-readable column names the board UI shows, e.g. `"marked for dev"`.

use crate::core::validation::TicketPatch;
use crate::error::WorkManagerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Med,
    High,
}

impl Priority {
    /// All accepted wire values, in ascending order
    pub const ALL: [Self; 3] = [Self::Low, Self::Med, Self::High];

    /// Wire name of this priority
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = WorkManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "med" => Ok(Self::Med),
            "high" => Ok(Self::High),
            _ => Err(WorkManagerError::validation(format!(
                "priority must be one of: low, med, high (got `{s}`)"
            ))),
        }
    }
}

/// Board column a ticket currently occupies
///
/// The wire names contain spaces because they double as the column titles in
/// the board UI. New tickets land in `Backlog` unless the create request says
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "backlog")]
    Backlog,
    #[serde(rename = "marked for dev")]
    MarkedForDev,
    #[serde(rename = "in dev")]
    InDev,
    #[serde(rename = "dev done")]
    DevDone,
    #[serde(rename = "uat done")]
    UatDone,
}

impl Status {
    /// All board columns, in board order
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::MarkedForDev,
        Self::InDev,
        Self::DevDone,
        Self::UatDone,
    ];

    /// Wire name of this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::MarkedForDev => "marked for dev",
            Self::InDev => "in dev",
            Self::DevDone => "dev done",
            Self::UatDone => "uat done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = WorkManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "marked for dev" => Ok(Self::MarkedForDev),
            "in dev" => Ok(Self::InDev),
            "dev done" => Ok(Self::DevDone),
            "uat done" => Ok(Self::UatDone),
            _ => Err(WorkManagerError::validation(format!(
                "status must be one of: backlog, marked for dev, in dev, dev done, uat done (got `{s}`)"
            ))),
        }
    }
}

/// A unit of work tracked on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Positive integer id, unique per board, assigned once by the service
    pub id: u64,
    /// Short summary shown on the card
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Person the ticket is assigned to
    pub assignee: String,
    /// Relative effort estimate, non-negative
    pub effort: u32,
    /// Ticket priority
    pub priority: Priority,
    /// Board column
    pub status: Status,
    /// Creation date (YYYY-MM-DD), stamped once and never changed
    pub created_date: NaiveDate,
    /// Append-only comment history, chronological
    #[serde(default)]
    pub comments: Vec<String>,
}

impl Ticket {
    /// Merges a validated patch into this ticket.
    ///
    /// Every field present in the patch overwrites the stored value; `id` and
    /// `created_date` are not part of `TicketPatch` and therefore cannot
    /// change. A present comment is appended to the history as exactly one
    /// new entry.
    pub fn apply(&mut self, patch: TicketPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(effort) = patch.effort {
            self.effort = effort;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(comment) = patch.comment {
            self.comments.push(comment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    #[test]
    fn test_status_wire_names_round_trip() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let parsed: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_from_str_rejects_unknown_column() {
        let err = Status::from_str("bogus").unwrap_err();
        assert_eq!(err.kind(), "validation_error");
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
        assert!(Priority::from_str("urgent").is_err());
    }

    #[test]
    fn test_ticket_serializes_with_camel_case_date() {
        let ticket = TicketBuilder::new()
            .id(7)
            .title("Fix login bug")
            .description("Session cookie expires too early")
            .assignee("dana")
            .effort(3)
            .priority(Priority::High)
            .status(Status::InDev)
            .created_date(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
            .build();

        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["createdDate"], "2026-08-30");
        assert_eq!(value["status"], "in dev");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["comments"], serde_json::json!([]));
    }

    #[test]
    fn test_apply_overwrites_present_fields_only() {
        let mut ticket = TicketBuilder::new()
            .id(1)
            .title("Old title")
            .description("Old description")
            .assignee("alex")
            .effort(5)
            .build();
        let created = ticket.created_date;

        ticket.apply(TicketPatch {
            title: Some("New title".to_string()),
            status: Some(Status::DevDone),
            ..TicketPatch::default()
        });

        assert_eq!(ticket.title, "New title");
        assert_eq!(ticket.status, Status::DevDone);
        assert_eq!(ticket.description, "Old description");
        assert_eq!(ticket.assignee, "alex");
        assert_eq!(ticket.effort, 5);
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.created_date, created);
    }

    #[test]
    fn test_apply_appends_exactly_one_comment() {
        let mut ticket = TicketBuilder::new().id(1).title("t").build();
        ticket.comments.push("first".to_string());

        ticket.apply(TicketPatch {
            comment: Some("second".to_string()),
            ..TicketPatch::default()
        });

        assert_eq!(ticket.comments, vec!["first", "second"]);
    }
}
