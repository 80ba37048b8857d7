//! Request validation for ticket create and patch operations
//!
//! The request DTOs deliberately declare every field as optional and let
//! serde drop unknown JSON keys. That gives the PATCH endpoint its
//! forward-compatible semantics (`id`, `createdDate`, `comments` or any
//! future key in a request body are silently ignored), while the validators
//! below enforce the per-field rules and report every offending field at
//! once instead of stopping at the first.

use crate::core::{Priority, Status, Ticket};
use crate::error::{Result, WorkManagerError};
use chrono::Utc;
use serde::Deserialize;

/// Raw POST body for creating a ticket
///
/// Field presence is checked in [`validate_create`], not by serde, so that a
/// missing field produces a named validation issue rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTicketRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub effort: Option<i64>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// Raw PATCH body for updating a ticket
///
/// `comment` is the reserved append key: it never overwrites a stored field,
/// its value becomes a new entry in the ticket's comment history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTicketRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub effort: Option<i64>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
}

/// A fully validated creation payload, ready for the service to stamp and store
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub effort: u32,
    pub priority: Priority,
    pub status: Status,
}

impl NewTicket {
    /// Materializes the ticket with a freshly assigned id.
    ///
    /// Stamps today's date and starts with an empty comment history; id
    /// assignment itself belongs to the service.
    #[must_use]
    pub fn into_ticket(self, id: u64) -> Ticket {
        Ticket {
            id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            effort: self.effort,
            priority: self.priority,
            status: self.status,
            created_date: Utc::now().date_naive(),
            comments: Vec::new(),
        }
    }
}

/// A fully validated patch: only fields present here may change a ticket
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub effort: Option<u32>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub comment: Option<String>,
}

impl TicketPatch {
    /// True when the patch would not change anything
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.assignee.is_none()
            && self.effort.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.comment.is_none()
    }
}

/// Validates a create request and normalizes it into a [`NewTicket`].
///
/// `title`, `description`, `assignee`, `effort` and `priority` are required;
/// `status` defaults to `backlog` when absent.
pub fn validate_create(input: CreateTicketRequest) -> Result<NewTicket> {
    let mut issues = Vec::new();

    let title = require_text("title", input.title, &mut issues);
    let description = require_text("description", input.description, &mut issues);
    let assignee = require_text("assignee", input.assignee, &mut issues);

    let effort = match input.effort {
        Some(raw) => check_effort(raw, &mut issues),
        None => {
            issues.push("effort is required and must be a non-negative integer".to_string());
            None
        },
    };

    let priority = match input.priority {
        Some(raw) => check_parse::<Priority>(&raw, &mut issues),
        None => {
            issues.push("priority is required and must be one of: low, med, high".to_string());
            None
        },
    };

    let status = match input.status {
        Some(raw) => check_parse::<Status>(&raw, &mut issues),
        None => Some(Status::default()),
    };

    if !issues.is_empty() {
        return Err(WorkManagerError::Validation { issues });
    }

    // All fields verified above; the unwrap_or defaults are unreachable but
    // keep this path panic-free.
    Ok(NewTicket {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        assignee: assignee.unwrap_or_default(),
        effort: effort.unwrap_or_default(),
        priority: priority.unwrap_or_default(),
        status: status.unwrap_or_default(),
    })
}

/// Validates a patch request field by field.
///
/// Every field is optional, but a field that is present must satisfy the
/// same constraint as on create. An empty comment value is treated as "no
/// comment", not an error.
pub fn validate_patch(input: UpdateTicketRequest) -> Result<TicketPatch> {
    let mut issues = Vec::new();

    let title = check_present_text("title", input.title, &mut issues);
    let description = check_present_text("description", input.description, &mut issues);
    let assignee = check_present_text("assignee", input.assignee, &mut issues);

    let effort = input.effort.and_then(|raw| check_effort(raw, &mut issues));
    let priority = input
        .priority
        .and_then(|raw| check_parse::<Priority>(&raw, &mut issues));
    let status = input
        .status
        .and_then(|raw| check_parse::<Status>(&raw, &mut issues));

    let comment = input.comment.filter(|c| !c.trim().is_empty());

    if issues.is_empty() {
        Ok(TicketPatch {
            title,
            description,
            assignee,
            effort,
            priority,
            status,
            comment,
        })
    } else {
        Err(WorkManagerError::Validation { issues })
    }
}

fn require_text(field: &str, value: Option<String>, issues: &mut Vec<String>) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            issues.push(format!("{field} is required and must be a non-empty string"));
            None
        },
    }
}

fn check_present_text(
    field: &str,
    value: Option<String>,
    issues: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(text) if text.trim().is_empty() => {
            issues.push(format!("{field} must be a non-empty string"));
            None
        },
        other => other,
    }
}

fn check_effort(raw: i64, issues: &mut Vec<String>) -> Option<u32> {
    match u32::try_from(raw) {
        Ok(effort) => Some(effort),
        Err(_) => {
            issues.push(format!("effort must be a non-negative integer (got {raw})"));
            None
        },
    }
}

fn check_parse<T>(raw: &str, issues: &mut Vec<String>) -> Option<T>
where
    T: std::str::FromStr<Err = WorkManagerError>,
{
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            issues.extend(err.into_issues());
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create_request() -> CreateTicketRequest {
        CreateTicketRequest {
            title: Some("Add search".to_string()),
            description: Some("Full-text search across tickets".to_string()),
            assignee: Some("maria".to_string()),
            effort: Some(8),
            priority: Some("high".to_string()),
            status: None,
        }
    }

    #[test]
    fn test_validate_create_defaults_status_to_backlog() {
        let ticket = validate_create(full_create_request()).unwrap();
        assert_eq!(ticket.status, Status::Backlog);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.effort, 8);
    }

    #[test]
    fn test_validate_create_accepts_explicit_status() {
        let mut request = full_create_request();
        request.status = Some("in dev".to_string());
        let ticket = validate_create(request).unwrap();
        assert_eq!(ticket.status, Status::InDev);
    }

    #[test]
    fn test_validate_create_reports_every_missing_field() {
        let err = validate_create(CreateTicketRequest::default()).unwrap_err();
        let message = err.to_string();
        for field in ["title", "description", "assignee", "effort", "priority"] {
            assert!(message.contains(field), "missing issue for {field}: {message}");
        }
    }

    #[test]
    fn test_validate_create_rejects_negative_effort() {
        let mut request = full_create_request();
        request.effort = Some(-1);
        let err = validate_create(request).unwrap_err();
        assert!(err.to_string().contains("effort"));
    }

    #[test]
    fn test_validate_create_rejects_blank_title() {
        let mut request = full_create_request();
        request.title = Some("   ".to_string());
        assert!(validate_create(request).is_err());
    }

    #[test]
    fn test_validate_patch_allows_empty_body() {
        let patch = validate_patch(UpdateTicketRequest::default()).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_validate_patch_rejects_unknown_status() {
        let request = UpdateTicketRequest {
            status: Some("shipped".to_string()),
            ..UpdateTicketRequest::default()
        };
        let err = validate_patch(request).unwrap_err();
        assert_eq!(err.kind(), "validation_error");
        assert!(err.to_string().contains("shipped"));
    }

    #[test]
    fn test_validate_patch_strips_blank_comment() {
        let request = UpdateTicketRequest {
            comment: Some("  ".to_string()),
            ..UpdateTicketRequest::default()
        };
        let patch = validate_patch(request).unwrap();
        assert!(patch.comment.is_none());
    }

    #[test]
    fn test_update_request_ignores_unknown_json_fields() {
        let request: UpdateTicketRequest = serde_json::from_value(serde_json::json!({
            "id": 42,
            "createdDate": "1999-01-01",
            "comments": ["overwrite attempt"],
            "status": "dev done"
        }))
        .unwrap();

        let patch = validate_patch(request).unwrap();
        assert_eq!(patch.status, Some(Status::DevDone));
        assert!(patch.title.is_none());
        assert!(patch.comment.is_none());
    }
}
