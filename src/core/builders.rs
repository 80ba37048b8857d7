use super::{Priority, Status, Ticket};
use chrono::{NaiveDate, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<u64>,
    title: Option<String>,
    description: Option<String>,
    assignee: Option<String>,
    effort: Option<u32>,
    priority: Option<Priority>,
    status: Option<Status>,
    created_date: Option<NaiveDate>,
    comments: Vec<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the effort estimate
    #[must_use]
    pub const fn effort(mut self, effort: u32) -> Self {
        self.effort = Some(effort);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the creation date
    #[must_use]
    pub const fn created_date(mut self, created_date: NaiveDate) -> Self {
        self.created_date = Some(created_date);
        self
    }

    /// Set the comment history
    #[must_use]
    pub fn comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Add a single comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or(1),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            assignee: self.assignee.unwrap_or_default(),
            effort: self.effort.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_date: self
                .created_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            comments: self.comments,
        }
    }
}
