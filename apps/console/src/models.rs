use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Municipal service category responsible for an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Electrical,
    Sewer,
    RoadTransport,
    Water,
    Sanitation,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Electrical,
        Department::Sewer,
        Department::RoadTransport,
        Department::Water,
        Department::Sanitation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Electrical => "Electrical",
            Department::Sewer => "Sewer",
            Department::RoadTransport => "Road & Transport",
            Department::Water => "Water",
            Department::Sanitation => "Sanitation",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity ranking. Variant order is the severity order, so `Ord` can be
/// used for sorting and comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
    Error,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Pending,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Error,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Error => "Error",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Closure details of a resolved issue. Held as `Option<Resolution>` on
/// [`Issue`], so the fields are jointly present or jointly absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(with = "time::serde::rfc3339")]
    pub resolved_at: OffsetDateTime,
    pub image_url: String,
    pub notes: String,
    pub resolved_by: String,
}

/// A citizen-reported infrastructure problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: Department,
    pub priority: Priority,
    pub status: IssueStatus,
    pub location: GeoPoint,
    pub location_address: String,
    pub distance_km: f64,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    pub user_id: String,
    pub user_contact: String,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<String>,
}

impl Issue {
    pub fn is_resolved(&self) -> bool {
        self.status == IssueStatus::Resolved
    }

    /// First comma-segment of the address, e.g. "12 Canal Road" out of
    /// "12 Canal Road, Vijayawada, 520001".
    pub fn address_head(&self) -> &str {
        self.location_address.split(',').next().unwrap_or("")
    }
}

/// Decorative icon tag carried by a notification. Rendering lives in
/// `ui::icons`; the data model only names the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationIcon {
    Zap,
    Trash,
    Truck,
    AlertCircle,
    CheckCircle,
}

/// An alert shown in the notification panel, optionally tied to an issue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    pub icon: NotificationIcon,
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
}

/// The signed-in operator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub operator_id: String,
    pub display_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub signed_in_at: OffsetDateTime,
}
