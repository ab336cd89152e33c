use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::models::{Issue, Notification, NotificationIcon};

use super::{pick, random_uuid, GeneratorConfig};

/// How a template folds issue context into its base description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptionRule {
    /// Base text is used as-is.
    Verbatim,
    /// "Issue #<id> <base>"
    IssueIdPrefix,
    /// "<base> <first comma-segment of the issue address>"
    AddressSuffix,
    /// "<base> (ID: #<id>)"
    IssueRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTemplate {
    pub icon: NotificationIcon,
    pub title: &'static str,
    pub base: &'static str,
    pub rule: DescriptionRule,
}

pub const ISSUE_TEMPLATES: [NotificationTemplate; 4] = [
    NotificationTemplate {
        icon: NotificationIcon::Zap,
        title: "New Electrical Issue",
        base: "A new high-priority electrical issue has been reported.",
        rule: DescriptionRule::IssueRef,
    },
    NotificationTemplate {
        icon: NotificationIcon::Trash,
        title: "Sanitation Task Completed",
        base: "was marked as resolved.",
        rule: DescriptionRule::IssueIdPrefix,
    },
    NotificationTemplate {
        icon: NotificationIcon::Truck,
        title: "Dispatch Alert",
        base: "A road & transport issue has been dispatched to your team.",
        rule: DescriptionRule::AddressSuffix,
    },
    NotificationTemplate {
        icon: NotificationIcon::AlertCircle,
        title: "Critical Alert",
        base: "A critical sewer issue requires immediate attention near",
        rule: DescriptionRule::AddressSuffix,
    },
];

pub const SYSTEM_TEMPLATE: NotificationTemplate = NotificationTemplate {
    icon: NotificationIcon::CheckCircle,
    title: "System Update",
    base: "The admin panel has been updated to v1.1.0.",
    rule: DescriptionRule::Verbatim,
};

/// Applies the template's rule to the referenced issue, if any.
pub fn render_description(template: &NotificationTemplate, issue: Option<&Issue>) -> String {
    match (template.rule, issue) {
        (DescriptionRule::Verbatim, _) | (_, None) => template.base.to_string(),
        (DescriptionRule::IssueIdPrefix, Some(issue)) => {
            format!("Issue #{} {}", issue.id, template.base)
        }
        (DescriptionRule::AddressSuffix, Some(issue)) => {
            format!("{} {}", template.base, issue.address_head())
        }
        (DescriptionRule::IssueRef, Some(issue)) => {
            format!("{} (ID: #{})", template.base, issue.id)
        }
    }
}

/// `count` notifications in generation order. With probability
/// `cfg.issue_related_probability` a notification references one of the
/// supplied issues; with an empty issue list everything degrades to the
/// system template.
pub fn generate_notifications<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &GeneratorConfig,
    count: usize,
    issues: &[Issue],
) -> Vec<Notification> {
    let now = OffsetDateTime::now_utc();

    (0..count)
        .map(|_| {
            let issue_related =
                !issues.is_empty() && rng.random_bool(cfg.issue_related_probability);
            let (template, issue) = if issue_related {
                (*pick(rng, &ISSUE_TEMPLATES), Some(pick(rng, issues)))
            } else {
                (SYSTEM_TEMPLATE, None)
            };

            Notification {
                id: random_uuid(rng),
                issue_id: issue.map(|issue| issue.id.clone()),
                icon: template.icon,
                title: template.title.to_string(),
                description: render_description(&template, issue),
                timestamp: now
                    - Duration::seconds(
                        rng.random_range(0..cfg.notification_window.whole_seconds()),
                    ),
                read: rng.random_bool(cfg.read_probability),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::fixtures::generate_issues;
    use crate::models::{Department, GeoPoint, IssueStatus, Priority};

    use super::*;

    fn fixed_issue() -> Issue {
        Issue {
            id: "AB12C".into(),
            title: "Transformer sparking near market".into(),
            description: "Sparks were seen at the pole-mounted transformer.".into(),
            department: Department::Electrical,
            priority: Priority::High,
            status: IssueStatus::Pending,
            location: GeoPoint {
                lat: 16.5,
                lng: 80.65,
            },
            location_address: "12 Canal Road, Vijayawada, 520001".into(),
            distance_km: 2.4,
            image_url: "https://picsum.photos/seed/fixed/400/400".into(),
            submitted_at: OffsetDateTime::UNIX_EPOCH,
            resolution: None,
            user_id: "USRQ1W2E3".into(),
            user_contact: "9876543210".into(),
            notes: "Emergency response may be required.".into(),
            questions: Vec::new(),
        }
    }

    fn template_titled(title: &str) -> NotificationTemplate {
        *ISSUE_TEMPLATES
            .iter()
            .find(|t| t.title == title)
            .expect("unknown template title")
    }

    #[test]
    fn completed_template_prefixes_the_issue_id() {
        let issue = fixed_issue();
        let template = template_titled("Sanitation Task Completed");
        assert_eq!(
            render_description(&template, Some(&issue)),
            "Issue #AB12C was marked as resolved."
        );
    }

    #[test]
    fn alert_templates_append_the_address_head() {
        let issue = fixed_issue();
        assert_eq!(
            render_description(&template_titled("Dispatch Alert"), Some(&issue)),
            "A road & transport issue has been dispatched to your team. 12 Canal Road"
        );
        assert_eq!(
            render_description(&template_titled("Critical Alert"), Some(&issue)),
            "A critical sewer issue requires immediate attention near 12 Canal Road"
        );
    }

    #[test]
    fn remaining_issue_template_appends_an_id_reference() {
        let issue = fixed_issue();
        assert_eq!(
            render_description(&template_titled("New Electrical Issue"), Some(&issue)),
            "A new high-priority electrical issue has been reported. (ID: #AB12C)"
        );
    }

    #[test]
    fn system_template_stays_verbatim() {
        assert_eq!(
            render_description(&SYSTEM_TEMPLATE, None),
            "The admin panel has been updated to v1.1.0."
        );
    }

    #[test]
    fn empty_issue_list_degrades_to_system_notifications() {
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let notifications = generate_notifications(&mut rng, &cfg, 40, &[]);

        assert_eq!(notifications.len(), 40);
        for notification in notifications {
            assert_eq!(notification.issue_id, None);
            assert_eq!(notification.icon, NotificationIcon::CheckCircle);
            assert_eq!(notification.title, "System Update");
            assert_eq!(
                notification.description,
                "The admin panel has been updated to v1.1.0."
            );
        }
    }

    #[test]
    fn issue_ids_reference_the_supplied_issues() {
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let issues = generate_issues(&mut rng, &cfg, 6);
        let notifications = generate_notifications(&mut rng, &cfg, 100, &issues);

        assert_eq!(notifications.len(), 100);
        let mut related = 0usize;
        for notification in &notifications {
            if let Some(issue_id) = &notification.issue_id {
                related += 1;
                assert!(issues.iter().any(|issue| &issue.id == issue_id));
            } else {
                assert_eq!(notification.title, "System Update");
            }
        }
        assert!(related > 0, "expected at least one issue-related entry");
    }

    #[test]
    fn sampling_biases_hold_roughly() {
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let issues = generate_issues(&mut rng, &cfg, 4);
        let notifications = generate_notifications(&mut rng, &cfg, 500, &issues);

        let related = notifications
            .iter()
            .filter(|n| n.issue_id.is_some())
            .count() as f64
            / 500.0;
        let read = notifications.iter().filter(|n| n.read).count() as f64 / 500.0;

        assert!((0.6..=0.95).contains(&related), "related rate {related}");
        assert!((0.15..=0.45).contains(&read), "read rate {read}");
    }

    #[test]
    fn timestamps_stay_within_the_lookback_window() {
        let cfg = GeneratorConfig::default();
        let before = OffsetDateTime::now_utc();
        let mut rng = StdRng::seed_from_u64(27);
        let notifications = generate_notifications(&mut rng, &cfg, 100, &[]);
        let after = OffsetDateTime::now_utc();

        let tolerance = Duration::seconds(5);
        for notification in notifications {
            assert!(notification.timestamp <= after + tolerance);
            assert!(notification.timestamp >= before - cfg.notification_window - tolerance);
        }
    }
}
