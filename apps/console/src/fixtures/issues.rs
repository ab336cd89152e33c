use fake::faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::models::{Department, GeoPoint, Issue, IssueStatus, Priority, Resolution};

use super::{pick, random_uuid, uppercase_code, GeneratorConfig};

/// Follow-up questions citizens attach to a report.
pub const QUESTION_POOL: [&str; 8] = [
    "When will this be fixed?",
    "Is this a safety hazard?",
    "Should I evacuate the area?",
    "Who is responsible for maintenance?",
    "How long has this been an issue?",
    "Is there a temporary solution?",
    "What caused this problem?",
    "Will there be any service interruption?",
];

pub const NOTE_POOL: [&str; 8] = [
    "This issue has been recurring for the past few weeks.",
    "Residents in the area have been complaining about this.",
    "The problem seems to worsen during peak hours.",
    "This is affecting multiple households in the vicinity.",
    "Emergency response may be required.",
    "Previous repairs were unsuccessful.",
    "Weather conditions may have contributed to this issue.",
    "Local business operations are being impacted.",
];

pub const RESOLUTION_NOTE_POOL: [&str; 5] = [
    "Replaced the faulty transformer. Power restored.",
    "Cleared the blockage and sanitized the area.",
    "Patched the pothole and resurfaced the immediate area.",
    "Fixed the leaking pipe. Water supply is back to normal.",
    "Emptied the overflowing bin and scheduled more frequent pickups.",
];

/// One synthetic issue report. Resolution details are attached exactly when
/// the sampled status is [`IssueStatus::Resolved`].
pub fn random_issue<R: Rng + ?Sized>(rng: &mut R, cfg: &GeneratorConfig) -> Issue {
    let now = OffsetDateTime::now_utc();

    let location = GeoPoint {
        lat: rng.random_range(cfg.bounds.lat_min..=cfg.bounds.lat_max),
        lng: rng.random_range(cfg.bounds.lng_min..=cfg.bounds.lng_max),
    };
    let status = *pick(rng, &IssueStatus::ALL);
    let submitted_at =
        now - Duration::seconds(rng.random_range(0..cfg.submission_window.whole_seconds()));

    let resolution = if status == IssueStatus::Resolved {
        let span = (now - submitted_at).whole_seconds();
        Some(Resolution {
            resolved_at: submitted_at + Duration::seconds(rng.random_range(0..=span)),
            image_url: cfg.image_url(random_uuid(rng)),
            notes: (*pick(rng, &RESOLUTION_NOTE_POOL)).to_string(),
            resolved_by: Name().fake_with_rng::<String, _>(rng),
        })
    } else {
        None
    };

    let question_count = rng.random_range(0..=cfg.max_questions.min(QUESTION_POOL.len()));
    let questions = QUESTION_POOL
        .choose_multiple(rng, question_count)
        .map(|q| (*q).to_string())
        .collect();

    let location_address = format!(
        "{} {}, {}, {}",
        BuildingNumber().fake_with_rng::<String, _>(rng),
        StreetName().fake_with_rng::<String, _>(rng),
        CityName().fake_with_rng::<String, _>(rng),
        ZipCode().fake_with_rng::<String, _>(rng),
    );

    Issue {
        id: uppercase_code(rng, 5),
        title: Sentence(4..5).fake_with_rng::<String, _>(rng),
        description: Paragraph(3..4).fake_with_rng::<String, _>(rng),
        department: *pick(rng, &Department::ALL),
        priority: *pick(rng, &Priority::ALL),
        status,
        location,
        location_address,
        distance_km: (rng.random_range(cfg.distance_min_km..=cfg.distance_max_km) * 10.0).round()
            / 10.0,
        image_url: cfg.image_url(random_uuid(rng)),
        submitted_at,
        resolution,
        user_id: format!("USR{}", uppercase_code(rng, 6)),
        user_contact: NumberWithFormat("9#########").fake_with_rng::<String, _>(rng),
        notes: (*pick(rng, &NOTE_POOL)).to_string(),
        questions,
    }
}

/// `count` independent issues, no cross-issue correlation.
pub fn generate_issues<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &GeneratorConfig,
    count: usize,
) -> Vec<Issue> {
    (0..count).map(|_| random_issue(rng, cfg)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn sample(seed: u64, count: usize) -> Vec<Issue> {
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        generate_issues(&mut rng, &cfg, count)
    }

    #[test]
    fn generates_requested_count() {
        assert_eq!(sample(1, 0).len(), 0);
        assert_eq!(sample(1, 12).len(), 12);
        assert_eq!(sample(2, 200).len(), 200);
    }

    #[test]
    fn resolution_is_present_exactly_for_resolved_issues() {
        for issue in sample(7, 200) {
            assert_eq!(
                issue.status == IssueStatus::Resolved,
                issue.resolution.is_some(),
                "issue {} breaks the resolution invariant",
                issue.id
            );
        }
    }

    #[test]
    fn distance_stays_in_range_with_one_decimal() {
        for issue in sample(11, 200) {
            assert!(
                (0.5..=10.0).contains(&issue.distance_km),
                "distance {} out of range",
                issue.distance_km
            );
            let scaled = issue.distance_km * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "distance {} has more than one decimal",
                issue.distance_km
            );
        }
    }

    #[test]
    fn location_stays_inside_default_bounds() {
        for issue in sample(13, 200) {
            assert!((16.48..=16.52).contains(&issue.location.lat));
            assert!((80.63..=80.67).contains(&issue.location.lng));
        }
    }

    #[test]
    fn questions_are_unique_and_from_the_pool() {
        for issue in sample(17, 200) {
            assert!(issue.questions.len() <= 3);
            let distinct: HashSet<&str> = issue.questions.iter().map(String::as_str).collect();
            assert_eq!(distinct.len(), issue.questions.len(), "duplicate question");
            for question in &issue.questions {
                assert!(QUESTION_POOL.contains(&question.as_str()));
            }
        }
    }

    #[test]
    fn timestamps_fall_inside_the_windows() {
        let cfg = GeneratorConfig::default();
        let before = OffsetDateTime::now_utc();
        let issues = sample(19, 100);
        let after = OffsetDateTime::now_utc();

        let tolerance = Duration::seconds(5);
        for issue in issues {
            assert!(issue.submitted_at <= after + tolerance);
            assert!(issue.submitted_at >= before - cfg.submission_window - tolerance);
            if let Some(resolution) = &issue.resolution {
                assert!(resolution.resolved_at >= issue.submitted_at);
                assert!(resolution.resolved_at <= after + tolerance);
            }
        }
    }

    #[test]
    fn identifier_and_contact_formats() {
        for issue in sample(23, 100) {
            assert_eq!(issue.id.len(), 5);
            assert!(issue
                .id
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

            assert!(issue.user_id.starts_with("USR"));
            assert_eq!(issue.user_id.len(), 9);

            assert!(issue.user_contact.starts_with('9'));
            assert_eq!(issue.user_contact.len(), 10);
            assert!(issue.user_contact.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn pooled_text_fields_come_from_their_pools() {
        for issue in sample(29, 100) {
            assert!(NOTE_POOL.contains(&issue.notes.as_str()));
            if let Some(resolution) = &issue.resolution {
                assert!(RESOLUTION_NOTE_POOL.contains(&resolution.notes.as_str()));
                assert!(!resolution.resolved_by.trim().is_empty());
            }
        }
    }

    #[test]
    fn image_urls_use_the_configured_base() {
        let cfg = GeneratorConfig {
            image_base_url: "https://img.example".to_string(),
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(31);
        let issue = random_issue(&mut rng, &cfg);
        assert!(issue.image_url.starts_with("https://img.example/seed/"));
        assert!(issue.image_url.ends_with("/400/400"));
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = sample(42, 8);
        let b = sample(42, 8);
        let stable = |issues: &[Issue]| -> Vec<(String, String, Department, IssueStatus)> {
            issues
                .iter()
                .map(|i| (i.id.clone(), i.title.clone(), i.department, i.status))
                .collect()
        };
        assert_eq!(stable(&a), stable(&b));
    }
}
