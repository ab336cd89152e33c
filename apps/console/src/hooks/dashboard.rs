use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;

use crate::fixtures::{generate_issues, generate_notifications};
use crate::state::{use_app_actions, use_app_state};
use crate::APP_CONFIG;

/// Populates the dashboard with generated demo records on the first
/// authenticated render. A short delay on wasm makes the loading state
/// visible, mimicking a backend round-trip.
pub fn use_dashboard_loader() {
    let mut actions = use_app_actions();
    let state = use_app_state();

    use_future(move || async move {
        if !state.read().dashboard.issues.is_empty() {
            return;
        }

        actions.set_dashboard_loading(true);
        actions.set_dashboard_error(None);

        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(350).await;

        let Some(config) = APP_CONFIG.get() else {
            actions.set_dashboard_error(Some("app config is not initialized".into()));
            return;
        };

        let generator = config.generator_config();
        if let Err(err) = generator.validate() {
            tracing::error!("invalid generator config: {err}");
            actions.set_dashboard_error(Some(format!("demo data unavailable: {err}")));
            return;
        }

        let seed = config.demo_seed.unwrap_or_else(seed_from_clock);
        let mut rng = StdRng::seed_from_u64(seed);
        tracing::info!(seed, "generating demo dashboard data");

        let issues = generate_issues(&mut rng, &generator, config.demo_issue_count);
        let notifications = generate_notifications(
            &mut rng,
            &generator,
            config.demo_notification_count,
            &issues,
        );
        actions.set_dashboard_data(issues, notifications);
    });
}

fn seed_from_clock() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as u64
}
