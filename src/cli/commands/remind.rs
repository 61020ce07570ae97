use crate::cli::commands::with_service;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::today;

/// Print the daily reminder when it is due: reminders enabled, nothing
/// logged for today, and no reminder already shown today. Designed to be
/// called from a shell profile or a scheduler.
pub fn handle(cfg: &Config) -> AppResult<()> {
    with_service(cfg, |service| {
        let settings = service.settings();
        if !settings.notification_enabled {
            return Ok(());
        }

        let t = today();

        if service.store().last_notification_date() == Some(t) {
            return Ok(());
        }
        if service.work_log().has_day(t) {
            return Ok(());
        }

        info(format!(
            "⏰ Reminder ({}) — no work entry for {} yet. Log your day with `wagelog add {}`.",
            settings.notification_time, t, t
        ));
        service.store().set_last_notification_date(t)?;

        Ok(())
    })
}
