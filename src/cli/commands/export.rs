use crate::cli::commands::report::resolve_window;
use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_report;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        range,
        cycle,
        force,
    } = cmd
    {
        with_service(cfg, |service| {
            let settings = service.settings();
            let period = resolve_window(month, false, range, *cycle, &settings)?;
            let report = service.report(&period);

            export_report(&report, &settings, format.clone(), file, *force)?;

            service
                .store()
                .log_op("export", file, &format!("{} report", format.as_str()));
            Ok(())
        })?;
    }

    Ok(())
}
