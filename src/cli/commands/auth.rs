use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sync::Session;
use crate::ui::messages::{info, success, warning};

/// Store or clear the remote session. The credentials are issued by the
/// remote service; this command only keeps them on the device.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Auth {
        user,
        token,
        show,
        logout,
    } = cmd
    {
        if *logout {
            // purge first-party data along with the session, so the next
            // account cannot read the previous one's entries
            with_service(cfg, |service| service.logout())?;
            success("Logged out. Local account data removed.");
            return Ok(());
        }

        if *show {
            match Session::load() {
                Some(session) => info(format!("Active session for user {}", session.user_id)),
                None => info("No active session."),
            }
            return Ok(());
        }

        let (Some(user_id), Some(access_token)) = (user, token) else {
            return Err(AppError::Config(
                "auth needs both --user and --token (or --show / --logout)".to_string(),
            ));
        };

        let session = Session {
            user_id: user_id.clone(),
            access_token: access_token.clone(),
        };
        session.save()?;
        success(format!("Session stored for user {}", user_id));

        // rehydrate this device from the account's remote data; failure
        // keeps whatever is already local
        with_service(cfg, |service| {
            match service.pull_all() {
                Ok(n) => success(format!("Fetched {} collections from remote.", n)),
                Err(AppError::NoRemote) => {
                    info("No remote endpoint configured; running local-only.")
                }
                Err(e) => warning(format!("Could not fetch remote data: {}", e)),
            }
            Ok(())
        })?;
    }

    Ok(())
}
