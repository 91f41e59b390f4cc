//! Dashboard commands: list, delete, preview.

use sitesmith_client::Dashboard;
use sitesmith_core::WebsiteId;

use super::{CliError, Context};

/// List the signed-in user's generated websites.
///
/// # Errors
///
/// Returns an error when the session cannot be restored or the fetch
/// fails.
pub async fn list() -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.require_session().await?;

    let mut dashboard = Dashboard::new(ctx.websites);
    dashboard.refresh().await?;

    if dashboard.sites().is_empty() {
        tracing::info!("No websites yet - run `sitesmith draft new` to start one");
        return Ok(());
    }

    for site in dashboard.sites() {
        tracing::info!(
            "{}  {}  [{}]  created {}",
            site.id,
            site.business_name,
            site.industry,
            site.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

/// Delete a website. The id disappears from subsequent `list` output only
/// because the backend confirmed the deletion.
///
/// # Errors
///
/// Returns an error for a stale id or a failed round-trip; nothing is
/// removed in that case.
pub async fn delete(id: &str) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.require_session().await?;

    let id = WebsiteId::new(id);
    ctx.websites.delete(&id).await?;
    tracing::info!("Deleted website {id}");
    Ok(())
}

/// Print the preview URL for opening in a browser.
///
/// # Errors
///
/// Returns an error when the session cannot be restored.
pub async fn preview(id: &str) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.require_session().await?;

    let id = WebsiteId::new(id);
    tracing::info!("{}", ctx.websites.preview_url(&id));
    Ok(())
}
