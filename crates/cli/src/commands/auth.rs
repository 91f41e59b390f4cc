//! Account and session commands.

use super::{CliError, Context};

/// Create an account and sign in.
///
/// # Errors
///
/// Returns an error when the backend rejects the registration; the exact
/// reason (duplicate email, weak input) is absorbed into the session's
/// fail-closed transition, so the message stays generic.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), CliError> {
    let ctx = Context::from_env()?;

    if ctx.session.register(name, email, password).await {
        tracing::info!("Account created, signed in as {email}");
        Ok(())
    } else {
        Err("registration failed - the email may already be registered".into())
    }
}

/// Sign in with an existing account.
///
/// # Errors
///
/// Returns an error when the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let ctx = Context::from_env()?;

    if ctx.session.login(email, password).await {
        tracing::info!("Signed in as {email}");
        Ok(())
    } else {
        Err("invalid email or password".into())
    }
}

/// Sign out. Purely local: clears the stored credential, no network call.
///
/// # Errors
///
/// Returns a configuration error only; signing out itself cannot fail.
pub fn logout() -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.session.logout();
    tracing::info!("Signed out");
    Ok(())
}

/// Show the identity behind the stored credential.
///
/// # Errors
///
/// Returns an error when no session can be restored.
pub async fn whoami() -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.require_session().await?;

    if let Some(user) = ctx.session.snapshot().user {
        tracing::info!("{} <{}> (id {})", user.name, user.email, user.id);
    }
    Ok(())
}
