//! Draft composition commands.
//!
//! Between invocations the draft snapshot lives in a JSON file; each
//! command rehydrates a [`DraftEditor`] from it, applies one operation,
//! and writes the new snapshot back. The file is the request body that
//! will eventually be submitted.

use std::fs;
use std::path::Path;

use sitesmith_client::{AssetEncoder, SubmitError};
use sitesmith_core::{DraftEditor, DraftField, StagedProduct, WebsiteDraft};

use super::{CliError, Context};

fn load(file: &Path) -> Result<WebsiteDraft, CliError> {
    let contents = fs::read_to_string(file).map_err(|err| {
        format!(
            "no draft at {} ({err}) - run `sitesmith draft new` first",
            file.display()
        )
    })?;
    Ok(serde_json::from_str(&contents)?)
}

fn store(file: &Path, draft: &WebsiteDraft) -> Result<(), CliError> {
    fs::write(file, serde_json::to_string_pretty(draft)?)?;
    Ok(())
}

/// Start a fresh, defaulted draft.
///
/// # Errors
///
/// Returns an error if the draft file cannot be written.
pub fn new(file: &Path) -> Result<(), CliError> {
    store(file, DraftEditor::new().snapshot())?;
    tracing::info!("Started a new draft at {}", file.display());
    Ok(())
}

/// Print the current draft snapshot.
///
/// # Errors
///
/// Returns an error if there is no draft file.
pub fn show(file: &Path) -> Result<(), CliError> {
    let draft = load(file)?;
    tracing::info!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}

/// Set one field by dotted path.
///
/// # Errors
///
/// Fails fast on unknown paths and on invalid industry/color values; the
/// stored draft is unchanged in that case.
pub fn set(file: &Path, path: &str, value: &str) -> Result<(), CliError> {
    let field: DraftField = path.parse()?;

    let mut editor = DraftEditor::from_draft(load(file)?);
    editor.set_field(field, value)?;
    store(file, editor.snapshot())?;

    tracing::info!("{field} = {value}");
    Ok(())
}

/// Encode an image file and attach it as the draft's logo.
///
/// # Errors
///
/// An unreadable image leaves the draft's logo field unchanged.
pub async fn logo(file: &Path, image: &Path) -> Result<(), CliError> {
    let asset = AssetEncoder::encode(image).await?;
    let encoded_len = asset.len();

    let mut editor = DraftEditor::from_draft(load(file)?);
    editor.set_logo(Some(asset));
    store(file, editor.snapshot())?;

    tracing::info!("Attached logo ({encoded_len} base64 bytes)");
    Ok(())
}

/// Encode an image file and attach it as the draft's hero image.
///
/// # Errors
///
/// An unreadable image leaves the draft's hero field unchanged.
pub async fn hero(file: &Path, image: &Path) -> Result<(), CliError> {
    let asset = AssetEncoder::encode(image).await?;
    let encoded_len = asset.len();

    let mut editor = DraftEditor::from_draft(load(file)?);
    editor.set_hero_image(Some(asset));
    store(file, editor.snapshot())?;

    tracing::info!("Attached hero image ({encoded_len} base64 bytes)");
    Ok(())
}

/// Stage a product, attach its image if given, and commit it to the
/// catalog.
///
/// # Errors
///
/// Returns an error (and commits nothing) when the entry is incomplete -
/// the same gate the form's disabled add-button enforces.
pub async fn product_add(
    file: &Path,
    name: &str,
    description: &str,
    price: &str,
    image: Option<&Path>,
) -> Result<(), CliError> {
    let mut editor = DraftEditor::from_draft(load(file)?);

    editor.stage_product(StagedProduct {
        name: name.to_owned(),
        description: description.to_owned(),
        price: price.to_owned(),
        image_base64: None,
    });
    if let Some(image) = image {
        editor.set_staged_image(Some(AssetEncoder::encode(image).await?));
    }

    if !editor.staged().is_complete() {
        return Err("a product needs a name, a description, and a non-negative price".into());
    }
    editor.commit_product();
    store(file, editor.snapshot())?;

    tracing::info!(
        "Added product {name} ({} in catalog)",
        editor.snapshot().products.len()
    );
    Ok(())
}

/// Remove a product by its zero-based position.
///
/// # Errors
///
/// Returns an error for an out-of-range index (the library treats it as a
/// no-op; the CLI tells the user instead of silently doing nothing).
pub fn product_remove(file: &Path, index: usize) -> Result<(), CliError> {
    let mut editor = DraftEditor::from_draft(load(file)?);

    let before = editor.snapshot().products.len();
    if index >= before {
        return Err(format!("no product at index {index} (catalog has {before})").into());
    }

    editor.remove_product(index);
    store(file, editor.snapshot())?;

    tracing::info!("Removed product {index}");
    Ok(())
}

/// Validate the draft and submit it for generation.
///
/// On success the draft file is discarded (the composition is done); on
/// any failure it is kept exactly as-is so the user can correct or just
/// resubmit - including after an expired session and a fresh login.
///
/// # Errors
///
/// Surfaces [`SubmitError`]; an unauthorized result asks the user to sign
/// in again.
pub async fn submit(file: &Path) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.require_session().await?;

    let draft = load(file)?;

    match ctx.websites.submit(&draft).await {
        Ok(record) => {
            tracing::info!("Website created: {} (slug {})", record.id, record.slug);
            tracing::info!("Preview: {}", ctx.websites.preview_url(&record.id));
            fs::remove_file(file)?;
            Ok(())
        }
        Err(SubmitError::Unauthorized) => {
            Err("session expired - sign in again, your draft is untouched".into())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("draft.json");

        new(&file).unwrap();
        set(&file, "business_name", "Tidepool Ceramics").unwrap();
        set(&file, "colors.accent", "#DB2777").unwrap();

        let draft = load(&file).unwrap();
        assert_eq!(draft.business_name, "Tidepool Ceramics");
        assert_eq!(draft.colors.accent.as_str(), "#DB2777");
    }

    #[test]
    fn test_set_unknown_path_leaves_file_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("draft.json");

        new(&file).unwrap();
        assert!(set(&file, "colors.tertiary", "#000000").is_err());
        assert_eq!(load(&file).unwrap(), WebsiteDraft::default());
    }

    #[tokio::test]
    async fn test_product_add_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("draft.json");

        new(&file).unwrap();
        product_add(&file, "Mug", "350ml", "24.50", None)
            .await
            .unwrap();
        product_add(&file, "Bowl", "600ml", "32", None)
            .await
            .unwrap();
        assert_eq!(load(&file).unwrap().products.len(), 2);

        product_remove(&file, 0).unwrap();
        let draft = load(&file).unwrap();
        assert_eq!(draft.products.len(), 1);
        assert_eq!(draft.products[0].name, "Bowl");

        assert!(product_remove(&file, 5).is_err());
    }

    #[tokio::test]
    async fn test_incomplete_product_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("draft.json");

        new(&file).unwrap();
        assert!(
            product_add(&file, "Mug", "350ml", "not-a-price", None)
                .await
                .is_err()
        );
        assert!(load(&file).unwrap().products.is_empty());
    }
}
