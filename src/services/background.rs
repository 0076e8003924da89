//! Background setting
//!
//! The dashboard background is stored under its own key, either as a
//! reference string (URL or path) or as an inline `data:` URL built from a
//! local image file.

use std::path::Path;

use crate::audit::{EntityType, Operation};
use crate::error::{BudgetError, BudgetResult};
use crate::storage::{BudgetStore, KeyValueStore, BACKGROUND_KEY};

/// Largest image accepted for inlining
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const BACKGROUND_ENTITY_ID: &str = "background";

/// MIME type for a supported image extension
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Read an image file into a base64 `data:` URL
///
/// Type and size are checked before the file contents are read.
pub fn image_data_url(path: &Path) -> BudgetResult<String> {
    use base64::{engine::general_purpose::STANDARD, Engine};

    let mime = image_mime_type(path).ok_or_else(|| {
        BudgetError::Background(format!(
            "{} is not a supported image (png, jpg, gif, webp, bmp, svg)",
            path.display()
        ))
    })?;

    let metadata = std::fs::metadata(path)
        .map_err(|e| BudgetError::Background(format!("cannot read {}: {}", path.display(), e)))?;
    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(BudgetError::Background(format!(
            "{} is {} bytes; images are limited to 5 MB",
            path.display(),
            metadata.len()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| BudgetError::Background(format!("cannot read {}: {}", path.display(), e)))?;

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Service for the background setting
pub struct BackgroundService<'a, S: KeyValueStore> {
    store: &'a mut BudgetStore<S>,
}

impl<'a, S: KeyValueStore> BackgroundService<'a, S> {
    /// Create a new background service
    pub fn new(store: &'a mut BudgetStore<S>) -> Self {
        Self { store }
    }

    /// Stored background, or `None` for the default
    pub fn get(&self) -> BudgetResult<Option<String>> {
        Ok(self
            .store
            .backend()
            .get(BACKGROUND_KEY)?
            .filter(|value| !value.is_empty()))
    }

    /// Store a URL or path; an empty reference clears the setting
    pub fn set_reference(&mut self, reference: &str) -> BudgetResult<Option<String>> {
        let reference = reference.trim();
        if reference.is_empty() {
            self.clear()?;
            return Ok(None);
        }

        self.store.backend_mut().set(BACKGROUND_KEY, reference)?;
        self.log(Operation::Update, format!("set to {}", reference));
        Ok(Some(reference.to_string()))
    }

    /// Inline a local image file as the background
    pub fn set_image(&mut self, path: &Path) -> BudgetResult<String> {
        let data_url = image_data_url(path)?;
        self.store.backend_mut().set(BACKGROUND_KEY, &data_url)?;
        self.log(
            Operation::Update,
            format!("set to image {} ({} bytes encoded)", path.display(), data_url.len()),
        );
        Ok(data_url)
    }

    /// Remove the background setting
    pub fn clear(&mut self) -> BudgetResult<()> {
        self.store.backend_mut().remove(BACKGROUND_KEY)?;
        self.log(Operation::Delete, "cleared");
        Ok(())
    }

    fn log(&self, operation: Operation, summary: impl Into<String>) {
        self.store.log_event(
            operation,
            EntityType::Background,
            BACKGROUND_ENTITY_ID,
            None,
            summary,
        );
    }
}

/// Short description of a stored background for display
pub fn describe_background(value: &str) -> String {
    match value.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or("unknown");
            format!("inline image ({}, {} bytes encoded)", mime, value.len())
        }
        None => value.to_string(),
    }
}
