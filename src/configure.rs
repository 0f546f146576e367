use crate::explorers::{display_name, COMMON_EXPLORERS};
use crate::settings::ConfigProvider;
use std::path::Path;

/// What the user picked in the configure dialog. Built-in entries are carried
/// by index into [`COMMON_EXPLORERS`]; the display label is never matched
/// back against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Builtin(usize),
    Custom(String),
}

/// Validate free-text explorer input. Returns the trimmed path, or `None`
/// when the input is empty after trimming.
pub fn validate_custom(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve a selection to the path that should be persisted. An out-of-range
/// builtin index fails closed to `None`, which callers treat as cancellation.
pub fn resolve_selection(selection: &Selection) -> Option<String> {
    match selection {
        Selection::Builtin(idx) => COMMON_EXPLORERS.get(*idx).map(|e| e.path.to_string()),
        Selection::Custom(input) => validate_custom(input),
    }
}

/// Decision for a resolved path before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// The path exists on disk; persist right away.
    Persist,
    /// The path is missing. Saving it is still allowed, but only after the
    /// user explicitly confirms.
    Confirm,
}

pub fn check_path(explorer_path: &str) -> Acceptance {
    if Path::new(explorer_path).exists() {
        Acceptance::Persist
    } else {
        Acceptance::Confirm
    }
}

/// Persist the chosen explorer path and return the confirmation message shown
/// to the user.
pub fn persist(explorer_path: &str, cfg: &mut dyn ConfigProvider) -> anyhow::Result<String> {
    cfg.set_explorer_path(explorer_path)?;
    let name = display_name(explorer_path);
    tracing::info!("explorer configured: {explorer_path}");
    Ok(format!("File explorer configured: {name}"))
}
