//! Input validation for relais CLI arguments.

use anyhow::{bail, Result};

/// Maximum allowed length for parcel ids.
pub const MAX_ID_LENGTH: usize = 128;

/// Maximum allowed length for stage names.
pub const MAX_STAGE_LENGTH: usize = 64;

/// Maximum allowed length for free-text fields (names, comments).
pub const MAX_TEXT_LENGTH: usize = 500;

/// Validates a parcel id: non-empty, bounded, alphanumeric/dash/underscore.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!(
            "ID too long: {} characters (max {})",
            id.len(),
            MAX_ID_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("ID '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    Ok(())
}

/// Validates a stage name: stage identifiers carry accents, spaces and
/// variant suffixes ("Confirmé-AG", "Out for delivery"), so this only
/// bounds length and rejects control characters.
pub fn validate_stage(stage: &str) -> Result<()> {
    if stage.trim().is_empty() {
        bail!("Stage name cannot be empty");
    }

    if stage.chars().count() > MAX_STAGE_LENGTH {
        bail!(
            "Stage name too long: {} characters (max {})",
            stage.chars().count(),
            MAX_STAGE_LENGTH
        );
    }

    if stage.chars().any(|c| c.is_control()) {
        bail!("Stage name contains control characters");
    }

    Ok(())
}

/// Validates a free-text field (client name, comment).
pub fn validate_text(text: &str) -> Result<()> {
    if text.chars().count() > MAX_TEXT_LENGTH {
        bail!(
            "Text too long: {} characters (max {})",
            text.chars().count(),
            MAX_TEXT_LENGTH
        );
    }
    Ok(())
}

/// Clap value parser wrapper for ids.
pub fn clap_id_validator(value: &str) -> Result<String, String> {
    validate_id(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

/// Clap value parser wrapper for stage names.
pub fn clap_stage_validator(value: &str) -> Result<String, String> {
    validate_stage(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

/// Clap value parser wrapper for free-text fields.
pub fn clap_text_validator(value: &str) -> Result<String, String> {
    validate_text(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_id("colis-123").is_ok());
        assert!(validate_id("colis_2024").is_ok());
    }

    #[test]
    fn test_invalid_ids() {
        assert!(validate_id("").is_err());
        assert!(validate_id("../etc/passwd").is_err());
        assert!(validate_id(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_stage_names_allow_accents_and_spaces() {
        assert!(validate_stage("Confirmé-AG").is_ok());
        assert!(validate_stage("Out for delivery").is_ok());
    }

    #[test]
    fn test_stage_names_rejected() {
        assert!(validate_stage("").is_err());
        assert!(validate_stage("  ").is_err());
        assert!(validate_stage("bad\nstage").is_err());
        assert!(validate_stage(&"x".repeat(100)).is_err());
    }

    #[test]
    fn test_text_bounds() {
        assert!(validate_text("un commentaire").is_ok());
        assert!(validate_text(&"x".repeat(600)).is_err());
    }
}
