//! Write-boundary limits and validators for the portfolio entities.
//!
//! Covers CV info, projects, work experiences, skills, and education
//! records. Rules are intentionally light: required display strings must
//! be non-empty, and everything is length-capped.

use crate::document_request::{validate_max_len, validate_required_text};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for short display strings (names, titles, positions).
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for a skill category.
pub const MAX_SKILL_CATEGORY_LEN: usize = 100;

/// Maximum length for long free-text fields (bios, descriptions).
pub const MAX_LONG_TEXT_LEN: usize = 2_000;

// ---------------------------------------------------------------------------
// CV info
// ---------------------------------------------------------------------------

/// Validate the display name on a CV info record.
pub fn validate_cv_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validate the professional title on a CV info record.
pub fn validate_cv_title(title: &str) -> Result<(), CoreError> {
    validate_required_text("title", title, MAX_NAME_LEN)
}

/// Validate a bio. Empty is allowed.
pub fn validate_bio(bio: &str) -> Result<(), CoreError> {
    validate_max_len("bio", bio, MAX_LONG_TEXT_LEN)
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Validate a project title.
pub fn validate_project_title(title: &str) -> Result<(), CoreError> {
    validate_required_text("title", title, MAX_NAME_LEN)
}

/// Validate a project description.
pub fn validate_project_description(description: &str) -> Result<(), CoreError> {
    validate_required_text("description", description, MAX_LONG_TEXT_LEN)
}

// ---------------------------------------------------------------------------
// Work experiences
// ---------------------------------------------------------------------------

/// Validate a company name.
pub fn validate_company(company: &str) -> Result<(), CoreError> {
    validate_required_text("company", company, MAX_NAME_LEN)
}

/// Validate a position title.
pub fn validate_position(position: &str) -> Result<(), CoreError> {
    validate_required_text("position", position, MAX_NAME_LEN)
}

/// Validate a work-experience description.
pub fn validate_experience_description(description: &str) -> Result<(), CoreError> {
    validate_required_text("description", description, MAX_LONG_TEXT_LEN)
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Validate a skill name.
pub fn validate_skill_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validate a skill category.
pub fn validate_skill_category(category: &str) -> Result<(), CoreError> {
    validate_required_text("category", category, MAX_SKILL_CATEGORY_LEN)
}

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

/// Validate an institution name.
pub fn validate_institution(institution: &str) -> Result<(), CoreError> {
    validate_required_text("institution", institution, MAX_NAME_LEN)
}

/// Validate a degree name.
pub fn validate_degree(degree: &str) -> Result<(), CoreError> {
    validate_required_text("degree", degree, MAX_NAME_LEN)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- cv info -----------------------------------------------------------

    #[test]
    fn valid_cv_name() {
        assert!(validate_cv_name("Jane Doe").is_ok());
    }

    #[test]
    fn empty_cv_name_rejected() {
        assert!(validate_cv_name("").is_err());
    }

    #[test]
    fn empty_bio_allowed() {
        assert!(validate_bio("").is_ok());
    }

    #[test]
    fn long_bio_rejected() {
        let long = "x".repeat(MAX_LONG_TEXT_LEN + 1);
        assert!(validate_bio(&long).is_err());
    }

    // -- projects ------------------------------------------------------------

    #[test]
    fn empty_project_title_rejected() {
        assert!(validate_project_title("").is_err());
    }

    #[test]
    fn long_project_description_rejected() {
        let long = "x".repeat(MAX_LONG_TEXT_LEN + 1);
        assert!(validate_project_description(&long).is_err());
    }

    #[test]
    fn max_length_project_title_accepted() {
        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(validate_project_title(&exact).is_ok());
    }

    // -- work experiences ---------------------------------------------------

    #[test]
    fn empty_company_rejected() {
        assert!(validate_company("").is_err());
    }

    #[test]
    fn empty_position_rejected() {
        assert!(validate_position("").is_err());
    }

    // -- skills -------------------------------------------------------------

    #[test]
    fn valid_skill() {
        assert!(validate_skill_name("Rust").is_ok());
        assert!(validate_skill_category("Languages").is_ok());
    }

    #[test]
    fn long_skill_category_rejected() {
        let long = "x".repeat(MAX_SKILL_CATEGORY_LEN + 1);
        assert!(validate_skill_category(&long).is_err());
    }

    // -- education ------------------------------------------------------------

    #[test]
    fn empty_institution_rejected() {
        assert!(validate_institution("").is_err());
    }

    #[test]
    fn empty_degree_rejected() {
        assert!(validate_degree("").is_err());
    }
}
