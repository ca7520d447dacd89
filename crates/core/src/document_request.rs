//! Document-request vocabularies, write-boundary limits, and validators.
//!
//! Provides the status/priority/field-type vocabularies with string
//! conversion, the field-length limits enforced when a request or its
//! nested topics/fields are written, and the validator functions the API
//! layer calls before touching the store.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Request status constants
// ---------------------------------------------------------------------------

/// Request assembled but not yet shared with the client.
pub const STATUS_DRAFT: &str = "Draft";
/// Request link shared with the client.
pub const STATUS_SENT: &str = "Sent";
/// Client has started answering.
pub const STATUS_IN_PROGRESS: &str = "InProgress";
/// All requested information received.
pub const STATUS_COMPLETED: &str = "Completed";

/// The semantically meaningful request statuses.
///
/// The store accepts any string up to [`MAX_STATUS_LEN`]; no transition
/// rules are enforced. These four are the values the rest of the system
/// understands.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_SENT,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Priority tier constants
// ---------------------------------------------------------------------------

/// Highest urgency, requested first.
pub const PRIORITY_TOP: &str = "Priority";
/// First follow-up tier.
pub const PRIORITY_TIER_1: &str = "Tier 1";
/// Second follow-up tier.
pub const PRIORITY_TIER_2: &str = "Tier 2";
/// Lowest urgency tier.
pub const PRIORITY_TIER_3: &str = "Tier 3";

/// All valid priority tiers.
pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_TOP,
    PRIORITY_TIER_1,
    PRIORITY_TIER_2,
    PRIORITY_TIER_3,
];

// ---------------------------------------------------------------------------
// Topic field type constants
// ---------------------------------------------------------------------------

/// Free-text field.
pub const FIELD_TYPE_TEXT: &str = "Text";
/// Numeric field.
pub const FIELD_TYPE_NUMBER: &str = "Number";
/// Calendar date field.
pub const FIELD_TYPE_DATE: &str = "Date";
/// File upload field.
pub const FIELD_TYPE_FILE: &str = "File";
/// Single choice from a serialized options list.
pub const FIELD_TYPE_DROPDOWN: &str = "Dropdown";

/// All valid topic field types.
pub const VALID_FIELD_TYPES: &[&str] = &[
    FIELD_TYPE_TEXT,
    FIELD_TYPE_NUMBER,
    FIELD_TYPE_DATE,
    FIELD_TYPE_FILE,
    FIELD_TYPE_DROPDOWN,
];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for the denormalized project-name snapshot.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Maximum length for a request status string.
pub const MAX_STATUS_LEN: usize = 50;

/// Maximum length for a topic's category name.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/// Maximum length for a topic name.
pub const MAX_TOPIC_NAME_LEN: usize = 200;

/// Maximum length for a topic's short display label.
pub const MAX_TOPIC_LABEL_LEN: usize = 200;

/// Maximum length for a priority tier string.
pub const MAX_PRIORITY_LEN: usize = 50;

/// Maximum length for a topic description.
pub const MAX_TOPIC_DESCRIPTION_LEN: usize = 2_000;

/// Maximum length for a topic field name.
pub const MAX_FIELD_NAME_LEN: usize = 200;

/// Maximum length for a topic field type string.
pub const MAX_FIELD_TYPE_LEN: usize = 50;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Request lifecycle status enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Draft,
    Sent,
    InProgress,
    Completed,
}

impl RequestStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Sent => STATUS_SENT,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_DRAFT => Ok(Self::Draft),
            STATUS_SENT => Ok(Self::Sent),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown request status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

/// Priority tier enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    Priority,
    Tier1,
    Tier2,
    Tier3,
}

impl PriorityTier {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => PRIORITY_TOP,
            Self::Tier1 => PRIORITY_TIER_1,
            Self::Tier2 => PRIORITY_TIER_2,
            Self::Tier3 => PRIORITY_TIER_3,
        }
    }

    /// Parse from a string, returning an error for unknown tiers.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            PRIORITY_TOP => Ok(Self::Priority),
            PRIORITY_TIER_1 => Ok(Self::Tier1),
            PRIORITY_TIER_2 => Ok(Self::Tier2),
            PRIORITY_TIER_3 => Ok(Self::Tier3),
            other => Err(CoreError::Validation(format!(
                "Unknown priority tier: '{other}'. Valid tiers: {}",
                VALID_PRIORITIES.join(", ")
            ))),
        }
    }
}

/// Topic field type enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Date,
    File,
    Dropdown,
}

impl FieldType {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => FIELD_TYPE_TEXT,
            Self::Number => FIELD_TYPE_NUMBER,
            Self::Date => FIELD_TYPE_DATE,
            Self::File => FIELD_TYPE_FILE,
            Self::Dropdown => FIELD_TYPE_DROPDOWN,
        }
    }

    /// Parse from a string, returning an error for unknown field types.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            FIELD_TYPE_TEXT => Ok(Self::Text),
            FIELD_TYPE_NUMBER => Ok(Self::Number),
            FIELD_TYPE_DATE => Ok(Self::Date),
            FIELD_TYPE_FILE => Ok(Self::File),
            FIELD_TYPE_DROPDOWN => Ok(Self::Dropdown),
            other => Err(CoreError::Validation(format!(
                "Unknown field type: '{other}'. Valid types: {}",
                VALID_FIELD_TYPES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Generic length checks
// ---------------------------------------------------------------------------

/// Validate that a required string is non-empty and within `max` bytes.
pub fn validate_required_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    validate_max_len(field, value, max)
}

/// Validate that a string (empty allowed) is within `max` bytes.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.len() > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write-boundary validators
// ---------------------------------------------------------------------------

/// Validate the project-name snapshot on a request header.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("projectName", name, MAX_PROJECT_NAME_LEN)
}

/// Validate a request status string.
///
/// Length-only: the store accepts statuses outside [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_max_len("status", status, MAX_STATUS_LEN)
}

/// Validate a topic's category name.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("categoryName", name, MAX_CATEGORY_NAME_LEN)
}

/// Validate a topic name.
pub fn validate_topic_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("topicName", name, MAX_TOPIC_NAME_LEN)
}

/// Validate a topic's display label. Empty is allowed.
pub fn validate_topic_label(label: &str) -> Result<(), CoreError> {
    validate_max_len("topicLabel", label, MAX_TOPIC_LABEL_LEN)
}

/// Validate a priority tier string.
///
/// Length-only, mirroring [`validate_status`]: the four known tiers are a
/// vocabulary, not a store constraint.
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    validate_max_len("priority", priority, MAX_PRIORITY_LEN)
}

/// Validate a topic description. Empty is allowed.
pub fn validate_topic_description(description: &str) -> Result<(), CoreError> {
    validate_max_len("description", description, MAX_TOPIC_DESCRIPTION_LEN)
}

/// Validate a topic field name.
pub fn validate_field_name(name: &str) -> Result<(), CoreError> {
    validate_required_text("fieldName", name, MAX_FIELD_NAME_LEN)
}

/// Validate a topic field type string.
pub fn validate_field_type(field_type: &str) -> Result<(), CoreError> {
    validate_max_len("fieldType", field_type, MAX_FIELD_TYPE_LEN)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
