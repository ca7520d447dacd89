//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying the full entity body with its id
//!
//! Everything serializes with camelCase keys; the JSON wire format uses a
//! single casing convention end to end.

pub mod cv_info;
pub mod document_request;
pub mod education;
pub mod form_response;
pub mod project;
pub mod request_topic;
pub mod skill;
pub mod topic_field;
pub mod work_experience;
