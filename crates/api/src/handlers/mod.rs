//! HTTP handlers, one module per resource.

pub mod cv_info;
pub mod document_requests;
pub mod educations;
pub mod form_responses;
pub mod projects;
pub mod skills;
pub mod work_experiences;
