//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Plain storage access
//! returns `Result<_, sqlx::Error>`; the document-request and
//! form-response repositories own their write contracts and return
//! `Result<_, CoreError>` with explicit NotFound / Conflict / Validation
//! kinds.

pub mod cv_info_repo;
pub mod document_request_repo;
pub mod education_repo;
pub mod form_response_repo;
pub mod project_repo;
pub mod skill_repo;
pub mod work_experience_repo;

pub use cv_info_repo::CvInfoRepo;
pub use document_request_repo::DocumentRequestRepo;
pub use education_repo::EducationRepo;
pub use form_response_repo::FormResponseRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
pub use work_experience_repo::WorkExperienceRepo;
