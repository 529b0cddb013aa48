pub mod assessment_repo;
pub mod control_repo;
pub mod criteria_repo;
pub mod kri_repo;
pub mod report_repo;
pub mod risk_repo;
pub mod taxonomy_repo;
pub mod treatment_repo;
pub mod unit_repo;
pub mod user_repo;

pub use assessment_repo::AssessmentRepository;
pub use control_repo::ControlRepository;
pub use criteria_repo::CriteriaRepository;
pub use kri_repo::KriRepository;
pub use report_repo::ReportRepository;
pub use risk_repo::RiskRepository;
pub use taxonomy_repo::TaxonomyRepository;
pub use treatment_repo::TreatmentRepository;
pub use unit_repo::UnitRepository;
pub use user_repo::UserRepository;
