pub mod content_parser;
pub mod credential_store;
pub mod problem_service;
pub mod report_service;
pub mod report_writer;
pub mod solution_service;

pub use content_parser::{ContentParser, MarkerParser, ParsedContent};
pub use credential_store::CredentialStore;
pub use problem_service::{to_slug, ProblemService};
pub use report_service::{render, ReportRenderer};
pub use report_writer::ReportWriter;
pub use solution_service::SolutionService;
