//! HTTP endpoints for posting analysis and company lookups.

mod router;

pub use router::{detection_router, AnalyzeJobRequest, CompanyStatsRequest};
