pub mod recommend;
pub mod worker;

pub use recommend::{FALLBACK_FREQUENCY_DAYS, Recommendation, RecommendationClient};
pub use worker::{LookupCompletion, LookupExecutor, LookupRequest};
