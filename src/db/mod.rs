pub mod pool;
pub mod queries;
pub mod schema;
pub mod stats;
pub mod store;

pub use store::SurveyStore;
