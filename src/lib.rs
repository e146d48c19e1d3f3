pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grading;
pub mod stats;

pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use error::{DugoutError, Result};
pub use grading::{GeminiClient, GeminiConfig, GradeResult, Grader, TextGenerator};
pub use stats::{FanGraphsClient, PlayerRole, StatsCache, StatsGateway, StatsSource};
