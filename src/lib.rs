pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpRelay, MemoryLocation};
pub use app::Site;
pub use config::SiteConfig;
pub use crate::core::{gateway::SubmissionGateway, route_store::RouteStore};
pub use domain::model::{FormPayload, Page, Route, SubmissionStatus};
pub use utils::error::{Result, SiteError};
