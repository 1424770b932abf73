pub mod forms;
pub mod gateway;
pub mod page_selector;
pub mod route_store;

pub use crate::domain::model::{FormPayload, Page, Route, SubmissionStatus};
pub use crate::domain::ports::{FormRelay, Location};
pub use crate::utils::error::Result;
