pub mod export;
pub mod markup;
pub mod pages;
pub mod site;

pub use export::export_site;
pub use site::Site;
