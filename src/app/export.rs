use crate::adapters::{HttpRelay, MemoryLocation};
use crate::app::site::Site;
use crate::config::SiteConfig;
use crate::domain::model::Page;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Renders every page into `out` as `<slug>.html` and returns the written
/// paths in navigation order. `out` is created when missing.
pub fn export_site(config: &SiteConfig, out: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out)?;

    let relay = Arc::new(HttpRelay::new());
    let mut written = Vec::with_capacity(Page::ALL.len());
    for page in Page::ALL {
        let location = Arc::new(MemoryLocation::new(page.route_path()));
        let site = Site::new(config.clone(), location, relay.clone())?;

        let path = out.join(format!("{}.html", page.slug()));
        fs::write(&path, site.render())?;
        tracing::info!("📁 Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
