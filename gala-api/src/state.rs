use gala_catalog::Catalog;
use gala_core::SiteSettings;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteSettings>,
    pub catalog: Catalog,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(site: SiteSettings, static_dir: PathBuf) -> Self {
        Self {
            site: Arc::new(site),
            catalog: Catalog::standard(),
            static_dir,
        }
    }
}
