use crate::config::AppConfig;
use crate::storage::{catalog_repository::CatalogRepository, pdf_repository::PdfRepository};

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: CatalogRepository,
    pub pdfs: PdfRepository,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let pdfs = PdfRepository::new(
            config.storage_root.clone(),
            config.magazine.pdf_file_name.clone(),
        );
        let catalog = CatalogRepository::published(&config.route_prefix);
        Self {
            config,
            catalog,
            pdfs,
        }
    }
}
