use actix_files as fs;
use actix_web::web;
use log::warn;

use crate::config::AppConfig;

pub mod health;
pub mod magazines;

/// Registers every endpoint. `latest` and `archive` go before `{id}` so they
/// are never read as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.service(health::health_handler);

    // actix-files falls back to the working directory when the serve path
    // does not exist, so a missing `images/` must not be mounted at all.
    let images_dir = config.storage_root.join("images");
    if images_dir.is_dir() {
        cfg.service(fs::Files::new("/images", images_dir));
    } else {
        warn!("No images directory at {:?}, cover images will 404", images_dir);
    }

    cfg.service(
        web::scope(&config.route_prefix)
            .service(magazines::list_magazines)
            .service(magazines::latest_magazine)
            .service(magazines::magazine_archive)
            .service(magazines::magazine_detail)
            .service(magazines::download_pdf)
            .service(magazines::view_pdf)
            .service(magazines::check_pdf),
    );
}
