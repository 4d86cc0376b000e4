use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use log::{info, warn};

use crate::config::AppConfig;

/// Logs what the service will find under the storage root. Nothing is
/// created: the tree is populated by whoever publishes the issues.
pub fn check_storage_root(config: &AppConfig) {
    let pdf_dir = config.storage_root.join("pdfs");
    if !config.storage_root.is_dir() {
        warn!(
            "Storage root {:?} does not exist; the archive will be empty",
            config.storage_root
        );
    } else if !pdf_dir.is_dir() {
        warn!("No pdfs directory under {:?}", config.storage_root);
    } else {
        info!("Serving magazine PDFs from {:?}", pdf_dir);
    }
}

pub fn attachment(file_name: String) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(file_name)],
    }
}

pub fn inline() -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Inline,
        parameters: vec![],
    }
}
