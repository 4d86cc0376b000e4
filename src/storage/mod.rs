pub mod catalog_repository;
pub mod pdf_repository;
