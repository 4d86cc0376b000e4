pub mod archive;
pub mod category;
pub mod magazine;
