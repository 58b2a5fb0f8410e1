pub mod import;
pub mod info;
