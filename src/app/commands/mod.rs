pub mod generate;
pub mod load_manifest;
