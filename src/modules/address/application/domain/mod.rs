pub mod entities;
pub mod export_field;
