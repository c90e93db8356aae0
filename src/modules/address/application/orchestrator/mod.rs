pub mod address_export;
