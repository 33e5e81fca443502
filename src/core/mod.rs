pub mod append;
pub mod bundle;
pub mod export;
pub mod list;
