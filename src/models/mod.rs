pub mod emotion;
pub mod entry;
