pub mod collaborators;
pub mod export;
pub mod journal;
pub mod wrapped;
