pub mod context;
pub mod documents;
