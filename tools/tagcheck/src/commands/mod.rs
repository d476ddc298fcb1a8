pub mod check;
pub mod list;
pub mod remove;
pub mod schema;
