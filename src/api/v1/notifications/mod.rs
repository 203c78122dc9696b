pub mod change;
pub mod get;
