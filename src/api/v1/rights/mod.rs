pub mod change;
pub mod load;
