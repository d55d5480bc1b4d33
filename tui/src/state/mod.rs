pub mod input;
pub mod page;
