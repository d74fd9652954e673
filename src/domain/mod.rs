//! Domain rows displayed in tables

mod contact;
mod product;

pub use contact::*;
pub use product::*;
