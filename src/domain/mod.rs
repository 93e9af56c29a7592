pub mod cart;
pub mod catalog;
pub mod product;
pub mod selection;

pub use cart::*;
pub use catalog::*;
pub use product::*;
pub use selection::*;
