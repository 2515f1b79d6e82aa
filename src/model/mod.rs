//! Pure data structures (DTOs) for the cart domain.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
