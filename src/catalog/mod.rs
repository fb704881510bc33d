//! Pure catalog resolution rules: visibility, pricing, rating aggregation,
//! image resolution and promotion selection. Nothing here touches the store;
//! every function is deterministic over the rows it is given.

pub mod image;
pub mod price;
pub mod promotion;
pub mod rating;
pub mod visibility;
