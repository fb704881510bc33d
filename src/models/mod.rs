mod category;
mod discount;
mod envelope;
mod image;
mod localized;
mod product;
mod promotion;
mod review;
mod variant;

pub use category::*;
pub use discount::*;
pub use envelope::*;
pub use image::*;
pub use localized::*;
pub use product::*;
pub use promotion::*;
pub use review::*;
pub use variant::*;
