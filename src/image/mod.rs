pub mod io;
pub mod rgba;
pub mod traits;

pub use self::rgba::RgbaBuffer;
pub use self::traits::{ImageView, ImageViewMut, Rows};
