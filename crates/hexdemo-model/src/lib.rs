pub mod color;
pub mod error;
pub mod item;

pub use color::HexColor;
pub use error::{ModelError, Result};
pub use item::{DEFAULT_LETTER, HexItem};
