//! Terminal front end for the array vs. list collection demo.

pub mod driver;
pub mod logging;
pub mod parse;
pub mod render;
pub mod session;
