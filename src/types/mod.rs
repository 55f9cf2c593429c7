mod family;
mod info;

pub use family::*;
pub use info::*;
