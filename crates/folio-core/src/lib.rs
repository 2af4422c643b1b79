pub mod config;
pub mod constants;
pub mod counter;
pub mod error;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod scroll;

pub use config::*;
pub use counter::*;
pub use error::*;
pub use nav::*;
pub use parallax::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
