pub mod catalog;
pub mod chat;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod geo;
pub mod layout;
pub mod map_view;
pub mod overlay;
pub mod session;
pub mod surface;

pub use catalog::*;
pub use config::*;
pub use geo::*;
pub use layout::*;
pub use map_view::*;
pub use overlay::*;
pub use surface::*;
