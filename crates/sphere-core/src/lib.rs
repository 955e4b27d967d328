pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod labels;
pub mod layout;
pub mod projector;
pub mod rotation;
pub mod state;
pub mod vector;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use hit_test::*;
pub use labels::*;
pub use layout::*;
pub use projector::*;
pub use rotation::*;
pub use state::*;
pub use vector::*;
