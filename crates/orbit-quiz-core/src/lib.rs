pub mod camera;
pub mod catalog;
pub mod completion;
pub mod confetti;
pub mod config;
pub mod constants;
pub mod derangement;
pub mod gallery;
pub mod gesture;
pub mod persistence;
pub mod placement;
pub mod preferences;
pub mod resolver;
pub mod scene;
pub mod session;
pub mod state;

pub use camera::*;
pub use catalog::*;
pub use completion::*;
pub use config::*;
pub use gallery::*;
pub use gesture::*;
pub use persistence::*;
pub use placement::*;
pub use resolver::*;
pub use scene::*;
pub use session::*;
pub use state::*;
