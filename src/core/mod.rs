pub mod camera;
pub mod config;
pub mod constants;
pub mod host;
pub mod hover;
pub mod labels;
pub mod navigation;
pub mod picking;
pub mod pointer;
pub mod resize;
pub mod scene;
pub mod session;

pub use camera::*;
pub use config::*;
pub use host::*;
pub use hover::*;
pub use labels::*;
pub use navigation::*;
pub use picking::*;
pub use pointer::*;
pub use resize::*;
pub use scene::*;
pub use session::*;

// Scene shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
