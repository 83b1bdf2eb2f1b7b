/// Page integration and rendering constants for the browser front-end.
///
/// Scene tuning (camera, motion, waypoint layout) lives in `core::constants`.
// Page hooks
pub const CANVAS_ID: &str = "three-canvas";
pub const SECTION_LINK_SELECTOR: &str = "nav a, .cta a.btn";
pub const ACTIONABLE_CLASS: &str = "clickable";
pub const GLOBAL_HANDLE: &str = "__sceneNav";

// One extra resize pass after CSS has settled
pub const DEFERRED_RESIZE_MS: i32 = 300;

// Lighting (not physically based; just enough to read the panels' shape)
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_INTENSITY: f32 = 0.8;
pub const KEY_LIGHT_POSITION: [f32; 3] = [4.0, 6.0, 4.0];

// Particles
pub const PARTICLE_SIZE: f32 = 0.08;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Label atlas: one row per waypoint
pub const LABEL_ROW_WIDTH: u32 = 256;
pub const LABEL_ROW_HEIGHT: u32 = 80;
pub const LABEL_FONT: &str = "bold 36px Arial";
pub const LABEL_COLOR: &str = "white";

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;
