use glam::{Vec2, Vec3};

// Scene tuning shared by the interaction core and the renderer.
// One canonical set.

// Camera
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 1.6, 6.0);
pub const CAMERA_START_LOOK_AT: Vec3 = Vec3::new(0.0, 0.6, 0.0);
pub const SECTION_LOOK_AT: Vec3 = Vec3::new(0.0, 0.8, 0.0); // gaze used by every section pose

// Parallax: pointer NDC -> world offset of the desired eye position
pub const PARALLAX_GAIN: Vec2 = Vec2::new(0.6, 0.36);
// Pointer NDC -> world offset of the gaze point
pub const GAZE_PARALLAX_GAIN: f32 = 0.2;

// Fraction of the remaining distance covered per reference frame
pub const CAMERA_SMOOTHING_PER_FRAME: f32 = 0.06;
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
// Longest frame the smoother and animation clock will integrate in one step
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Waypoints
pub const WAYPOINT_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 0.3, 0.09); // 1.0 x 0.6 x 0.18 panel
pub const WAYPOINT_YAW_JITTER: f32 = 0.2; // radians, either side of facing the camera
pub const WAYPOINT_SATURATION: f32 = 0.8;
pub const WAYPOINT_LIGHTNESS: f32 = 0.55;
pub const HOVER_SCALE: f32 = 1.06;
pub const HOVER_EMISSIVE_LEVEL: f32 = 0x22 as f32 / 255.0; // #222222
pub const HOVER_EMISSIVE_INTENSITY: f32 = 0.2;
pub const HOVER_EMISSIVE: [f32; 3] = [HOVER_EMISSIVE_LEVEL * HOVER_EMISSIVE_INTENSITY; 3];

// Labels
pub const LABEL_SIZE: Vec2 = Vec2::new(1.6, 0.5);
pub const LABEL_Z_OFFSET: f32 = 0.15;

// Particle field
pub const PARTICLE_COUNT: usize = 250;
pub const PARTICLE_EXTENT: Vec3 = Vec3::new(30.0, 8.0, 30.0);

// Decorative motion, in scene-time units (0.6 units per second == 0.01 per 60 Hz frame)
pub const SCENE_TIME_RATE: f32 = 0.6;
pub const PARTICLE_SPIN_RATE: f32 = 0.02;
pub const GROUP_SWAY_AMPLITUDE: f32 = 0.12;
pub const GROUP_SWAY_RATE: f32 = 0.12;
pub const GROUP_BOB_AMPLITUDE: f32 = 0.06;
pub const GROUP_BOB_RATE: f32 = 0.5;

// Viewport
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Seed for particle placement and waypoint yaw jitter
pub const SCENE_SEED: u64 = 42;
