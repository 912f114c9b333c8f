// Shared game and layout tuning constants used by the core and the web frontend.

// Scene layout (marker units: the tracked marker is 1.0 wide)
pub const BASE_SYSTEM_SCALE: f32 = 0.9; // root scale before zoom is applied
pub const PLANET_MESH_SCALE: f32 = 1.35; // catalog render radius -> mesh radius
pub const SUN_RADIUS: f32 = 0.09;
pub const SUN_SCALE: f32 = 0.84;
pub const BASE_ORBIT_SPEED_SCALE: f32 = 0.25; // angular speed multiplier shared by all bodies
pub const ROOT_OFFSET: [f32; 3] = [0.0, 0.004, 0.055]; // system origin relative to the marker

// Bodies used by the "fit to marker" zoom and the fraction of the marker they span
pub const CORE_BODY_IDS: [&str; 4] = ["mercurio", "venus", "tierra", "marte"];
pub const CORE_TARGET_WIDTH: f32 = 0.34;

// Slider ranges as [min, max, initial, step]
pub const ZOOM_RANGE: [f32; 4] = [0.1, 8.0, 1.5, 0.01];
pub const ORBIT_RANGE: [f32; 4] = [2.0, 5.0, 2.5, 0.05];
pub const PLANET_RANGE: [f32; 4] = [0.5, 3.0, 1.0, 0.05];
pub const SPEED_RANGE: [f32; 4] = [0.0, 3.0, 0.7, 0.05];
pub const ROTATION_X_RANGE: [f32; 4] = [-180.0, 180.0, -5.0, 1.0];
pub const ROTATION_Y_RANGE: [f32; 4] = [-180.0, 180.0, 0.0, 1.0];
pub const ROTATION_Z_RANGE: [f32; 4] = [-180.0, 180.0, 0.0, 1.0];

// Matching
pub const SNAP_DISTANCE_PX: f32 = 100.0; // max drop distance from an anchor
pub const DERANGEMENT_ATTEMPTS: usize = 120;

// Completion
pub const COMPLETION_COUNTDOWN_SECS: u32 = 5;

// Label placement
pub const DEFAULT_LABEL_OFFSET_PX: f32 = 38.0;
pub const LABEL_STACK_SPACING_PX: f32 = 34.0;

// Confetti
pub const CONFETTI_WIDTH_FACTOR: f32 = 0.16; // pieces per CSS pixel of viewport width
pub const CONFETTI_MIN_PIECES: usize = 90;
pub const CONFETTI_MAX_PIECES: usize = 180;
pub const CONFETTI_DENSITY_FACTOR: f32 = 2.5;
pub const CONFETTI_MAX_STEP_SEC: f32 = 0.033;
pub const CONFETTI_COLORS: [&str; 6] = [
    "#ffde59", "#ff6b6b", "#4ecdc4", "#7f5af0", "#58a6ff", "#ff9f1c",
];

// Persistence
pub const GALLERY_KEY: &str = "av_nft_gallery_v2";
pub const PREFERENCE_MAX_AGE_DAYS: u32 = 180;
pub const REWARD_POOL_SIZE: usize = 10;

/// Image paths of the collectible reward pool.
pub fn default_reward_pool() -> Vec<String> {
    (1..=REWARD_POOL_SIZE)
        .map(|i| format!("/assets/nfts/NFT-SistemaSolar-{i}.png"))
        .collect()
}
