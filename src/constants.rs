// DOM ids, overlay copy and presentation timings for the web front-end.
// Gameplay tuning lives in `orbit_quiz_core::constants`.

// A-Frame scene and the tracked marker entity
pub const SCENE_ID: &str = "ar-scene";
pub const TARGET_ID: &str = "target-root";

// Overlay elements
pub const STATUS_PILL_ID: &str = "status-pill";
pub const PROGRESS_PILL_ID: &str = "progress-pill";
pub const LABELS_LAYER_ID: &str = "labels-layer";
pub const STAMP_LAYER_ID: &str = "stamp-layer";
pub const COMPLETION_MODAL_ID: &str = "completion-modal";
pub const COMPLETION_COUNTDOWN_ID: &str = "completion-countdown-value";
pub const COMPLETION_MESSAGE_ID: &str = "completion-message";
pub const REWARD_MODAL_ID: &str = "nft-modal";
pub const REWARD_FIGURE_ID: &str = "nft-figure";
pub const REWARD_IMAGE_ID: &str = "nft-image";
pub const ACTION_BUTTONS_ID: &str = "action-buttons";
pub const RETRY_BUTTON_ID: &str = "retry-btn";
pub const CLOSE_BUTTON_ID: &str = "close-btn";
pub const CONFETTI_CANVAS_ID: &str = "confetti-layer";

// Slider panels; each slider is `<name>-range` with a `<name>-value` readout
pub const ZOOM_CONTROLS_ID: &str = "zoom-controls";
pub const ROTATION_CONTROLS_ID: &str = "rotation-controls";
pub const SLIDER_RANGE_SUFFIX: &str = "-range";
pub const SLIDER_VALUE_SUFFIX: &str = "-value";

// CSS hooks
pub const LABEL_CLASS: &str = "planet-label";
pub const LABEL_SELECTOR: &str = ".planet-label";
pub const LABEL_ID_ATTR: &str = "data-id";
pub const DRAGGING_CLASS: &str = "dragging";
pub const LOCKED_CLASS: &str = "locked";
pub const INCORRECT_CLASS: &str = "incorrect";
pub const STATUS_LOST_CLASS: &str = "lost";
pub const STAMP_CLASS: &str = "stamp";
pub const STAMP_GLYPH: &str = "✓";

// Transient feedback lifetimes (ms)
pub const INCORRECT_FEEDBACK_MS: i32 = 320;
pub const STAMP_LIFETIME_MS: i32 = 750;

// A-Frame / MindAR events
pub const EVENT_TARGET_FOUND: &str = "targetFound";
pub const EVENT_TARGET_LOST: &str = "targetLost";
pub const EVENT_RENDER_START: &str = "renderstart";

// Renderer bridge (`orbitQuizRenderer.applyPose(root, bodies, sunRadius)`)
pub const BODY_POSE_STRIDE: usize = 4; // x, y, z, mesh radius

// Overlay copy
pub const STATUS_TRACKING: &str = "Marcador detectado. Arrastra cada nombre al planeta correcto.";
pub const STATUS_SCANNING: &str = "Buscando marcador. Apunta la cámara al marcador AR técnico.";
pub const SUCCESS_TEXT: &str = "Felicidades! Has completado la actividad. Ahora has ganado 1 NFT que será guardado en tu NFT gallery";
pub const RETURN_URL: &str = "https://xerticagrupoacererobdr.my.canva.site/c1fncgdhef8bcwqy";

// Cookies
pub const COOKIE_PATH: &str = "/";
pub const COOKIE_SAME_SITE: &str = "Lax";
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f64 = 0.25; // a backgrounded tab must not skip the countdown
