// World geometry (y grows downward, origin top-left)
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;
/// Distance between the craft's center and the surface when it rests on the ground.
pub const SURFACE_OFFSET: f64 = 20.0;
pub const LANDING_ZONE_WIDTH: f64 = 50.0;

// Craft physics bounding box (unrotated)
pub const CRAFT_WIDTH: f64 = 50.0;
pub const CRAFT_HEIGHT: f64 = 50.0;

// Physics tunables
pub const GRAVITY: f64 = 0.04;
pub const THRUST: f64 = 0.2;
pub const FUEL_CONSUMPTION: f64 = 1.0;
/// Degrees per unit of simulated time.
pub const ROTATION_SPEED: f64 = 2.0;
/// Simulated time advanced by one physics step.
pub const DT: f64 = 0.2;

// Landing rules
pub const MAX_LANDING_SPEED: f64 = 1.0;
pub const TERMINATION_EPSILON: f64 = 2.0;

// Initial flight conditions
pub const INIT_FUEL: f64 = 1000.0;
pub const INIT_X: f64 = 50.0;
pub const INIT_Y: f64 = 100.0;
pub const INIT_X_SPEED: f64 = 4.0;
pub const INIT_Y_SPEED: f64 = 0.0;
pub const INIT_HEADING: f64 = 90.0;

// Mass model reported in telemetry
pub const EMPTY_MASS: f64 = 500.0;
pub const FUEL_UNIT_MASS: f64 = 0.5;

// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS
/// Upper bound on wall-clock time fed to one session tick.
pub const MAX_FRAME_DT_MS: u64 = 100;

/// Physics steps a key press keeps its signal held (~200ms).
/// Bridges the gap between terminal key-repeat events.
pub const INPUT_HOLD_TICKS: u32 = 12;

// Data files
pub const DATA_DIR_NAME: &str = ".lunar-descent";
pub const RESULTS_FILE: &str = "results.txt";
pub const TELEMETRY_FILE: &str = "telemetry.json";
pub const LOG_FILE: &str = "lunar-descent.log";
