// Scoring
pub const BASE_POINTS_PER_CORRECT: u32 = 100;
pub const HINT_POINT_PENALTY: u32 = 10;
pub const MIN_POINTS_PER_CORRECT: u32 = 50;

// Settlement
pub const XP_PER_STAR: u64 = 50;
pub const THREE_STAR_ACCURACY: f64 = 90.0;
pub const TWO_STAR_ACCURACY: f64 = 70.0;

// Levels
pub const TOTAL_LEVELS: u32 = 20;
pub const MAX_QUESTIONS_PER_LEVEL: usize = 10;
pub const FIRST_LEVEL: u32 = 1;

// Encouragement thresholds
pub const HOT_STREAK: u32 = 5;
pub const GOOD_STREAK: u32 = 3;

// Durable storage
pub const STORAGE_KEY: &str = "ecoquest-game-storage";
pub const STORAGE_DIR: &str = ".ecoquest";
pub const STORAGE_VERSION: u32 = 1;
