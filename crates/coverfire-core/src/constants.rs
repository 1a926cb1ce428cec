//! Simulation constants and tuning parameters.

/// Nominal host frame rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Progression ---

/// Seconds to travel between two cover stops.
pub const DEFAULT_MOVE_DURATION_SECS: f64 = 2.0;

/// Minimum number of rail stops: the pre-combat start and one combat stop.
pub const MIN_STOP_COUNT: usize = 2;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Post-hit invulnerability window.
pub const PLAYER_INVULNERABILITY_SECS: f64 = 0.1;

/// Horizontal radius of the player collider.
pub const PLAYER_COLLIDER_RADIUS: f64 = 0.4;

/// Collider center height above the rail while standing.
pub const PLAYER_CENTER_HEIGHT: f64 = 1.6;

/// Camera offset while standing.
pub const PLAYER_STAND_OFFSET: f64 = 0.0;

/// Camera offset while ducked in cover.
pub const PLAYER_DUCK_OFFSET: f64 = -1.0;

// --- Player weapon ---

pub const WEAPON_MAX_AMMO: u32 = 12;
pub const WEAPON_RELOAD_SECS: f64 = 2.0;
pub const WEAPON_DAMAGE: i32 = 20;
pub const SCORE_PER_HIT: u32 = 10;

// --- Encounter timer ---

pub const TIMER_TOTAL_SECS: f64 = 30.0;
pub const WAVE_CLEAR_BONUS_SECS: f64 = 10.0;

// --- Enemies ---

/// Delay between a combatant's death notification and its removal.
pub const COMBATANT_REMOVAL_GRACE_SECS: f64 = 0.1;

/// Smallest allowed miss displacement, so tiny colliders still miss cleanly.
pub const MISS_OFFSET_FLOOR: f64 = 0.1;

// --- Boss stage ---

/// Weak-point destructions needed to defeat a boss.
pub const BOSS_MAX_HEALTH: i32 = 10;

/// Boss damage dealt by each destroyed weak point.
pub const WEAK_POINT_BOSS_DAMAGE: i32 = 1;

pub const WEAK_POINT_MAX_HEALTH: i32 = 40;

/// Delay before a destroyed weak point grows back.
pub const WEAK_POINT_RESPAWN_SECS: f64 = 3.0;

// --- Projectiles ---

/// Failsafe projectile lifetime.
pub const PROJECTILE_LIFETIME_SECS: f64 = 10.0;

/// Projectile is removed once `dot(to_player, direction)` drops below this.
pub const PROJECTILE_PASSED_DOT: f64 = -0.1;

// --- Walker (baseline enemy) ---

pub const WALKER_MAX_HEALTH: i32 = 100;
/// Shots per second.
pub const WALKER_FIRE_RATE: f64 = 1.0;
pub const WALKER_PROJECTILE_SPEED: f64 = 5.0;
pub const WALKER_PROJECTILE_RADIUS: f64 = 0.1;
pub const WALKER_PROJECTILE_DAMAGE: i32 = 10;
/// Hit chance points gained per second while the player is visible.
pub const WALKER_HIT_CHANCE_GAIN: f64 = 10.0;
/// Hit chance points lost per second while the player is hidden.
pub const WALKER_HIT_CHANCE_LOSS: f64 = 20.0;
pub const WALKER_MAX_HIT_CHANCE: f64 = 90.0;
pub const WALKER_MUZZLE_HEIGHT: f64 = 1.5;
/// Padding beyond player + projectile radii that guarantees a miss clears.
pub const MISS_BUFFER: f64 = 0.5;
/// Maximum miss distance as a multiple of the minimum.
pub const MISS_RANGE_MULTIPLIER: f64 = 3.0;
