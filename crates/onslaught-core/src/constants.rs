//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Playfield width in pixels.
pub const PLAYFIELD_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// --- Player ---

/// Player bounding size (pixels, square).
pub const PLAYER_SIZE: f64 = 40.0;

/// Player movement speed before boosts (px/s).
pub const PLAYER_BASE_SPEED: f64 = 240.0;

/// Maximum (and starting) player health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Damage taken on contact with an enemy.
pub const ENEMY_CONTACT_DAMAGE: i32 = 10;

/// Damage multiplier before boosts.
pub const BASE_DAMAGE_MULTIPLIER: f64 = 1.0;

// --- Enemies ---

/// Normal archetype: speed (px/s), health, size (px).
pub const ENEMY_NORMAL_SPEED: f64 = 120.0;
pub const ENEMY_NORMAL_HEALTH: i32 = 1;
pub const ENEMY_NORMAL_SIZE: f64 = 30.0;

/// Fast archetype: quicker but just as fragile, slightly smaller.
pub const ENEMY_FAST_SPEED: f64 = 210.0;
pub const ENEMY_FAST_HEALTH: i32 = 1;
pub const ENEMY_FAST_SIZE: f64 = 24.0;

/// Tank archetype: slow, multi-hit, large.
pub const ENEMY_TANK_SPEED: f64 = 70.0;
pub const ENEMY_TANK_HEALTH: i32 = 3;
pub const ENEMY_TANK_SIZE: f64 = 44.0;

/// Archetype spawn weights: Normal 60%, Fast 30%, Tank 10%.
pub const ENEMY_WEIGHT_NORMAL: f64 = 0.6;
pub const ENEMY_WEIGHT_FAST: f64 = 0.3;

// --- Scoring ---

/// Score awarded for each enemy destroyed by a bullet.
pub const KILL_SCORE: u32 = 10;

// --- Waves ---

/// Enemies spawned per wave = wave number times this factor.
pub const ENEMIES_PER_WAVE: u32 = 5;

/// Interval between staggered spawns within a wave (seconds).
pub const SPAWN_STAGGER_SECS: f64 = 0.5;

/// Rest period after a wave's last spawn before the next wave begins (seconds).
pub const WAVE_REST_SECS: f64 = 5.0;

// --- Power-ups ---

/// Probability that a destroyed enemy drops a power-up.
pub const POWER_UP_DROP_CHANCE: f64 = 0.15;

/// Power-up bounding size (pixels, square).
pub const POWER_UP_SIZE: f64 = 20.0;

/// Health restored by a health power-up (clamped to max health).
pub const HEALTH_RESTORE_AMOUNT: i32 = 20;

/// Additive speed bonus per speed boost (px/s).
pub const SPEED_BOOST_AMOUNT: f64 = 80.0;

/// Additive damage-multiplier bonus per damage boost.
pub const DAMAGE_BOOST_AMOUNT: f64 = 0.5;

/// Duration of a speed or damage boost (seconds). Each pickup expires
/// independently.
pub const BOOST_DURATION_SECS: f64 = 5.0;

// --- Bullets ---

/// Bullet bounding size (pixels, square).
pub const BULLET_SIZE: f64 = 8.0;

// --- Particles ---

/// Number of particles in an explosion burst.
pub const EXPLOSION_PARTICLE_COUNT: usize = 12;

/// Particle speed range (px/s).
pub const PARTICLE_MIN_SPEED: f64 = 40.0;
pub const PARTICLE_MAX_SPEED: f64 = 160.0;

/// Particle lifetime range (seconds).
pub const PARTICLE_MIN_LIFETIME_SECS: f64 = 0.3;
pub const PARTICLE_MAX_LIFETIME_SECS: f64 = 0.8;

/// Particle bounding size (pixels, square).
pub const PARTICLE_SIZE: f64 = 4.0;
