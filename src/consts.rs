//! Shared numeric constants for the landing page effects.

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset in pixels beyond which the nav bar carries its shadow.
pub const NAV_SHADOW_THRESHOLD_PX: f64 = 50.0;

/// Hero translation per scrolled pixel.
pub const HERO_PARALLAX_FACTOR: f64 = 0.5;

/// Height of the fixed nav subtracted from anchor scroll targets.
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Initial downward offset of a hidden section, in pixels.
pub const REVEAL_OFFSET_PX: f64 = 30.0;

/// Fraction of a section that must be visible to count as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; shrinks the viewport bottom by 100px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// CSS transition applied to every observed section.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// ── Ripple ──────────────────────────────────────────────────────

/// Lifetime of a ripple element before it is removed.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// ── Confetti ────────────────────────────────────────────────────

/// Particles spawned by a single burst.
pub const CONFETTI_PER_BURST: usize = 30;

/// Downward acceleration in px/s².
pub const CONFETTI_GRAVITY: f64 = 500.0;

/// Opacity lost per second (0.032 per nominal frame).
pub const CONFETTI_FADE_PER_SEC: f64 = 2.0;

/// Lower bound of the launch speed, px/s.
pub const CONFETTI_MIN_SPEED: f64 = 200.0;

/// Exclusive upper bound of the launch speed, px/s.
pub const CONFETTI_MAX_SPEED: f64 = 400.0;

/// Step used for the first frame of a burst, before any elapsed time exists.
pub const NOMINAL_FRAME_SECS: f64 = 0.016;

/// Longest step a single frame may advance the simulation.
pub const MAX_FRAME_SECS: f64 = 0.1;

/// Edge length of a rendered particle in pixels.
pub const CONFETTI_SIZE_PX: f64 = 10.0;

/// Particle palette.
pub const CONFETTI_COLORS: [&str; 3] = ["#6b9d5f", "#3d88b3", "#fcfcfc"];

// ── Forms ───────────────────────────────────────────────────────

/// Bursts fired after a successful enrollment.
pub const ENROLLMENT_BURSTS: u32 = 50;

/// Bursts fired after a successful contact submission.
pub const CONTACT_BURSTS: u32 = 30;

/// Delay between consecutive success bursts.
pub const BURST_STAGGER_MS: u32 = 20;

/// Upper bound accepted for a configured burst count.
pub const MAX_BURSTS: u32 = 500;

/// Upper bound accepted for a configured burst stagger.
pub const MAX_BURST_STAGGER_MS: u32 = 5_000;

/// Upper bound accepted for a configured particles-per-burst count.
pub const MAX_CONFETTI_PER_BURST: usize = 500;

// ── Easter egg ──────────────────────────────────────────────────

/// Duration of the body wiggle once the key sequence matches.
pub const WIGGLE_MS: u32 = 500;

// ── Cards ───────────────────────────────────────────────────────

/// Animation delay step between consecutive `.pulse` emojis.
pub const PULSE_STAGGER_MS: usize = 200;
