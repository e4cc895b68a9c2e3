/// Animation and widget tuning constants.
///
/// These express intended behavior (counts, ranges, clamp limits) and keep
/// magic numbers out of the update loops and wiring code.
// Ambient particle field
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_MAX_SPEED: f32 = 1.0;
pub const PARTICLE_VEL_RANGE: f32 = 0.3; // initial velocity per axis, +/-
pub const PARTICLE_JITTER: f32 = 0.03; // per-frame random force per axis, +/-
pub const PARTICLE_SIZE_MIN: f32 = 3.0;
pub const PARTICLE_SIZE_MAX: f32 = 8.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.4;
pub const PARTICLE_ALPHA_MAX: f32 = 0.6;

/// Store-theme palette shared by the field, the craft shapes and the trail.
pub const PALETTE: [[u8; 3]; 5] = [
    [245, 158, 11],  // amber-500
    [217, 119, 6],   // amber-600
    [146, 64, 14],   // amber-900
    [252, 211, 77],  // amber-300
    [254, 243, 199], // amber-100
];

// Decorative craft-element flow
pub const ELEMENT_COUNT: usize = 15;
pub const ELEMENT_VEL_RANGE: f32 = 0.5;
pub const ELEMENT_SIZE_MIN: f32 = 10.0;
pub const ELEMENT_SIZE_MAX: f32 = 30.0;
pub const ELEMENT_ROT_SPEED_RANGE: f32 = 0.01; // radians per frame, +/-
pub const SHAPE_ALPHA: f32 = 0.2;

// Cursor trail
pub const TRAIL_MAX_POINTS: usize = 10;
pub const TRAIL_ALPHA_INITIAL: f32 = 0.4;
pub const TRAIL_ALPHA_FADE_STEP: f32 = 0.02;
pub const TRAIL_SPEED_MAX: f32 = 100.0; // clamp for the speed-to-size mapping
pub const TRAIL_SIZE_MIN: f32 = 5.0;
pub const TRAIL_SIZE_MAX: f32 = 20.0;

// Frame pacing
pub const TARGET_FPS: f64 = 30.0;

// Testimonial slider: viewport breakpoints (CSS px) and slide widths (%)
pub const SLIDER_BREAKPOINT_LG: f32 = 1024.0;
pub const SLIDER_BREAKPOINT_MD: f32 = 768.0;
pub const SLIDE_WIDTH_LG: f32 = 33.33;
pub const SLIDE_WIDTH_MD: f32 = 50.0;
pub const SLIDE_WIDTH_SM: f32 = 100.0;
pub const SLIDER_AUTO_ADVANCE_MS: i32 = 5000;

// Scroll behavior
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0; // page offset before the button shows
pub const HERO_INTRO_DELAY_MS: i32 = 300;
