/// Game tuning parameters for Pong
///
/// Distances are in window pixels, speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 960.0;
    pub const WINDOW_HEIGHT: f32 = 540.0;
    pub const WINDOW_TITLE: &'static str = "Pong";
    pub const TARGET_FPS: u32 = 60;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SPEED: f32 = 8.0;
    pub const BALL_SPEED_FAST: f32 = 16.0;
    pub const FAST_BOUNCE_CHANCE: f64 = 1.0 / 3.0;

    // Prompt flashing (seconds)
    pub const START_BLINK_INTERVAL: f32 = 0.5;
    pub const SCORE_BLINK_INTERVAL: f32 = 0.5;

    // Text
    pub const TEXT_SIZE: f32 = 20.0;
    pub const SCORE_SIZE: f32 = 40.0;

    // Clamp to keep blink timers sane after a stall
    pub const MAX_FRAME_DT: f32 = 0.25;
}
