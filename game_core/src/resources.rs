/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Roll for a fast bounce with the given probability, clamped to [0, 1]
    pub fn roll_fast(&mut self, chance: f64) -> bool {
        use rand::Rng;
        let chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self.0.gen_bool(chance)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame.
///
/// Cleared at the start of every `Game::update`; callers read it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Flashing text state: toggles `visible` every time `elapsed` passes the interval
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    pub elapsed: f32,
    pub visible: bool,
}

impl Blink {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            visible: true,
        }
    }

    pub fn tick(&mut self, dt: f32, interval: f32) {
        self.elapsed += dt;
        if self.elapsed > interval {
            self.elapsed = 0.0;
            self.visible = !self.visible;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub start: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net paddle direction; holding both keys cancels out
    pub fn paddle_dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}
