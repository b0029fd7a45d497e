//! Presentation: read-only rendering of a [`Game`] onto any [`Canvas`]

use glam::Vec2;

use crate::{Canvas, Color, Game, Phase, Side};

pub const START_PROMPT: &str = "Press SPACE To Start!";
pub const CONTINUE_PROMPT: &str = "Press SPACE To Continue!";
pub const PLAYER_SCORED: &str = "Player Scored!";
pub const OPPONENT_SCORED: &str = "Opponent Scored!";

const PROMPT_Y: f32 = 40.0;
const SCORE_Y: f32 = 50.0;
const MESSAGE_Y: f32 = 80.0;

/// Draw the current frame
pub fn draw(game: &Game, canvas: &mut impl Canvas) {
    let config = &game.config;

    canvas.clear(Color::BLACK);

    if let Some(paddle) = game.paddle(Side::Left) {
        canvas.draw_rect(config.paddle_rect(Side::Left, paddle.y), Color::GREEN);
    }
    if let Some(paddle) = game.paddle(Side::Right) {
        canvas.draw_rect(config.paddle_rect(Side::Right, paddle.y), Color::YELLOW);
    }
    if let Some(ball) = game.ball() {
        canvas.draw_circle(ball.pos, config.ball_radius, ball.color);
    }

    match game.phase {
        Phase::Start => {
            if game.start_blink.visible {
                draw_centered(
                    canvas,
                    START_PROMPT,
                    config.arena_width * 0.5,
                    PROMPT_Y,
                    config.text_size,
                    Color::WHITE,
                );
            }
        }
        Phase::Play => {}
        Phase::Score => {
            let message = if game.left_scored_last {
                PLAYER_SCORED
            } else {
                OPPONENT_SCORED
            };
            draw_centered(
                canvas,
                message,
                config.arena_width * 0.5,
                MESSAGE_Y,
                config.text_size,
                Color::WHITE,
            );

            let left = game.score.left.to_string();
            let right = game.score.right.to_string();
            draw_centered(
                canvas,
                &left,
                config.arena_width * 0.25,
                SCORE_Y,
                config.score_size,
                Color::GREEN,
            );
            draw_centered(
                canvas,
                &right,
                config.arena_width * 0.75,
                SCORE_Y,
                config.score_size,
                Color::YELLOW,
            );

            if game.score_blink.visible {
                draw_centered(
                    canvas,
                    CONTINUE_PROMPT,
                    config.arena_width * 0.5,
                    PROMPT_Y,
                    config.text_size,
                    Color::WHITE,
                );
            }
        }
    }
}

fn draw_centered(
    canvas: &mut impl Canvas,
    text: &str,
    center_x: f32,
    y: f32,
    size: f32,
    color: Color,
) {
    let half_width = canvas.measure_text(text, size) * 0.5;
    canvas.draw_text(text, Vec2::new(center_x - half_width, y), size, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aabb, Ball, InputState};

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear(Color),
        Rect(Aabb, Color),
        Circle(Vec2, f32, Color),
        Text(String, Vec2, f32, Color),
    }

    /// Records draw calls; every glyph is `size / 2` wide
    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Text(s, ..) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn text(&self, wanted: &str) -> Option<&Cmd> {
            self.cmds
                .iter()
                .find(|c| matches!(c, Cmd::Text(s, ..) if s == wanted))
        }
    }

    impl Canvas for Recorder {
        fn clear(&mut self, color: Color) {
            self.cmds.push(Cmd::Clear(color));
        }

        fn draw_rect(&mut self, rect: Aabb, color: Color) {
            self.cmds.push(Cmd::Rect(rect, color));
        }

        fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.cmds.push(Cmd::Circle(center, radius, color));
        }

        fn measure_text(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size * 0.5
        }

        fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
            self.cmds.push(Cmd::Text(text.to_string(), pos, size, color));
        }
    }

    fn enter_score(game: &mut Game, x: f32, vx: f32) {
        game.update(
            &InputState {
                start: true,
                ..InputState::new()
            },
            0.016,
        );
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(x, 270.0);
            ball.vel = Vec2::new(vx, 8.0);
        }
        game.update(&InputState::new(), 0.016);
        assert_eq!(game.phase, Phase::Score);
    }

    #[test]
    fn test_shapes_drawn_in_order() {
        let game = Game::default();
        let mut canvas = Recorder::default();

        draw(&game, &mut canvas);

        let config = &game.config;
        let y = config.paddle_spawn_y();
        assert_eq!(canvas.cmds[0], Cmd::Clear(Color::BLACK));
        assert_eq!(canvas.cmds[1], Cmd::Rect(config.paddle_rect(Side::Left, y), Color::GREEN));
        assert_eq!(canvas.cmds[2], Cmd::Rect(config.paddle_rect(Side::Right, y), Color::YELLOW));
        assert_eq!(canvas.cmds[3], Cmd::Circle(config.center(), 20.0, Color::BLUE));
    }

    #[test]
    fn test_start_prompt_centred_when_visible() {
        let game = Game::default();
        let mut canvas = Recorder::default();

        draw(&game, &mut canvas);

        // 21 glyphs * 10px = 210px wide, centred on x = 480
        assert_eq!(
            canvas.text(START_PROMPT),
            Some(&Cmd::Text(START_PROMPT.to_string(), Vec2::new(375.0, 40.0), 20.0, Color::WHITE))
        );
    }

    #[test]
    fn test_start_prompt_hidden_when_blinked_off() {
        let mut game = Game::default();
        game.start_blink.visible = false;
        let mut canvas = Recorder::default();

        draw(&game, &mut canvas);

        assert!(canvas.texts().is_empty());
        assert_eq!(canvas.cmds.len(), 4);
    }

    #[test]
    fn test_play_draws_no_text() {
        let mut game = Game::default();
        game.update(
            &InputState {
                start: true,
                ..InputState::new()
            },
            0.016,
        );
        let mut canvas = Recorder::default();

        draw(&game, &mut canvas);

        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn test_score_screen_after_player_point() {
        let mut game = Game::default();
        enter_score(&mut game, 959.0, 8.0);
        let mut canvas = Recorder::default();

        draw(&game, &mut canvas);

        assert_eq!(canvas.texts(), vec![PLAYER_SCORED, "1", "0", CONTINUE_PROMPT]);
        // Left score centred on a quarter of the width, right on three quarters
        assert_eq!(
            canvas.text("1"),
            Some(&Cmd::Text("1".to_string(), Vec2::new(230.0, 50.0), 40.0, Color::GREEN))
        );
        assert_eq!(
            canvas.text("0"),
            Some(&Cmd::Text("0".to_string(), Vec2::new(710.0, 50.0), 40.0, Color::YELLOW))
        );
    }

    #[test]
    fn test_score_screen_after_opponent_point_blinked_off() {
        let mut game = Game::default();
        enter_score(&mut game, 4.0, -8.0);
        game.score_blink.visible = false;
        let mut canvas = Recorder::default();

        draw(&game, &mut canvas);

        assert_eq!(canvas.texts(), vec![OPPONENT_SCORED, "0", "1"]);
    }
}
