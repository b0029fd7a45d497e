//! Window and frame loop
//!
//! `App` owns the game, the window and the renderer. winit drives it through
//! `ApplicationHandler`; frames are paced to the target rate with
//! `ControlFlow::WaitUntil` and each redraw runs exactly one game update.

use std::sync::Arc;
use std::time::{Duration, Instant};

use game_core::{Events, Game, Params};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::canvas::DrawList;
use crate::error::RenderError;
use crate::input::{binding_for, Binding, Keyboard};
use crate::renderer::Renderer;

/// Counts paddle hits between points
#[derive(Debug, Default)]
struct Rally {
    hits: u32,
}

impl Rally {
    /// Fold in one frame's events; returns the rally length when a point ends it
    fn observe(&mut self, events: &Events) -> Option<u32> {
        if events.ball_hit_paddle {
            self.hits += 1;
        }
        if events.left_scored || events.right_scored {
            return Some(std::mem::take(&mut self.hits));
        }
        None
    }
}

struct Surface {
    window: Arc<Window>,
    renderer: Renderer,
}

pub struct App {
    game: Game,
    keyboard: Keyboard,
    surface: Option<Surface>,
    draw_list: DrawList,
    rally: Rally,
    frame_time: Duration,
    last_frame: Option<Instant>,
    next_frame: Instant,
    error: Option<RenderError>,
}

impl App {
    pub fn new(seed: u64) -> Self {
        Self {
            game: Game::new(game_core::Config::default(), seed),
            keyboard: Keyboard::new(),
            surface: None,
            draw_list: DrawList::new(),
            rally: Rally::default(),
            frame_time: Duration::from_secs_f64(1.0 / f64::from(Params::TARGET_FPS)),
            last_frame: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: RenderError) {
        tracing::error!(error = %err, "shutting down");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_surface(&self, event_loop: &ActiveEventLoop) -> Result<Surface, RenderError> {
        let config = &self.game.config;
        let attributes = Window::default_attributes()
            .with_title(Params::WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.arena_width, config.arena_height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let size = window.inner_size();
        tracing::info!(width = size.width, height = size.height, "window created");

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            config.arena_width,
            config.arena_height,
        ))?;

        Ok(Surface { window, renderer })
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if binding_for(code) == Some(Binding::Quit) {
                    tracing::info!("quit requested");
                    event_loop.exit();
                    return;
                }
                self.keyboard.key_down(code);
            }
            ElementState::Released => self.keyboard.key_up(code),
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(last) => (now - last).as_secs_f32().min(Params::MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_frame = Some(now);

        self.game.update(&self.keyboard.snapshot(), dt);
        if let Some(hits) = self.rally.observe(&self.game.events) {
            tracing::info!(hits, "rally over");
        }

        game_core::draw(&self.game, &mut self.draw_list);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(err) = surface.renderer.draw(&self.draw_list) {
            self.fail(event_loop, err);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        match self.create_surface(event_loop) {
            Ok(surface) => {
                surface.window.request_redraw();
                self.surface = Some(surface);
                self.next_frame = Instant::now();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::Focused(false) => self.keyboard.clear(),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_frame {
            surface.window.request_redraw();
            self.next_frame += self.frame_time;
            // Don't try to catch up after a stall
            if self.next_frame < now {
                self.next_frame = now + self.frame_time;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
