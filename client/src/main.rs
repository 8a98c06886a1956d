//! Desktop Pong client.
//!
//! Owns the window, the 800x600 framebuffer, audio output, and the frame
//! loop; all game rules live in `game_core`. Each redraw samples the
//! keyboard, advances the simulation by the real elapsed time, plays
//! whatever cues the step raised, and presents the frame.

mod audio;
mod draw;
mod error;
mod input;

use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

use hecs::World;
use ouroboros::self_referencing;
use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info, warn, Level};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use game_core::{
    create_ball, create_paddle, serve_ball, step, Ball, Events, GameRng, Paddle, PaddleSide,
    RoundPhase, Time,
};

use crate::audio::{AudioOutput, Cue};
use crate::draw::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::error::StartupError;
use crate::input::InputState;

/// Pixels borrows from the window, so the two live together behind
/// ouroboros. The window is shared through an Rc for the borrow.
#[self_referencing]
struct RenderContext {
    window: Rc<Window>,
    #[borrows(window)]
    #[covariant]
    pixels: Pixels<'this>,
}

fn create_render_context(window: &Rc<Window>) -> Result<RenderContext, pixels::Error> {
    RenderContextTryBuilder {
        window: Rc::clone(window),
        pixels_builder: |win: &Rc<Window>| {
            let size = win.inner_size();
            let surface = SurfaceTexture::new(size.width, size.height, win.as_ref());
            Pixels::new(FRAME_WIDTH, FRAME_HEIGHT, surface)
        },
    }
    .try_build()
}

struct App {
    render: Option<RenderContext>,
    audio: Option<AudioOutput>,
    init_error: Option<StartupError>,

    input: InputState,
    world: World,
    time: Time,
    round: RoundPhase,
    events: Events,
    rng: GameRng,
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        let mut world = World::new();
        create_paddle(&mut world, PaddleSide::Left);
        create_paddle(&mut world, PaddleSide::Right);
        create_ball(&mut world);

        let mut rng = GameRng::from_entropy();
        let opening_side = PaddleSide::random(&mut rng);
        serve_ball(&mut world, opening_side, true, &mut rng);
        info!("opening serve toward the {:?} paddle", opening_side);

        Self {
            render: None,
            audio: AudioOutput::open(),
            init_error: None,
            input: InputState::new(),
            world,
            time: Time::new(0.0, 0.0),
            round: RoundPhase::Live,
            events: Events::new(),
            rng,
            last_frame: Instant::now(),
        }
    }

    fn update_and_render(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        self.time.dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let controls = self.input.controls();
        step(
            &mut self.world,
            &mut self.time,
            &controls,
            &mut self.round,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(audio) = &self.audio {
            if self.events.ball_hit_wall {
                audio.play(Cue::WallBounce);
            }
            if self.events.ball_hit_paddle {
                audio.play(Cue::PaddleHit);
            }
            if self.events.point_scored {
                audio.play(Cue::PointScored);
            }
        }

        let world = &self.world;
        let round = &self.round;
        if let Some(render) = self.render.as_mut() {
            let result = render.with_pixels_mut(|pixels| {
                draw_world(pixels.frame_mut(), world, round);
                pixels.render()
            });
            if let Err(err) = result {
                error!("present frame: {err}");
                event_loop.exit();
            }
        }
    }

    fn handle_command_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::F11 => self.toggle_fullscreen(),
            #[cfg(feature = "cheats")]
            KeyCode::Digit1 => self.cheat_point(PaddleSide::Left),
            #[cfg(feature = "cheats")]
            KeyCode::Digit2 => self.cheat_point(PaddleSide::Right),
            _ => {}
        }
    }

    fn toggle_fullscreen(&self) {
        if let Some(render) = &self.render {
            let window = render.borrow_window();
            let fullscreen = match window.fullscreen() {
                Some(_) => None,
                None => Some(Fullscreen::Borderless(None)),
            };
            window.set_fullscreen(fullscreen);
        }
    }

    /// Hand a point to one side, for exercising the round-over path
    #[cfg(feature = "cheats")]
    fn cheat_point(&mut self, side: PaddleSide) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.score += 1;
                info!("cheat: {:?} paddle score bumped to {}", side, paddle.score);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render.is_some() {
            return;
        }

        // Created hidden; shown once the surface is ready
        let attrs = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(FRAME_WIDTH, FRAME_HEIGHT))
            .with_visible(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(err) => {
                self.init_error = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        match create_render_context(&window) {
            Ok(render) => {
                window.set_visible(true);
                window.request_redraw();
                self.render = Some(render);
                self.last_frame = Instant::now();
            }
            Err(err) => {
                self.init_error = Some(err.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window closed, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render) = self.render.as_mut() {
                    render.with_pixels_mut(|pixels| {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            warn!("resize surface: {err}");
                        }
                    });
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                self.input.handle_key(code, pressed);
                if pressed {
                    self.handle_command_key(code);
                }
            }
            WindowEvent::RedrawRequested => {
                self.update_and_render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(render) = &self.render {
            render.borrow_window().request_redraw();
        }
    }
}

fn draw_world(frame: &mut [u8], world: &World, round: &RoundPhase) {
    draw::clear(frame);
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        draw::draw_score(frame, paddle);
    }
    draw::draw_net(frame);
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        draw::draw_paddle(frame, paddle, round);
    }
    for (_entity, ball) in world.query::<&Ball>().iter() {
        draw::draw_ball(frame, ball);
    }
}

fn run() -> Result<(), StartupError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("pong v{}", env!("CARGO_PKG_VERSION"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("startup failed: {err}");
            ExitCode::FAILURE
        }
    }
}
