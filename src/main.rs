//! Motionfield - procedural animated 3D scenes
//!
//! Opens a window, builds the configured scene, and animates it once per
//! display refresh.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use motionfield::config::AppConfig;
use motionfield::input::{InputAction, InputMapper};
use motionfield::scene::{build_scene, create_scheduler, scene_rng};
use motionfield::systems::{RenderSystem, ViewRig, WindowSystem};
use motionfield_core::{FrameScheduler, SceneError};

/// Main application state
struct App {
    config: AppConfig,
    scheduler: FrameScheduler,
    rig: ViewRig,
    /// Created on `resumed`
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, SceneError> {
        let mut rng = scene_rng(config.scene.rng_seed);
        let built = build_scene(&config, &mut rng)?;
        let rig = ViewRig::new(built.camera_position, &config.camera, &config.input);
        let scheduler = create_scheduler(&config, built.scene)?;

        Ok(Self {
            config,
            scheduler,
            rig,
            window: None,
            renderer: None,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let mut renderer = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = renderer.size();
        self.scheduler.on_resize(width, height, &mut self.rig, &mut renderer);

        // Start the frame loop; each frame requests the next
        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    self.scheduler.on_resize(
                        physical_size.width,
                        physical_size.height,
                        &mut self.rig,
                        renderer,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => event_loop.exit(),
                        Some(InputAction::ResetCamera) => self.rig.reset(),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.rig.controller.process_mouse_button(button, state);
            }

            // Button releases outside the window never arrive, so drop held drags
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                self.rig.controller.reset();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.rig.controller.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) {
                    if let Err(e) = self.scheduler.run_frame(window, &mut self.rig, renderer) {
                        log::error!("Fatal render error: {}", e);
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.rig.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Motionfield");
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    // Frames are driven by redraw requests, not polling
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;

    Ok(())
}
