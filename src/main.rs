mod app;
mod config;
mod renderer;
mod scene;
mod screenshot;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{WindowAttributes, WindowId};

use config::VisConfig;

struct BlackHoleApp {
    app: Option<app::App>,
    config: VisConfig,
    /// When we last requested a redraw (throttles to the configured fps,
    /// keeps input responsive).
    last_redraw_request: Instant,
    init_error: Option<anyhow::Error>,
}

impl ApplicationHandler for BlackHoleApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() || self.init_error.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Black Hole Visualization")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.screen_width,
                self.config.screen_height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match app::App::new(window, self.config) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Handle CloseRequested before borrowing self.app, so we can drop it
        // while the window is still alive (avoids Vulkan surface semaphore panic).
        if matches!(&event, WindowEvent::CloseRequested) {
            self.app = None;
            event_loop.exit();
            return;
        }

        let Some(app) = &mut self.app else { return };

        match &event {
            WindowEvent::RedrawRequested => app.render(),
            WindowEvent::Resized(size) => app.resize(size.width, size.height),
            // Every other input event is ignored.
            _ => {}
        }
    }

    /// Request a redraw only when 1/fps has passed (throttle). We use Poll so
    /// the loop never blocks and the quit event is seen every iteration;
    /// without throttling we'd render at max rate.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &self.app {
            if Instant::now().duration_since(self.last_redraw_request)
                >= self.config.frame_interval()
            {
                self.last_redraw_request = Instant::now();
                app.request_redraw();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = VisConfig::default();

    if let Some(shot) = screenshot::parse_args(&config) {
        return screenshot::render_screenshot(&shot);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = BlackHoleApp {
        app: None,
        config,
        last_redraw_request: Instant::now(),
        init_error: None,
    };
    event_loop.run_app(&mut handler)?;

    match handler.init_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
