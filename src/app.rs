use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use winit::window::Window;

use crate::config::VisConfig;
use crate::renderer::framebuffer::Canvas;
use crate::renderer::pipeline::BlitPipeline;
use crate::scene::Scene;

pub struct App {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    pipeline: BlitPipeline,
    canvas: Canvas,
    scene: Scene,
    window: Arc<Window>,
}

impl App {
    /// Acquire the display resources and build the scene. Any failure here
    /// is fatal and reported to the caller before a single frame renders.
    pub fn new(window: Arc<Window>, config: VisConfig) -> Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create window surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no suitable GPU adapter found"))?;

        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("GPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // The canvas keeps the configured scene size; window resizes only
        // restretch the blit.
        let pipeline = BlitPipeline::new(
            &device,
            surface_format,
            config.screen_width,
            config.screen_height,
        );
        let canvas = Canvas::new(config.screen_width, config.screen_height);
        let scene = Scene::new(config, &mut rand::rng());

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            pipeline,
            canvas,
            scene,
            window,
        })
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn render(&mut self) {
        self.scene.advance(&mut self.canvas);
        self.pipeline.upload(&self.queue, self.canvas.bytes());

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(self.surface_config.width, self.surface_config.height);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        self.pipeline.blit(&mut encoder, &view);
        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Wait for all GPU work to finish before the surface is destroyed,
        // avoiding the Vulkan "SurfaceSemaphores still in use" panic.
        self.device.poll(wgpu::Maintain::Wait);
    }
}
