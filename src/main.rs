use std::time::Instant;

use anyhow::Context;

use glium::backend::Facade;
use glium::glutin;
use glium::glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::Surface;

use raytrace_demo::camera::Camera;
use raytrace_demo::config::{DemoConfig, WindowConfig};
use raytrace_demo::controller::CameraController;
use raytrace_demo::error::DemoError;
use raytrace_demo::input::InputState;
use raytrace_demo::raytracer::RayTracer;

fn create_display(
    window: &WindowConfig,
    events_loop: &EventLoop<()>,
) -> Result<glium::Display, DemoError> {
    let window_builder = glutin::window::WindowBuilder::new()
        .with_title(window.title.clone())
        .with_inner_size(glutin::dpi::LogicalSize::new(window.width, window.height));
    let context = glutin::ContextBuilder::new().with_vsync(true);
    let display = glium::Display::new(window_builder, context, events_loop)
        .map_err(|e| DemoError::Display(e.to_string()))?;
    log::info!(
        "Created {}x{} window with {}",
        window.width,
        window.height,
        display.get_context().get_opengl_version_string()
    );
    Ok(display)
}

fn draw_frame(
    display: &glium::Display,
    tracer: &RayTracer,
    camera: &mut Camera,
    clear_color: [f32; 4],
) -> Result<(), DemoError> {
    let mut target = display.draw();
    let (width, height) = target.get_dimensions();
    // Don't draw if the window is minimized
    if width == 0 || height == 0 {
        log::warn!("Skipping frame for zero-sized framebuffer");
        target.finish()?;
        return Ok(());
    }
    camera.update_viewport((width, height))?;
    let [r, g, b, a] = clear_color;
    target.clear_color(r, g, b, a);
    let drawn = tracer.render(&mut target, camera);
    // The frame has to be finished even if drawing failed
    target.finish()?;
    drawn
}

fn is_escape(event: &WindowEvent<'_>) -> bool {
    matches!(
        event,
        WindowEvent::KeyboardInput {
            input: KeyboardInput {
                state: ElementState::Pressed,
                virtual_keycode: Some(VirtualKeyCode::Escape),
                ..
            },
            ..
        }
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from_args().context("Failed to load config")?;
    let events_loop = EventLoop::new();
    let display = create_display(&config.window, &events_loop)?;
    let tracer = RayTracer::new(&display, &config.shaders)
        .context("Failed to set up the raytracing pass")?;

    let mut camera = config.initial_camera()?;
    let mut controller = CameraController::new(&config.camera);
    let mut input = InputState::new();
    let clear_color = config.window.clear_color;
    let mut last_frame = Instant::now();

    events_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => {
            input.update(&event);
            let close = matches!(event, WindowEvent::CloseRequested);
            if close || (input.focused && is_escape(&event)) {
                log::info!("Exit requested");
                *control_flow = ControlFlow::Exit;
            }
        }
        Event::MainEventsCleared => display.gl_window().window().request_redraw(),
        Event::RedrawRequested(_) => {
            let now = Instant::now();
            let dt = now - last_frame;
            last_frame = now;

            let result = controller
                .process_input(&mut camera, &input, dt)
                .and_then(|_| draw_frame(&display, &tracer, &mut camera, clear_color));
            input.reset_deltas();
            if let Err(e) = result {
                log::error!("{}", e);
                *control_flow = ControlFlow::Exit;
            }
        }
        Event::LoopDestroyed => log::info!("Shutting down"),
        _ => (),
    })
}
