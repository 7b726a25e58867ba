use std::num::NonZeroU32;
use std::path::Path;

use glam::Vec3;
use glium::{Display, Surface};
use glutin::{
    config::{Config, ConfigTemplateBuilder},
    context::ContextAttributesBuilder,
    display::GetGlDisplay,
    prelude::*,
    surface::{SurfaceAttributesBuilder, WindowSurface},
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
    window::{CursorGrabMode, Window, WindowBuilder},
};

use crate::{
    camera::Camera,
    config::{Settings, TITLE},
    error::Error,
    frame::{Demo, FrameClock, FrameContext, FrameTime},
    input::InputState,
};

const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Depth bits requested for the default framebuffer; the demos depth-test every draw.
const DEPTH_BITS: u8 = 24;

/// Opens the window, builds the demo against its GL context and renders until the
/// window is closed or Escape is pressed.
///
/// `build` runs once the context exists; every GPU resource it creates is dropped
/// together with the demo when the loop ends.
pub fn run<D, B>(settings: &Settings, build: B) -> Result<(), Error>
where
    D: Demo,
    B: FnOnce(&Display<WindowSurface>, &Path) -> Result<D, Error>,
{
    let event_loop = EventLoopBuilder::new().build()?;
    let (window, display) = create_window(&event_loop, settings)?;
    log::info!(
        "opened {}x{} window, assets from {}",
        settings.width,
        settings.height,
        settings.assets.display()
    );

    let mut input = InputState::new(settings.width, settings.height);
    if !settings.no_grab && capture_cursor(&window) {
        input.capture_pointer();
    }

    let mut demo = build(&display, &settings.assets)?;
    let mut camera = Camera::new(START_POSITION);
    let mut clock = FrameClock::new();
    let mut failure = None;

    event_loop.run(|event, window_target| {
        match event {
            Event::WindowEvent { event, .. } => {
                input.handle_event(&event);
                if input.exit_requested() {
                    window_target.exit();
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => window_target.exit(),

                    WindowEvent::RedrawRequested => {
                        let time = clock.tick();
                        input.apply_to(&mut camera, time.delta);
                        input.end_frame();

                        if let Err(err) = render(&display, &mut demo, &camera, time) {
                            log::error!("{err}");
                            failure = Some(err);
                            window_target.exit();
                        }
                    }

                    WindowEvent::Resized(size) => {
                        log::debug!("resized to {}x{}", size.width, size.height);
                        display.resize(size.into());
                    }
                    _ => (),
                }
            }
            Event::DeviceEvent { event, .. } => input.handle_device_event(&event),
            // keep rendering continuously
            Event::AboutToWait => window.request_redraw(),
            _ => (),
        };
    })?;

    failure.map_or(Ok(()), Err)
}

#[allow(clippy::cast_precision_loss)]
fn render<D: Demo>(
    display: &Display<WindowSurface>,
    demo: &mut D,
    camera: &Camera,
    time: FrameTime,
) -> Result<(), Error> {
    let mut target = display.draw();
    let (width, height) = target.get_dimensions();

    // minimised: nothing to draw into, but the frame still has to be finished
    if width == 0 || height == 0 {
        return target.finish().map_err(Error::from);
    }

    target.clear_color_and_depth(demo.clear_color(), 1.0);
    let frame = FrameContext {
        camera,
        time,
        aspect: width as f32 / height as f32,
    };
    let drawn = demo.draw(&mut target, &frame);
    let finished = target.finish();
    drawn?;
    finished.map_err(Error::from)
}

fn create_window(
    event_loop: &EventLoop<()>,
    settings: &Settings,
) -> Result<(Window, Display<WindowSurface>), Error> {
    let window_builder = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(PhysicalSize::new(settings.width, settings.height));
    let template = ConfigTemplateBuilder::new().with_depth_size(DEPTH_BITS);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_builder(Some(window_builder))
        .build(event_loop, template, pick_config)
        .map_err(|err| Error::Window(format!("no usable GL config: {err}")))?;
    let window = window.ok_or_else(|| Error::Window("window was not created".into()))?;
    log::debug!(
        "GL config: {} depth bits, {} samples",
        gl_config.depth_size(),
        gl_config.num_samples()
    );

    let (width, height): (u32, u32) = window.inner_size().into();
    let (width, height) = NonZeroU32::new(width)
        .zip(NonZeroU32::new(height))
        .ok_or_else(|| Error::Window(format!("window has no area ({width}x{height})")))?;
    let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        window.raw_window_handle(),
        width,
        height,
    );
    let context_attributes =
        ContextAttributesBuilder::new().build(Some(window.raw_window_handle()));

    let gl_display = gl_config.display();
    // SAFETY: the handle belongs to `window`, which outlives the surface and context
    let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
        .map_err(|err| Error::Window(format!("could not create surface: {err}")))?;
    let context = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
        .map_err(|err| Error::Window(format!("could not create GL context: {err}")))?
        .make_current(&surface)
        .map_err(|err| Error::Window(format!("could not make context current: {err}")))?;

    let display = Display::from_context_surface(context, surface)
        .map_err(|err| Error::Window(err.to_string()))?;
    Ok((window, display))
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| {
            if prefers(
                (config.depth_size(), config.num_samples()),
                (best.depth_size(), best.num_samples()),
            ) {
                config
            } else {
                best
            }
        })
        // glutin reports an error rather than calling the picker with no configs
        .expect("glutin offered no GL configs")
}

/// Whether a config with `(depth bits, samples)` beats the current pick: enough
/// depth first, then the fewest samples.
fn prefers(candidate: (u8, u8), best: (u8, u8)) -> bool {
    let deep = |(depth, _): (u8, u8)| depth >= DEPTH_BITS;
    match (deep(candidate), deep(best)) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.1 < best.1,
    }
}

/// Locks the cursor, or confines it where locking is unsupported, and hides it.
/// Returns whether mouse look should switch to relative motion.
fn capture_cursor(window: &Window) -> bool {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    match grabbed {
        Ok(()) => {
            window.set_cursor_visible(false);
            true
        }
        Err(err) => {
            log::warn!("could not capture cursor: {err}");
            false
        }
    }
}
