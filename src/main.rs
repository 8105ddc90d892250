//! Range slider demo
//!
//! Opens a window hosting one slider. Drag the handle or click the track; every
//! value the slider publishes is logged and mirrored into the window title.
//!
//! Usage: `rg-slider-demo [config.toml]`, where the TOML file holds slider
//! attributes such as `step = 10` or `navigatorFrom`/`navigatorTo`.
//!
//! Controls:
//! - Drag the handle or click the track
//! - ESC: quit

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use rg_dom::{Document, ElementPath, Offset, Rect};
use rg_slider::{
    slider_markup, BoundValue, ConfigurationError, Slider, SliderConfig, SliderStyle,
    SETTLE_DELAY,
};
use rg_winit::InputState;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const SLIDER_OFFSET: Offset = Offset::new(50.0, 50.0);

struct App {
    window: Option<Arc<Window>>,
    document: Document,
    slider: Slider,
    bound: BoundValue,
    input: InputState,
    /// When to run the slider's ready phase, once the first layout happened
    ready_at: Option<Instant>,
    /// Bound value writes already shown in the title
    shown_writes: u64,
}

impl App {
    fn new(config: SliderConfig) -> Result<Self, ConfigurationError> {
        let markup = slider_markup(&config, &SliderStyle::default())?.with_offset(SLIDER_OFFSET);
        let mut document = Document::new(markup);

        let bound = BoundValue::new();
        bound.subscribe(|value| log::info!("bound value: {value}"));

        let slider = Slider::attach(&mut document, ElementPath::root(), config, bound.clone())?;
        log::info!(
            "slider attached: {:?}, navigation list {:?}",
            slider.navigator().mode(),
            slider.navigator().list()
        );

        Ok(Self {
            window: None,
            document,
            slider,
            bound,
            input: InputState::new(),
            ready_at: None,
            shown_writes: 0,
        })
    }

    fn layout(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let size = window.inner_size();
        self.document.compute_layout(Rect::from_min_size(
            [0.0, 0.0],
            [size.width as f32, size.height as f32],
        ));
    }

    fn update_title(&mut self) {
        if self.bound.writes() == self.shown_writes {
            return;
        }
        self.shown_writes = self.bound.writes();

        if let (Some(window), Some(value)) = (&self.window, self.bound.get()) {
            window.set_title(&format!(
                "rg-slider - {} ({:.1}%)",
                value,
                self.slider.position_percent()
            ));
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.slider.detach(&mut self.document);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("rg-slider")
            .with_inner_size(winit::dpi::LogicalSize::new(400, 150));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window);
        self.layout();

        // Let the first layout pass settle before the slider measures itself
        let deadline = Instant::now() + SETTLE_DELAY;
        self.ready_at = Some(deadline);
        event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.shutdown(event_loop),

            WindowEvent::Resized(_) => {
                self.layout();
                self.slider.refresh_metrics(&self.document);
            }

            _ => {
                let pointer_events = self.input.handle_event(&event);
                if pointer_events.is_empty() {
                    return;
                }
                for pointer_event in &pointer_events {
                    self.document.dispatch(pointer_event);
                }
                // The handle may have moved
                self.layout();
                self.update_title();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(deadline) = self.ready_at else {
            return;
        };
        if Instant::now() < deadline {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            return;
        }

        self.ready_at = None;
        self.slider.ready(&self.document);
        self.update_title();
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn load_config() -> Result<SliderConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading slider config from {path}");
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        }
        None => Ok(SliderConfig::default()
            .with_step(10)
            .with_show_navigator(true)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger (RUST_LOG=debug for listener and publish traces)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!("Starting range slider demo with {:?}", config);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
