//! WASM bridge for the particle field.
//!
//! Two ways to drive it from JS:
//!
//! - Host-driven: call `field_init`, forward input through the `field_pointer_*`,
//!   `field_touch_*` and `field_resize` exports, and call `field_tick(dt)` from
//!   your own `requestAnimationFrame` callback.
//! - Self-driven: call `field_start`, which installs the DOM listeners and its
//!   own frame loop. `field_stop` revokes the loop at teardown.

pub mod canvas;
pub mod runner;
pub mod theme;

pub use canvas::CanvasSurface;
pub use runner::FieldRunner;
pub use theme::DocumentTheme;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use particle_field::{CancelToken, FieldConfig, InputEvent, LoopState, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

struct WebField {
    runner: FieldRunner,
    surface: CanvasSurface,
    theme: DocumentTheme,
}

impl WebField {
    fn tick(&mut self, dt: f32) -> LoopState {
        self.runner.tick(dt, &mut self.surface, &self.theme)
    }
}

thread_local! {
    static FIELD: RefCell<Option<WebField>> = RefCell::new(None);
    static LISTENING: Cell<bool> = Cell::new(false);
}

/// True for the first caller only. DOM listeners are installed once per page;
/// they forward to whichever field is current.
fn claim_listeners() -> bool {
    LISTENING.with(|flag| !flag.replace(true))
}

/// Run `f` against the live field. Returns None before `field_init`.
fn with_field<R>(f: impl FnOnce(&mut WebField) -> R) -> Option<R> {
    FIELD.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn js_err(message: &str) -> JsValue {
    JsValue::from_str(message)
}

fn browser_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_err("missing window"))
}

fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| js_err("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| js_err("innerHeight is not a number"))?;
    Ok((width as f32, height as f32))
}

fn push_input(event: InputEvent) {
    if with_field(|f| f.runner.push_input(event)).is_none() {
        log::warn!("particle field: input before field_init ignored");
    }
}

/// Bind the field to `<canvas id=canvas_id>` sized to the window.
/// `config_json` may override any `FieldConfig` field.
#[wasm_bindgen]
pub fn field_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => FieldConfig::from_json(&json)
            .map_err(|e| js_err(&format!("invalid field config: {}", e)))?,
        None => FieldConfig::default(),
    };

    let window = browser_window()?;
    let document = window
        .document()
        .ok_or_else(|| js_err("missing document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_err(&format!("missing #{} element", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;

    let (width, height) = viewport_size(&window)?;
    let mut surface = CanvasSurface::new(canvas)?;
    surface.resize(width, height);

    let runner = FieldRunner::new(config, width, height, js_sys::Date::now() as u64);
    log::info!(
        "particle field: initialized {} particles for {}x{}",
        runner.particle_count(),
        width,
        height
    );

    let previous = FIELD.with(|cell| {
        cell.borrow_mut().replace(WebField {
            runner,
            surface,
            theme: DocumentTheme::new(document),
        })
    });
    if let Some(old) = previous {
        old.runner.cancel_token().cancel();
    }
    Ok(())
}

/// Advance one frame. `dt` is seconds since the previous frame.
/// Returns false once the field is stopped or was never initialized.
#[wasm_bindgen]
pub fn field_tick(dt: f32) -> bool {
    with_field(|f| f.tick(dt) == LoopState::Running).unwrap_or(false)
}

#[wasm_bindgen]
pub fn field_pointer_move(x: f32, y: f32) {
    push_input(InputEvent::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn field_pointer_leave() {
    push_input(InputEvent::PointerLeave);
}

#[wasm_bindgen]
pub fn field_touch_move(x: f32, y: f32) {
    push_input(InputEvent::TouchMove { x, y });
}

#[wasm_bindgen]
pub fn field_touch_end() {
    push_input(InputEvent::TouchEnd);
}

/// Report a new viewport size. Bursts are debounced before the field rebuilds.
#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    push_input(InputEvent::Resize { width, height });
}

#[wasm_bindgen]
pub fn field_particle_count() -> u32 {
    with_field(|f| f.runner.particle_count()).unwrap_or(0)
}

/// Stop rendering. Used at teardown; there is no resume.
#[wasm_bindgen]
pub fn field_stop() {
    with_field(|f| f.runner.cancel_token().cancel());
}

/// `field_init`, then wire mouse/touch/resize listeners and run a
/// requestAnimationFrame loop until `field_stop`.
#[wasm_bindgen]
pub fn field_start(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    field_init(canvas_id, config_json)?;

    let window = browser_window()?;
    if claim_listeners() {
        install_listeners(&window)?;
    }

    let token = with_field(|f| f.runner.cancel_token())
        .ok_or_else(|| js_err("particle field not initialized"))?;
    start_frame_loop(window, token)
}

fn install_listeners(window: &Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| js_err("missing document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| js_err("missing document element"))?;

    listen(window, "mousemove", |event| {
        if let Some(e) = event.dyn_ref::<MouseEvent>() {
            field_pointer_move(e.client_x() as f32, e.client_y() as f32);
        }
    })?;
    listen(&root, "mouseleave", |_| field_pointer_leave())?;
    listen(window, "touchmove", |event| {
        if let Some(e) = event.dyn_ref::<TouchEvent>() {
            let touches = e.touches();
            if touches.length() == 1 {
                if let Some(touch) = touches.get(0) {
                    field_touch_move(touch.client_x() as f32, touch.client_y() as f32);
                }
            }
        }
    })?;
    listen(window, "touchend", |_| field_touch_end())?;

    let resize_window = window.clone();
    listen(window, "resize", move |_| match viewport_size(&resize_window) {
        Ok((width, height)) => field_resize(width, height),
        Err(e) => log::warn!("particle field: could not read viewport size: {:?}", e),
    })?;
    Ok(())
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Self-rescheduling requestAnimationFrame loop. Each loop holds the token of
/// the field it was started for, so re-initializing stops the stale loop.
fn start_frame_loop(window: Window, token: CancelToken) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduled = frame.clone();
    let loop_window = window.clone();
    let mut last: Option<f64> = None;

    *scheduled.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let dt = last.map(|t| ((now - t) / 1000.0) as f32).unwrap_or(0.0);
        last = Some(now);

        let running = !token.is_cancelled()
            && with_field(|f| f.tick(dt) == LoopState::Running).unwrap_or(false);
        if !running {
            log::info!("particle field: frame loop stopped");
            let _ = frame.borrow_mut().take();
            return;
        }

        if let Some(callback) = frame.borrow().as_ref() {
            if let Err(e) = request_frame(&loop_window, callback) {
                log::warn!("particle field: requestAnimationFrame failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = scheduled.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| js_err("frame callback missing"))?;
    request_frame(&window, callback)?;
    Ok(())
}
