use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, Window};

use super::canvas2d::{fit_canvas, Canvas2d};
use crate::config::{SceneConfig, CANVAS_ID, CONFIG_ATTRIBUTE};
use crate::driver::{Driver, FrameHost};
use crate::error::{BackdropError, Result};
use crate::scene::Scene;

// `FrameCallback` holds the animation-frame closure so that it can keep
// calling `request_animation_frame` with itself. Storing it inside an
// `Option` allows creating the `Closure` after the state it captures.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` bound to the single frame closure.
struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl FrameHost for AnimationFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| BackdropError::Js("frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(BackdropError::js)
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({handle}) failed: {err:?}");
        }
    }
}

/// Everything the page-level callbacks share.
struct Backdrop {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: SceneConfig,
    rng: SmallRng,
    scene: Scene,
    driver: Driver<i32>,
    frames: AnimationFrames,
}

impl Backdrop {
    fn resize(&mut self) -> Result<()> {
        let (width, height) = fit_canvas(&self.window, &self.canvas)?;
        self.scene.rebuild(width, height, &self.config, &mut self.rng)
    }

    fn on_frame(&mut self) -> Result<()> {
        if !self.driver.frame_fired() {
            return Ok(());
        }
        self.scene.frame(&mut Canvas2d(&self.ctx));
        self.driver.schedule_next(&mut self.frames)
    }

    fn resume(&mut self) -> Result<()> {
        log::debug!("resuming at frame {}", self.scene.clock().frame());
        self.driver.start(&mut self.frames)
    }

    fn pause(&mut self) {
        log::debug!("pausing at frame {}", self.scene.clock().frame());
        self.driver.stop(&mut self.frames);
    }
}

/// Start now, or once the document has been parsed.
pub fn boot() -> Result<()> {
    let window = window().ok_or(BackdropError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(BackdropError::MissingGlobal("document"))?;

    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", || {
            if let Err(err) = start() {
                log::error!("backdrop setup aborted: {err}");
            }
        })?;
        return Ok(());
    }
    start()
}

fn start() -> Result<()> {
    let window = window().ok_or(BackdropError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(BackdropError::MissingGlobal("document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| BackdropError::CanvasNotFound(CANVAS_ID.into()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BackdropError::NotACanvas(CANVAS_ID.into()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(BackdropError::js)?
        .ok_or(BackdropError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| BackdropError::ContextUnavailable)?;

    let config = load_config(&canvas);
    let seed = config
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * (1u64 << 53) as f64) as u64);
    let mut rng = SmallRng::seed_from_u64(seed);

    let (width, height) = fit_canvas(&window, &canvas)?;
    let scene = Scene::build(width, height, &config, &mut rng)?;

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let backdrop = Rc::new(RefCell::new(Backdrop {
        window: window.clone(),
        canvas,
        ctx,
        config,
        rng,
        scene,
        driver: Driver::new(),
        frames: AnimationFrames {
            window: window.clone(),
            callback: callback.clone(),
        },
    }));

    *callback.borrow_mut() = Some(Closure::wrap(Box::new({
        let backdrop = backdrop.clone();
        move || {
            let mut backdrop = backdrop.borrow_mut();
            if let Err(err) = backdrop.on_frame() {
                log::error!("animation stopped: {err}");
                backdrop.pause();
            }
        }
    }) as Box<dyn FnMut()>));

    listen(&window, "resize", {
        let backdrop = backdrop.clone();
        move || {
            if let Err(err) = backdrop.borrow_mut().resize() {
                log::warn!("resize ignored: {err}");
            }
        }
    })?;

    listen(&document, "visibilitychange", {
        let backdrop = backdrop.clone();
        let document = document.clone();
        move || {
            let mut backdrop = backdrop.borrow_mut();
            if document.hidden() {
                backdrop.pause();
            } else if let Err(err) = backdrop.resume() {
                log::error!("cannot resume animation: {err}");
            }
        }
    })?;

    backdrop.borrow_mut().resume()?;
    log::info!("backdrop running on #{CANVAS_ID} at {width}x{height} (seed {seed})");
    Ok(())
}

fn load_config(canvas: &HtmlCanvasElement) -> SceneConfig {
    let Some(text) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        return SceneConfig::default();
    };
    match SceneConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
            SceneConfig::default()
        }
    }
}

/// Attach `handler` for the page's lifetime.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(BackdropError::js)?;
    closure.forget();
    Ok(())
}
