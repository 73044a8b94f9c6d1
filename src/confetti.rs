//! Confetti bursts rendered as fixed-position `div`s.
//!
//! Each burst runs its own `requestAnimationFrame` loop. Finished particles
//! are removed from the document on the frame they finish, and the loop stops
//! rescheduling once the burst is empty.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, Window};

use crate::config::PageConfig;
use crate::consts::CONFETTI_SIZE_PX;
use crate::dom::{Listener, Mounted, body, query_all, report, set_style};
use crate::error::LandingError;
use crate::particle::{Burst, FrameClock, Particle, emit};

const NAME: &str = "confetti";
const CTA_NAME: &str = "cta-confetti";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Confetti emitter shared by the CTA trigger and the form handlers.
#[derive(Clone)]
pub struct Confetti {
    window: Window,
    document: Document,
    body: HtmlElement,
    rng: Rc<RefCell<SmallRng>>,
    per_burst: usize,
}

impl Confetti {
    pub fn new(window: &Window, document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        Ok(Self {
            window: window.clone(),
            document: document.clone(),
            body: body(document, NAME)?,
            rng: Rc::new(RefCell::new(SmallRng::seed_from_u64(browser_seed()))),
            per_burst: config.confetti_per_burst,
        })
    }

    /// Launch one burst from client coordinates `(x, y)`.
    pub fn emit(&self, x: f64, y: f64) -> Result<(), LandingError> {
        let particles = emit(&mut *self.rng.borrow_mut(), x, y, self.per_burst);
        let mut live = Vec::with_capacity(particles.len());
        for particle in particles {
            let element = self.spawn_element(&particle)?;
            live.push((particle, element));
        }
        self.animate(Burst::new(live))
    }

    fn spawn_element(&self, particle: &Particle) -> Result<HtmlElement, LandingError> {
        let element = self.document.create_element("div")?.unchecked_into::<HtmlElement>();
        let size = format!("{CONFETTI_SIZE_PX}px");
        set_style(&element, "position", "fixed")?;
        set_style(&element, "width", &size)?;
        set_style(&element, "height", &size)?;
        set_style(&element, "background-color", particle.color)?;
        set_style(&element, "border-radius", particle.shape.border_radius())?;
        set_style(&element, "pointer-events", "none")?;
        set_style(&element, "z-index", "9999")?;
        place(&element, particle)?;
        self.body.append_child(&element)?;
        Ok(element)
    }

    fn animate(&self, burst: Burst<HtmlElement>) -> Result<(), LandingError> {
        let window = self.window.clone();
        let state = RefCell::new((burst, FrameClock::default()));
        let holder: FrameCallback = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);

        let cb = Closure::wrap(Box::new(move |now_ms: f64| {
            let done = {
                let mut guard = state.borrow_mut();
                let (burst, clock) = &mut *guard;
                let dt = clock.tick(now_ms);
                for finished in burst.advance(dt, viewport_height(&window)) {
                    finished.remove();
                }
                for (particle, element) in burst.iter() {
                    report(NAME, place(element, particle));
                }
                burst.is_empty()
            };

            if done {
                holder_for_cb.borrow_mut().take();
                return;
            }
            if let Some(cb) = holder_for_cb.borrow().as_ref() {
                if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::warn!("{NAME}: frame request failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut(f64)>);

        self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        *holder.borrow_mut() = Some(cb);
        Ok(())
    }
}

fn place(element: &HtmlElement, particle: &Particle) -> Result<(), LandingError> {
    set_style(element, "left", &format!("{}px", particle.x))?;
    set_style(element, "top", &format!("{}px", particle.y))?;
    set_style(element, "opacity", &particle.opacity.to_string())
}

fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(height) => height.as_f64().unwrap_or(f64::INFINITY),
        Err(_) => f64::INFINITY,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// Client-space center of an element's bounding box.
pub fn element_center(element: &HtmlElement) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)
}

/// One burst from the center of any pricing CTA when it is clicked.
pub struct CtaConfetti {
    _clicks: Vec<Listener>,
}

impl CtaConfetti {
    pub fn mount(document: &Document, config: &PageConfig, confetti: &Confetti) -> Result<Self, LandingError> {
        let mut clicks = Vec::new();
        for cta in query_all(document, &config.pricing_cta_selector)? {
            let confetti = confetti.clone();
            let target = cta.clone();
            clicks.push(Listener::new(&cta, "click", move |_| {
                let (x, y) = element_center(&target);
                report(CTA_NAME, confetti.emit(x, y));
            })?);
        }
        log::debug!("{CTA_NAME}: {} triggers", clicks.len());
        Ok(Self { _clicks: clicks })
    }
}

impl Mounted for CtaConfetti {
    fn name(&self) -> &'static str {
        CTA_NAME
    }

    fn dispose(self: Box<Self>) {}
}
