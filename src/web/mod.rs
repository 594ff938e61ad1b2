//! Browser host.
//!
//! Scans the pre-rendered document, mounts a [`Page`], forwards DOM events
//! into it, and applies the effects it returns. Everything here needs a
//! browser; the behavior it drives lives in the core modules.

mod dom;
mod listeners;
mod observers;
mod raf;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, IntersectionObserver};

use crate::config::{CONFIG_ELEMENT_ID, Config};
use crate::consts::{BANNER_OWNER, BANNER_ROLE};
use crate::controllers::reveal::RevealKind;
use crate::effect::Effect;
use crate::page::Page;
use crate::timer::TimerKey;

use dom::Elements;
use raf::FrameLoop;

thread_local! {
    static HOST: RefCell<Option<Rc<Host>>> = const { RefCell::new(None) };
}

/// Page-lifetime owner of the dispatcher and the elements it drives.
pub(crate) struct Host {
    page: RefCell<Page>,
    elements: Elements,
    observers: RefCell<Vec<(RevealKind, IntersectionObserver)>>,
    frames: RefCell<Option<FrameLoop>>,
}

impl Host {
    /// Run one input against the page and apply what it returns.
    ///
    /// The page borrow ends before effects are applied, so handlers that
    /// fire synchronously from a DOM mutation can re-enter.
    pub(crate) fn dispatch(self: &Rc<Self>, input: impl FnOnce(&mut Page) -> Vec<Effect>) {
        let fx = {
            let mut page = self.page.borrow_mut();
            input(&mut page)
        };
        self.apply(fx);
    }

    fn apply(self: &Rc<Self>, fx: Vec<Effect>) {
        for effect in fx {
            match effect {
                Effect::StartTimer { key, delay_ms } => self.arm(key, delay_ms),
                Effect::CopyToClipboard { line, text } => self.copy(line, &text),
                Effect::Unobserve { target } => observers::unobserve(self, &target),
                other => self.elements.apply(&other),
            }
        }
    }

    fn arm(self: &Rc<Self>, key: TimerKey, delay_ms: u32) {
        let host = Rc::clone(self);
        Timeout::new(delay_ms, move || host.dispatch(|page| page.on_timer(key))).forget();
    }

    fn copy(self: &Rc<Self>, line: usize, text: &str) {
        // `navigator.clipboard` is absent outside secure contexts.
        let Some(clipboard) = self.elements.window.navigator().clipboard() else {
            log::debug!("clipboard unavailable; line {line} not copied");
            return;
        };
        let promise = clipboard.write_text(text);
        let host = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => host.dispatch(|page| page.copied(line)),
                Err(err) => log::debug!("clipboard write rejected: {err:?}"),
            }
        });
    }
}

fn read_config(document: &web_sys::Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::site_default();
    };
    match Config::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            Config::site_default()
        }
    }
}

fn preload(sources: &[String]) {
    for src in sources {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(src),
            Err(err) => log::debug!("preload {src} failed: {err:?}"),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Math.random() is in [0, 1); the product fits in u64"
)]
fn particle_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// Entry point, run once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }

    log::info!("✨ {BANNER_OWNER} ✨");
    log::info!("{BANNER_ROLE}");

    let Some(window) = web_sys::window() else {
        log::warn!("no window; interaction layer disabled");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; interaction layer disabled");
        return;
    };

    let config = read_config(&document);
    preload(&config.preload_images);

    let mounted = dom::scan(window, document, &config.theme.storage_key);
    for err in &mounted.errors {
        log::warn!("{err}");
    }

    let page = Page::new(config, mounted.blueprint, particle_seed());
    let host = Rc::new(Host {
        page: RefCell::new(page),
        elements: mounted.elements,
        observers: RefCell::new(Vec::new()),
        frames: RefCell::new(None),
    });

    host.dispatch(Page::attach);
    listeners::wire(&host);
    observers::observe(&host);

    let weak = Rc::downgrade(&host);
    let frames = FrameLoop::new(move || {
        if let Some(host) = weak.upgrade() {
            host.dispatch(Page::on_frame);
        }
    });
    frames.start();
    *host.frames.borrow_mut() = Some(frames);

    HOST.with(|slot| *slot.borrow_mut() = Some(host));
}

/// Tear the page down: release locks, stop the frame loop and observers.
pub(crate) fn shutdown() {
    let Some(host) = HOST.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    host.dispatch(Page::detach);
    if let Some(frames) = host.frames.borrow_mut().take() {
        frames.stop();
    }
    for (_, observer) in host.observers.borrow_mut().drain(..) {
        observer.disconnect();
    }
    log::info!("interaction layer detached");
}
