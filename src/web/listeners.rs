//! DOM event wiring.
//!
//! Every listener lives as long as the page, so closures are leaked with
//! `forget` once registered. Each holds a weak handle to the host and goes
//! quiet after shutdown.

use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

use super::Host;
use super::dom::{control_value, report};
use crate::controllers::cursor::Point;
use crate::controllers::decor::CardPointer;
use crate::controllers::form::Field;
use crate::page::Page;

fn bind(host: &Rc<Host>, target: &EventTarget, event: &'static str, handler: impl Fn(&Rc<Host>, Event) + 'static) {
    let weak: Weak<Host> = Rc::downgrade(host);
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Some(host) = weak.upgrade() {
            handler(&host, ev);
        }
    });
    report(event, target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()));
    closure.forget();
}

fn client_point(ev: &Event) -> Option<Point> {
    let mouse = ev.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>().map_or(0.0, |html| f64::from(html.offset_top()))
}

/// Register every listener the mounted controllers need.
pub(crate) fn wire(host: &Rc<Host>) {
    pointer(host);
    intro_and_nav(host);
    gallery(host);
    form(host);
    window(host);
    decor(host);
}

fn pointer(host: &Rc<Host>) {
    let el = &host.elements;
    if el.cursor.is_none() {
        return;
    }
    bind(host, &el.document, "mousemove", |host, ev| {
        if let Some(at) = client_point(&ev) {
            host.page.borrow_mut().pointer_moved(at);
        }
    });
    for target in &el.hover_targets {
        bind(host, target, "mouseenter", |host, _| host.dispatch(|page| page.hover(true)));
        bind(host, target, "mouseleave", |host, _| host.dispatch(|page| page.hover(false)));
    }
}

fn intro_and_nav(host: &Rc<Host>) {
    let el = &host.elements;
    if let Some(intro) = &el.intro {
        bind(host, &intro.enter, "click", |host, _| host.dispatch(|page| page.confirm_intro()));
    }
    if let Some(nav) = &el.nav {
        bind(host, &nav.toggle, "click", |host, _| host.dispatch(|page| page.toggle_menu()));
        for (index, link) in nav.links.iter().enumerate() {
            bind(host, link, "click", move |host, ev| {
                ev.prevent_default();
                host.dispatch(|page| page.nav_link_clicked(index));
            });
        }
    }
    for anchor in &el.anchors {
        let href = anchor.get_attribute("href").unwrap_or_default();
        bind(host, anchor, "click", move |host, ev| {
            let fx = host.page.borrow().anchor_clicked(&href);
            if !fx.is_empty() {
                ev.prevent_default();
                host.dispatch(|_| fx);
            }
        });
    }
    if let Some(toggle) = &el.theme_toggle {
        bind(host, toggle, "click", |host, _| host.dispatch(|page| page.toggle_theme()));
    }
}

fn gallery(host: &Rc<Host>) {
    let Some(gallery) = &host.elements.gallery else {
        return;
    };
    for (index, filter) in gallery.filters.iter().enumerate() {
        bind(host, filter, "click", move |host, _| host.dispatch(|page| page.select_filter(index)));
    }
    for (index, button) in gallery.view_buttons.iter().enumerate() {
        if let Some(button) = button {
            bind(host, button, "click", move |host, _| host.dispatch(|page| page.open_lightbox(index)));
        }
    }
    if let Some(lightbox) = &gallery.lightbox {
        if let Some(close) = &lightbox.close {
            bind(host, close, "click", |host, _| host.dispatch(|page| page.close_lightbox()));
        }
        let backdrop = lightbox.root.clone();
        bind(host, &lightbox.root, "click", move |host, ev| {
            let on_backdrop = ev.target().is_some_and(|t| t.dyn_ref::<Element>() == Some(&backdrop));
            if on_backdrop {
                host.dispatch(|page| page.close_lightbox());
            }
        });
    }
}

fn form(host: &Rc<Host>) {
    let Some(parts) = &host.elements.form else {
        return;
    };
    bind(host, &parts.form, "submit", |host, ev| {
        ev.prevent_default();
        let Some(parts) = &host.elements.form else {
            return;
        };
        let values = parts.values();
        host.dispatch(|page| page.submit(&values));
    });
    for field in Field::ALL {
        bind(host, parts.field(field), "input", move |host, ev| {
            let value = ev
                .target()
                .and_then(|t| t.dyn_ref::<Element>().map(control_value))
                .unwrap_or_default();
            host.dispatch(|page| page.input(field, &value));
        });
    }
}

fn window(host: &Rc<Host>) {
    let win = &host.elements.window;
    bind(host, win, "scroll", |host, _| {
        let el = &host.elements;
        let scroll_y = el.window.scroll_y().unwrap_or_default();
        let tops: Vec<f64> = el.sections.iter().map(offset_top).collect();
        host.dispatch(|page| page.on_scroll(scroll_y, &tops));
    });
    bind(host, win, "resize", |host, _| {
        let width = host.elements.window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or_default());
        host.dispatch(|page| page.on_resize(width));
    });
    // The module is instantiated asynchronously and `load` may already be past.
    if host.elements.document.ready_state() == "complete" {
        page_loaded(host);
    } else {
        bind(host, win, "load", |host, _| page_loaded(host));
    }
    bind(host, &host.elements.document, "keydown", |host, ev| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            host.dispatch(|page| page.on_key(&key));
        }
    });
    bind(host, win, "pagehide", |_, _| super::shutdown());
}

fn page_loaded(host: &Rc<Host>) {
    host.dispatch(Page::loaded);
    let Some(perf) = host.elements.window.performance() else {
        return;
    };
    // loadEventEnd is only populated after the load handlers return.
    Timeout::new(0, move || {
        let timing = perf.timing();
        let elapsed = timing.load_event_end() - timing.navigation_start();
        log::info!("page loaded in {elapsed}ms");
    })
    .forget();
}

fn decor(host: &Rc<Host>) {
    let el = &host.elements;
    if let Some(button) = &el.back_to_top {
        bind(host, button, "click", |host, _| host.dispatch(|page| page.back_to_top_clicked()));
    }
    if let Some(logo) = &el.logo {
        let logo_el = logo.clone();
        bind(host, logo, "click", move |host, _| {
            let rect = logo_el.get_bounding_client_rect();
            let center = Point::new(rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0);
            host.dispatch(|page| page.logo_clicked(center));
        });
    }
    for (index, card) in el.cards.iter().enumerate() {
        let card_el = card.clone();
        bind(host, card, "mousemove", move |host, ev| {
            let Some(client) = client_point(&ev) else {
                return;
            };
            let rect = card_el.get_bounding_client_rect();
            let at = CardPointer {
                x: client.x - rect.left(),
                y: client.y - rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            host.dispatch(|page| page.card_moved(index, at));
        });
        bind(host, card, "mouseleave", move |host, _| host.dispatch(|page| page.card_left(index)));
    }
    for (index, line) in el.contact_lines.iter().enumerate() {
        bind(host, line, "click", move |host, _| host.dispatch(|page| page.contact_clicked(index)));
    }
}
