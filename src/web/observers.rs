//! One `IntersectionObserver` per reveal group.
//!
//! Browsers without intersection support simply never reveal; the
//! constructor failure is logged and the group stays inert.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Host;
use crate::controllers::reveal::RevealKind;
use crate::effect::Target;

fn group_elements(host: &Host, kind: RevealKind) -> Vec<Element> {
    let elements = &host.elements;
    match kind {
        RevealKind::Reveal => elements.reveal_items.clone(),
        RevealKind::Skill => elements.skill_items.clone(),
        RevealKind::Section => elements.sections.clone(),
        RevealKind::LazyImage => elements.lazy_images.clone(),
    }
}

fn kind_of(target: &Target) -> Option<(RevealKind, usize)> {
    match target {
        Target::RevealItem(i) => Some((RevealKind::Reveal, *i)),
        Target::SkillItem(i) => Some((RevealKind::Skill, *i)),
        Target::Section(i) => Some((RevealKind::Section, *i)),
        Target::LazyImage(i) => Some((RevealKind::LazyImage, *i)),
        _ => None,
    }
}

/// Start observing every mounted reveal group.
pub(crate) fn observe(host: &Rc<Host>) {
    let groups: Vec<_> = host
        .page
        .borrow()
        .reveal_groups()
        .iter()
        .map(|group| (group.kind(), group.observer().clone()))
        .collect();

    for (kind, options) in groups {
        let elements = group_elements(host, kind);
        let weak = Rc::downgrade(host);
        let watched = elements.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let Some(host) = weak.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(index) = watched.iter().position(|el| *el == target) {
                        host.dispatch(|page| page.intersected(kind, index));
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("{kind:?} observer unavailable: {err:?}");
                continue;
            }
        };
        callback.forget();

        for el in &elements {
            observer.observe(el);
        }
        log::debug!("observing {} {kind:?} element(s)", elements.len());
        host.observers.borrow_mut().push((kind, observer));
    }
}

/// Stop observing an element that has fired.
pub(crate) fn unobserve(host: &Rc<Host>, target: &Target) {
    let Some((kind, index)) = kind_of(target) else {
        return;
    };
    let Some(el) = group_elements(host, kind).get(index).cloned() else {
        return;
    };
    if let Some((_, observer)) = host.observers.borrow().iter().find(|(k, _)| *k == kind) {
        observer.unobserve(&el);
    }
}
