//! Document scan and effect application.
//!
//! [`scan`] looks every element group up once, fills the [`Blueprint`] the
//! core is mounted from, and keeps the elements so effects can be applied
//! by [`Target`] later. A group whose anchor element is absent is simply not
//! mounted; a group whose anchor exists but is missing a required part is
//! reported as a [`MountError`] and not mounted either.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::blueprint::{Blueprint, GalleryItemSpec, GallerySpec};
use crate::controllers::form::{Field, FormValues};
use crate::effect::{Effect, Target};
use crate::error::MountError;

pub(crate) mod selector {
    pub const CURSOR: &str = ".custom-cursor";
    pub const CURSOR_DOT: &str = ".custom-cursor-dot";
    pub const HOVER_TARGETS: &str = "a, button, .gallery-item";
    pub const INTRO: &str = ".intro-section";
    pub const INTRO_TITLE: &str = ".intro-title";
    pub const INTRO_ENTER: &str = ".enter-btn";
    pub const MAIN_CONTENT: &str = "#main-content";
    pub const NAVBAR: &str = ".navbar";
    pub const NAV_LINKS: &str = ".nav-link";
    pub const MOBILE_TOGGLE: &str = "#mobile-toggle";
    pub const NAV_MENU: &str = "#nav-menu";
    pub const SECTIONS: &str = ".section";
    pub const THEME_TOGGLE: &str = "#theme-toggle";
    pub const REVEAL: &str = "[data-reveal]";
    pub const SKILL_ITEMS: &str = ".skill-item";
    pub const SKILL_BAR: &str = ".skill-progress";
    pub const LAZY_IMAGES: &str = "img[data-src]";
    pub const FILTERS: &str = ".filter-btn";
    pub const GALLERY_ITEMS: &str = ".gallery-item";
    pub const VIEW_BUTTON: &str = ".view-btn";
    pub const LIGHTBOX: &str = "#lightbox";
    pub const LIGHTBOX_IMAGE: &str = "#lightbox-img";
    pub const LIGHTBOX_CLOSE: &str = ".lightbox-close";
    pub const FORM: &str = "#contact-form";
    pub const FORM_ERROR: &str = ".form-error";
    pub const FORM_SUCCESS: &str = ".form-success";
    pub const BACK_TO_TOP: &str = "#back-to-top";
    pub const PARALLAX: &str = ".profile-image-wrapper";
    pub const LOGO: &str = ".logo";
    pub const CARDS: &str = ".software-card, .education-card";
    pub const CONTACT_LINES: &str = ".contact-item p";
    pub const ANCHORS: &str = "a[href^=\"#\"]:not(.nav-link)";
}

const PARTICLE_SIZE: &str = "10px";
const PARTICLE_LAYER: &str = "10000";

/// Log a failed DOM call. DOM mutations are cosmetic; a failure never
/// stops the remaining effects.
pub(crate) fn report<T, E: Debug>(what: &str, result: Result<T, E>) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}

fn query(root: &Document, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("bad selector {selector}: {err:?}");
            None
        }
    }
}

fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("bad selector {selector}: {err:?}");
            None
        }
    }
}

fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("bad selector {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(|node| node.dyn_ref::<Element>().cloned()).collect()
}

fn require(
    found: Option<Element>,
    controller: &'static str,
    selector: &'static str,
    errors: &mut Vec<MountError>,
) -> Option<Element> {
    if found.is_none() {
        errors.push(MountError::MissingElement { controller, selector });
    }
    found
}

fn field_selector(field: Field) -> &'static str {
    match field {
        Field::Name => "#name",
        Field::Email => "#email",
        Field::Message => "#message",
    }
}

fn field_slot(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Message => 2,
    }
}

/// Current value of a form input or text area.
pub(crate) fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

#[derive(Debug)]
pub(crate) struct IntroParts {
    pub root: Element,
    pub title: Element,
    pub enter: Element,
    pub main_content: Element,
}

#[derive(Debug)]
pub(crate) struct NavParts {
    pub links: Vec<Element>,
    pub toggle: Element,
    pub menu: Element,
}

#[derive(Debug)]
pub(crate) struct LightboxParts {
    pub root: Element,
    pub image: Element,
    pub close: Option<Element>,
}

#[derive(Debug)]
pub(crate) struct GalleryParts {
    pub filters: Vec<Element>,
    pub items: Vec<Element>,
    pub view_buttons: Vec<Option<Element>>,
    pub lightbox: Option<LightboxParts>,
}

#[derive(Debug)]
pub(crate) struct FormParts {
    pub form: HtmlFormElement,
    pub fields: [Element; 3],
    pub errors: [Option<Element>; 3],
    pub success: Element,
}

impl FormParts {
    pub(crate) fn field(&self, field: Field) -> &Element {
        &self.fields[field_slot(field)]
    }

    pub(crate) fn values(&self) -> FormValues {
        FormValues::new(
            &control_value(self.field(Field::Name)),
            &control_value(self.field(Field::Email)),
            &control_value(self.field(Field::Message)),
        )
    }
}

/// Every element the host binds to, kept from the startup scan.
#[derive(Debug)]
pub(crate) struct Elements {
    pub window: Window,
    pub document: Document,
    pub html: Option<Element>,
    pub body: Option<HtmlElement>,
    pub cursor: Option<(Element, Element)>,
    pub hover_targets: Vec<Element>,
    pub navbar: Option<Element>,
    pub intro: Option<IntroParts>,
    pub nav: Option<NavParts>,
    pub sections: Vec<Element>,
    pub theme_toggle: Option<Element>,
    pub reveal_items: Vec<Element>,
    pub skill_items: Vec<Element>,
    pub skill_bars: Vec<Option<Element>>,
    pub lazy_images: Vec<Element>,
    pub gallery: Option<GalleryParts>,
    pub form: Option<FormParts>,
    pub back_to_top: Option<Element>,
    pub parallax: Vec<Element>,
    pub logo: Option<Element>,
    pub cards: Vec<Element>,
    pub contact_lines: Vec<Element>,
    pub anchors: Vec<Element>,
    particles: RefCell<HashMap<u32, HtmlElement>>,
}

/// Result of the startup scan.
pub(crate) struct Mounted {
    pub blueprint: Blueprint,
    pub elements: Elements,
    pub errors: Vec<MountError>,
}

fn scan_intro(document: &Document, navbar: Option<&Element>, errors: &mut Vec<MountError>) -> Option<IntroParts> {
    let root = query(document, selector::INTRO)?;
    let title = require(query(document, selector::INTRO_TITLE), "intro", selector::INTRO_TITLE, errors);
    let enter = require(query(document, selector::INTRO_ENTER), "intro", selector::INTRO_ENTER, errors);
    let main_content = require(query(document, selector::MAIN_CONTENT), "intro", selector::MAIN_CONTENT, errors);
    if navbar.is_none() {
        errors.push(MountError::MissingElement { controller: "intro", selector: selector::NAVBAR });
    }
    navbar?;
    Some(IntroParts { root, title: title?, enter: enter?, main_content: main_content? })
}

fn scan_nav(document: &Document, navbar: Option<&Element>, errors: &mut Vec<MountError>) -> Option<NavParts> {
    navbar?;
    let toggle = require(query(document, selector::MOBILE_TOGGLE), "nav", selector::MOBILE_TOGGLE, errors);
    let menu = require(query(document, selector::NAV_MENU), "nav", selector::NAV_MENU, errors);
    Some(NavParts { links: query_all(document, selector::NAV_LINKS), toggle: toggle?, menu: menu? })
}

fn scan_gallery(document: &Document, errors: &mut Vec<MountError>) -> Option<(GalleryParts, GallerySpec)> {
    let items = query_all(document, selector::GALLERY_ITEMS);
    if items.is_empty() {
        return None;
    }
    let filters = query_all(document, selector::FILTERS);
    let view_buttons = items.iter().map(|item| query_in(item, selector::VIEW_BUTTON)).collect();
    let specs = items
        .iter()
        .map(|item| {
            let category = item.get_attribute("data-category").unwrap_or_default();
            let image_src = query_in(item, "img")
                .and_then(|img| img.dyn_ref::<web_sys::HtmlImageElement>().map(web_sys::HtmlImageElement::src))
                .unwrap_or_default();
            GalleryItemSpec { category, image_src }
        })
        .collect();
    let lightbox = query(document, selector::LIGHTBOX).and_then(|root| {
        let image = require(query(document, selector::LIGHTBOX_IMAGE), "lightbox", selector::LIGHTBOX_IMAGE, errors)?;
        Some(LightboxParts { root, image, close: query(document, selector::LIGHTBOX_CLOSE) })
    });
    let spec = GallerySpec {
        filters: filters.iter().map(|f| f.get_attribute("data-filter").unwrap_or_default()).collect(),
        items: specs,
        lightbox: lightbox.is_some(),
    };
    Some((GalleryParts { filters, items, view_buttons, lightbox }, spec))
}

fn scan_form(document: &Document, errors: &mut Vec<MountError>) -> Option<FormParts> {
    let root = query(document, selector::FORM)?;
    let Some(form) = root.dyn_ref::<HtmlFormElement>().cloned() else {
        errors.push(MountError::WrongElementType {
            controller: "contact-form",
            selector: selector::FORM,
            expected: "form",
        });
        return None;
    };
    let mut fields = Vec::with_capacity(3);
    for field in Field::ALL {
        let selector = field_selector(field);
        let found = require(query(document, selector), "contact-form", selector, errors)?;
        if found.dyn_ref::<HtmlInputElement>().is_none() && found.dyn_ref::<HtmlTextAreaElement>().is_none() {
            errors.push(MountError::WrongElementType { controller: "contact-form", selector, expected: "input" });
            return None;
        }
        fields.push(found);
    }
    let errors_slots = fields
        .iter()
        .map(|el| el.parent_element().and_then(|parent| query_in(&parent, selector::FORM_ERROR)))
        .collect::<Vec<_>>();
    let success = require(query(document, selector::FORM_SUCCESS), "contact-form", selector::FORM_SUCCESS, errors)?;
    let [name, email, message] = <[Element; 3]>::try_from(fields).ok_or_log()?;
    let [name_error, email_error, message_error] = <[Option<Element>; 3]>::try_from(errors_slots).ok_or_log()?;
    Some(FormParts {
        form,
        fields: [name, email, message],
        errors: [name_error, email_error, message_error],
        success,
    })
}

trait OkOrLog<T> {
    fn ok_or_log(self) -> Option<T>;
}

impl<T, E: Debug> OkOrLog<T> for Result<T, E> {
    fn ok_or_log(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("unexpected shape: {err:?}");
                None
            }
        }
    }
}

/// Look every group up and build the blueprint the page mounts from.
///
/// `theme_key` is the storage key the theme preference is persisted under.
pub(crate) fn scan(window: Window, document: Document, theme_key: &str) -> Mounted {
    let mut errors = Vec::new();

    let cursor = match (query(&document, selector::CURSOR), query(&document, selector::CURSOR_DOT)) {
        (Some(ring), Some(dot)) => Some((ring, dot)),
        _ => None,
    };
    let navbar = query(&document, selector::NAVBAR);
    let intro = scan_intro(&document, navbar.as_ref(), &mut errors);
    let nav = scan_nav(&document, navbar.as_ref(), &mut errors);
    let sections = query_all(&document, selector::SECTIONS);
    let theme_toggle = query(&document, selector::THEME_TOGGLE);
    let stored_theme = match window.local_storage() {
        Ok(Some(storage)) => storage.get_item(theme_key).unwrap_or_default(),
        _ => None,
    };
    let reveal_items = query_all(&document, selector::REVEAL);
    let skill_items = query_all(&document, selector::SKILL_ITEMS);
    let skill_bars: Vec<Option<Element>> = skill_items.iter().map(|item| query_in(item, selector::SKILL_BAR)).collect();
    let lazy_images = query_all(&document, selector::LAZY_IMAGES);
    let gallery = scan_gallery(&document, &mut errors);
    let form = scan_form(&document, &mut errors);
    let contact_lines = query_all(&document, selector::CONTACT_LINES);
    let viewport_width = match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or_default(),
        Err(_) => 0.0,
    };

    let blueprint = Blueprint {
        cursor: cursor.is_some(),
        intro: intro.is_some(),
        nav_links: nav
            .as_ref()
            .map(|nav| nav.links.iter().map(|l| l.get_attribute("href").unwrap_or_default()).collect()),
        sections: sections.iter().map(Element::id).collect(),
        theme_toggle: theme_toggle.is_some(),
        stored_theme,
        reveal_count: reveal_items.len(),
        skill_progress: skill_bars
            .iter()
            .map(|bar| bar.as_ref().and_then(|b| b.get_attribute("data-progress")).unwrap_or_default())
            .collect(),
        lazy_images: lazy_images.iter().map(|img| img.get_attribute("data-src").unwrap_or_default()).collect(),
        gallery: gallery.as_ref().map(|(_, spec)| spec.clone()),
        form: form.is_some(),
        back_to_top: false,
        parallax_count: 0,
        logo: false,
        card_count: 0,
        contact_lines: contact_lines.iter().map(|l| l.text_content().unwrap_or_default()).collect(),
        viewport_width,
    };

    let elements = Elements {
        html: document.document_element(),
        body: document.body(),
        cursor,
        hover_targets: query_all(&document, selector::HOVER_TARGETS),
        navbar,
        intro,
        nav,
        sections,
        theme_toggle,
        reveal_items,
        skill_items,
        skill_bars,
        lazy_images,
        gallery: gallery.map(|(parts, _)| parts),
        form,
        back_to_top: query(&document, selector::BACK_TO_TOP),
        parallax: query_all(&document, selector::PARALLAX),
        logo: query(&document, selector::LOGO),
        cards: query_all(&document, selector::CARDS),
        contact_lines,
        anchors: query_all(&document, selector::ANCHORS),
        particles: RefCell::new(HashMap::new()),
        window,
        document,
    };
    let blueprint = Blueprint {
        back_to_top: elements.back_to_top.is_some(),
        parallax_count: elements.parallax.len(),
        logo: elements.logo.is_some(),
        card_count: elements.cards.len(),
        ..blueprint
    };

    Mounted { blueprint, elements, errors }
}

impl Elements {
    fn resolve(&self, target: &Target) -> Option<Element> {
        let nth = |list: &[Element], i: usize| list.get(i).cloned();
        match target {
            Target::Html => self.html.clone(),
            Target::Body => self.body.clone().map(Into::into),
            Target::Cursor => self.cursor.as_ref().map(|(ring, _)| ring.clone()),
            Target::CursorDot => self.cursor.as_ref().map(|(_, dot)| dot.clone()),
            Target::Intro => self.intro.as_ref().map(|i| i.root.clone()),
            Target::IntroTitle => self.intro.as_ref().map(|i| i.title.clone()),
            Target::MainContent => self.intro.as_ref().map(|i| i.main_content.clone()),
            Target::Navbar => self.navbar.clone(),
            Target::MobileToggle => self.nav.as_ref().map(|n| n.toggle.clone()),
            Target::NavMenu => self.nav.as_ref().map(|n| n.menu.clone()),
            Target::NavLink(i) => self.nav.as_ref().and_then(|n| nth(&n.links, *i)),
            Target::Section(i) => nth(&self.sections, *i),
            Target::ElementId(id) => self.document.get_element_by_id(id),
            Target::RevealItem(i) => nth(&self.reveal_items, *i),
            Target::SkillItem(i) => nth(&self.skill_items, *i),
            Target::SkillBar(i) => self.skill_bars.get(*i).cloned().flatten(),
            Target::LazyImage(i) => nth(&self.lazy_images, *i),
            Target::FilterButton(i) => self.gallery.as_ref().and_then(|g| nth(&g.filters, *i)),
            Target::GalleryItem(i) => self.gallery.as_ref().and_then(|g| nth(&g.items, *i)),
            Target::Lightbox => self.lightbox().map(|l| l.root.clone()),
            Target::LightboxImage => self.lightbox().map(|l| l.image.clone()),
            Target::Form => self.form.as_ref().map(|f| f.form.clone().into()),
            Target::Field(field) => self.form.as_ref().map(|f| f.field(*field).clone()),
            Target::FieldError(field) => self.form.as_ref().and_then(|f| f.errors[field_slot(*field)].clone()),
            Target::FormSuccess => self.form.as_ref().map(|f| f.success.clone()),
            Target::BackToTop => self.back_to_top.clone(),
            Target::Parallax(i) => nth(&self.parallax, *i),
            Target::Card(i) => nth(&self.cards, *i),
            Target::ContactLine(i) => nth(&self.contact_lines, *i),
            Target::Particle(id) => self.particles.borrow().get(id).map(|p| p.clone().into()),
        }
    }

    pub(crate) fn lightbox(&self) -> Option<&LightboxParts> {
        self.gallery.as_ref().and_then(|g| g.lightbox.as_ref())
    }

    /// Apply a DOM effect. Effects whose element is absent are skipped.
    pub(crate) fn apply(&self, effect: &Effect) {
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(el) = self.resolve(target) {
                    report("add class", el.class_list().add_1(class));
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.resolve(target) {
                    report("remove class", el.class_list().remove_1(class));
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.resolve(target).and_then(|el| el.dyn_into::<HtmlElement>().ok_or_log()) {
                    report(property, el.style().set_property(property, value));
                }
            }
            Effect::SetAttribute { target, name, value } => {
                if let Some(el) = self.resolve(target) {
                    report(name, el.set_attribute(name, value));
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = self.resolve(target) {
                    el.set_text_content(Some(text));
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.form {
                    form.form.reset();
                }
            }
            Effect::ScrollIntoView { target } => {
                if let Some(el) = self.resolve(target) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Effect::ScrollToTop => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::Store { key, value } => match self.window.local_storage() {
                Ok(Some(storage)) => report("store", storage.set_item(key, value)),
                Ok(None) => log::debug!("no local storage; {key} not persisted"),
                Err(err) => log::debug!("local storage unavailable: {err:?}"),
            },
            Effect::SpawnParticle { id, x, y, color } => self.spawn_particle(*id, *x, *y, color),
            Effect::Remove { target } => {
                if let Target::Particle(id) = target {
                    if let Some(particle) = self.particles.borrow_mut().remove(id) {
                        particle.remove();
                    }
                } else if let Some(el) = self.resolve(target) {
                    el.remove();
                }
            }
            // Host-level effects; see `Host::apply`.
            Effect::StartTimer { .. } | Effect::CopyToClipboard { .. } | Effect::Unobserve { .. } => {}
        }
    }

    fn spawn_particle(&self, id: u32, x: f64, y: f64, color: &str) {
        let Some(body) = &self.body else {
            return;
        };
        let particle = match self.document.create_element("div") {
            Ok(el) => match el.dyn_into::<HtmlElement>() {
                Ok(el) => el,
                Err(_) => return,
            },
            Err(err) => {
                log::debug!("particle create failed: {err:?}");
                return;
            }
        };
        let style = particle.style();
        let left = format!("{x}px");
        let top = format!("{y}px");
        for (property, value) in [
            ("position", "fixed"),
            ("left", left.as_str()),
            ("top", top.as_str()),
            ("width", PARTICLE_SIZE),
            ("height", PARTICLE_SIZE),
            ("border-radius", "50%"),
            ("background", color),
            ("pointer-events", "none"),
            ("z-index", PARTICLE_LAYER),
        ] {
            report(property, style.set_property(property, value));
        }
        report("particle append", body.append_child(&particle));
        self.particles.borrow_mut().insert(id, particle);
    }
}
