//! Interaction layer for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and attaches to a pre-rendered
//! document. It owns every interactive behavior on the page: the custom
//! cursor, the intro sequence, navigation, theming, scroll reveals, the
//! gallery and its lightbox, the contact form, and a handful of decorative
//! effects. Visual appearance stays in the stylesheet; this crate only flips
//! classes, styles, attributes, and text.
//!
//! The behavior itself lives in a browser-free core. Controllers consume
//! plain inputs (scroll offset, key names, pointer positions, timer expiry)
//! and return [`effect::Effect`]s. The [`web`] host, compiled with the
//! `hydrate` feature, scans the document, forwards DOM events into
//! [`page::Page`], and applies the returned effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Central dispatcher owning every controller |
//! | [`controllers`] | One module per feature area |
//! | [`controller`] | The [`controller::Controller`] lifecycle trait and its context |
//! | [`effect`] | Effects and the element targets they address |
//! | [`scroll_lock`] | Reference-counted page scroll lock |
//! | [`timer`] | Keys for one-shot delays armed by the host |
//! | [`blueprint`] | Snapshot of the document structure the core binds to |
//! | [`config`] | Tunable timings and thresholds |
//! | [`consts`] | Class names, storage keys, and fixed strings |
//! | [`error`] | Mount and configuration errors |
//! | [`util`] | Debounce and viewport classification |

pub mod blueprint;
pub mod config;
pub mod consts;
pub mod controller;
pub mod controllers;
pub mod effect;
pub mod error;
pub mod page;
pub mod scroll_lock;
pub mod timer;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod harness;
