//! One module per feature area of the page.
//!
//! Controllers are independent: none reads another's state. They coordinate
//! only through the shared scroll lock and the inputs the dispatcher pushes.

pub mod cursor;
pub mod decor;
pub mod device;
pub mod form;
pub mod gallery;
pub mod intro;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod theme;
