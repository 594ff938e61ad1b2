//! Keys for one-shot delays.
//!
//! Controllers never sleep. They emit [`crate::effect::Effect::StartTimer`]
//! with a key, the host arms a browser timeout, and the key comes back through
//! [`crate::page::Page::on_timer`]. Debounced keys carry the generation they
//! were armed for so stale expiries can be told apart from the latest one.

/// Identifies a pending one-shot delay and the controller that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Next character of the intro title (the first one waits for the start delay).
    IntroType,
    /// Intro exit grace period has elapsed.
    IntroExit,
    /// Theme palette swap after the shrink is visible.
    ThemeSwap,
    /// Theme scale restore after the swap.
    ThemeRestore,
    /// Navbar auto-hide debounce window, tagged with its generation.
    NavbarSettle(u64),
    /// Resize debounce window, tagged with its generation.
    ResizeSettle(u64),
    /// Simulated form submission has completed.
    FormSent,
    /// Success banner display time has elapsed.
    SuccessHide,
    /// Clipboard confirmation on a contact line has elapsed.
    CopyRevert(usize),
    /// First leg of the post-load reveal stagger.
    LoadStagger,
    /// Second leg of the post-load reveal stagger.
    LoadStaggerApply,
}
