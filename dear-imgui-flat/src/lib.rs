//! # Dear ImGui flat adapter
//!
//! A plain C-ABI surface over Dear ImGui and its GLFW/OpenGL3 backends, for
//! hosts that cannot call C++ directly. Every `imgui_*` symbol takes only
//! integers, floats, NUL-terminated strings, and pointers to caller-owned
//! `int`/`float` storage. Booleans cross the boundary as `0`/`1`.
//!
//! The same operations are available to Rust through [`ImGui`], a safe
//! wrapper that owns one context and the backends attached to it.
//!
//! ## Features
//!
//! - `tracing` (default): log rejected calls and lifecycle events
//! - `glfw-opengl3`: compile and link the GLFW platform and OpenGL3 renderer backends
//!
//! ## Quick Start
//!
//! ```no_run
//! use dear_imgui_flat::*;
//!
//! let mut gui = ImGui::headless().expect("no other context is active");
//! gui.set_display_size([1280.0, 720.0]);
//!
//! gui.new_frame();
//! if gui.begin("Hello", None, WindowFlags::empty()) {
//!     gui.text("Hello, world!");
//! }
//! gui.end();
//! gui.render();
//! ```
//!
//! The C declarations live in `include/imgui_flat.h`.

#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::float_cmp))]

// Re-export the sys crate for advanced users
pub extern crate dear_imgui_sys as sys;

#[macro_use]
mod logging;

mod convert;
mod core;
mod error;
mod flags;
mod handle;
mod input;
mod native;
mod string;
mod style;
mod ui;

pub mod adapter;
pub mod exports;

#[cfg(test)]
mod testing;

pub use self::convert::guard;
pub use self::core::GuiCore;
pub use self::error::{FlatError, FlatResult};
pub use self::flags::{
    BoundaryFlags, ComboFlags, SelectableFlags, TableColumnFlags, TableFlags, WindowFlags,
};
pub use self::handle::{ContextHandle, GlfwWindow, WindowHandle};
pub use self::input::MouseButton;
pub use self::logging::{init_tracing, init_tracing_dev, init_tracing_with_filter};
pub use self::native::NativeCore;
pub use self::string::UiBuffer;
pub use self::style::{StyleColor, StyleVar, StyleVarKind, StyleVarValue};
pub use self::ui::{BackendConfig, ImGui};

/// Condition for setting window properties
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Condition {
    /// Set the variable always
    Always = sys::ImGuiCond_Always as i32,
    /// Set the variable once per runtime session (only the first call will succeed)
    Once = sys::ImGuiCond_Once as i32,
    /// Set the variable if the window has no persistently saved data (no entry in .ini file)
    FirstUseEver = sys::ImGuiCond_FirstUseEver as i32,
    /// Set the variable if the window is appearing after being hidden/inactive (or the first time)
    Appearing = sys::ImGuiCond_Appearing as i32,
}

impl Condition {
    pub const fn raw(self) -> sys::ImGuiCond {
        self as sys::ImGuiCond
    }
}

/// `0` (`ImGuiCond_None`) is read as [`Condition::Always`], as the library does.
impl TryFrom<i32> for Condition {
    type Error = i32;

    fn try_from(raw: i32) -> Result<Self, i32> {
        const NONE: i32 = sys::ImGuiCond_None as i32;
        const ALWAYS: i32 = Condition::Always as i32;
        const ONCE: i32 = Condition::Once as i32;
        const FIRST_USE_EVER: i32 = Condition::FirstUseEver as i32;
        const APPEARING: i32 = Condition::Appearing as i32;

        match raw {
            NONE | ALWAYS => Ok(Self::Always),
            ONCE => Ok(Self::Once),
            FIRST_USE_EVER => Ok(Self::FirstUseEver),
            APPEARING => Ok(Self::Appearing),
            other => Err(other),
        }
    }
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_values_match_the_library() {
        assert_eq!(Condition::Always as i32, 1);
        assert_eq!(Condition::Once as i32, 2);
        assert_eq!(Condition::FirstUseEver as i32, 4);
        assert_eq!(Condition::Appearing as i32, 8);
    }

    #[test]
    fn zero_condition_is_always() {
        assert_eq!(Condition::try_from(0), Ok(Condition::Always));
        assert_eq!(Condition::try_from(1), Ok(Condition::Always));
        assert_eq!(Condition::try_from(8), Ok(Condition::Appearing));
    }

    #[test]
    fn combined_or_unknown_conditions_are_rejected() {
        for raw in [-1, 3, 6, 16, i32::MAX] {
            assert_eq!(Condition::try_from(raw), Err(raw));
        }
    }
}
