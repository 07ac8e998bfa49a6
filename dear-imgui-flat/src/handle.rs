//! Opaque handles passed through the boundary
//!
//! Neither handle is ever dereferenced on this side. They exist so that the
//! typed seam can tell "a context" from "a window" from "some pointer".

use std::ffi::c_void;
use std::ptr::NonNull;

use crate::sys;

/// A Dear ImGui context owned by the host.
///
/// Created by `imgui_create_context` and released by `imgui_destroy_context`;
/// the adapter keeps no copy in between.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextHandle(NonNull<sys::ImGuiContext>);

impl ContextHandle {
    /// Wrap a raw context pointer, returning `None` for null.
    pub fn from_raw(raw: *mut sys::ImGuiContext) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    pub fn as_raw(self) -> *mut sys::ImGuiContext {
        self.0.as_ptr()
    }
}

/// Opaque window type of the host's windowing library (`GLFWwindow` in C).
#[repr(C)]
pub struct GlfwWindow {
    _private: [u8; 0],
}

/// A window owned by the host, lent to the platform backend.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonNull<GlfwWindow>);

impl WindowHandle {
    /// Wrap a raw window pointer, returning `None` for null.
    pub fn from_raw(raw: *mut GlfwWindow) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    /// Wrap an untyped window pointer as handed out by most GLFW bindings.
    pub fn from_void(raw: *mut c_void) -> Option<Self> {
        Self::from_raw(raw.cast())
    }

    pub fn as_raw(self) -> *mut GlfwWindow {
        self.0.as_ptr()
    }
}
