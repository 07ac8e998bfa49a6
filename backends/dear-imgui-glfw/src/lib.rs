//! GLFW platform backend and OpenGL3 renderer backend bindings.
//!
//! This crate is a thin wrapper around the official C++ GLFW platform backend
//! (`imgui_impl_glfw.cpp`) and OpenGL3 renderer backend
//! (`imgui_impl_opengl3.cpp`). Both are compiled from the upstream Dear ImGui
//! tree used by `dear-imgui-sys`.
//!
//! The window is owned by the host application; this crate only borrows the
//! raw `GLFWwindow*` for the backend to install its callbacks and poll input.
//! The expected sequence is:
//!
//! 1. create a Dear ImGui context;
//! 2. [`init_for_opengl`], then [`init_renderer`];
//! 3. per frame: [`renderer_new_frame`], [`platform_new_frame`], core new-frame,
//!    build UI, core render, [`render_draw_data`];
//! 4. [`shutdown_renderer`], [`shutdown_platform`], then destroy the context.

use std::ffi::{CStr, c_char};

use dear_imgui_sys as sys;

/// Opaque GLFW window handle, as declared by `glfw3.h`.
#[repr(C)]
pub struct GLFWwindow {
    _private: [u8; 0],
}

/// FFI bindings to the C wrappers defined in `wrapper.cpp`.
mod ffi {
    use super::*;

    unsafe extern "C" {
        pub fn ImGui_ImplGlfw_InitForOpenGL_Rust(
            window: *mut GLFWwindow,
            install_callbacks: bool,
        ) -> bool;
        pub fn ImGui_ImplGlfw_Shutdown_Rust();
        pub fn ImGui_ImplGlfw_NewFrame_Rust();

        pub fn ImGui_ImplOpenGL3_Init_Rust(glsl_version: *const c_char) -> bool;
        pub fn ImGui_ImplOpenGL3_Shutdown_Rust();
        pub fn ImGui_ImplOpenGL3_NewFrame_Rust();
        pub fn ImGui_ImplOpenGL3_RenderDrawData_Rust(draw_data: *mut sys::ImDrawData);
    }
}

/// Errors that can occur when setting up the GLFW + OpenGL3 backends.
#[derive(Debug, thiserror::Error)]
pub enum GlfwBackendError {
    #[error("ImGui_ImplGlfw_InitForOpenGL returned false")]
    GlfwInitFailed,
    #[error("ImGui_ImplOpenGL3_Init returned false")]
    OpenGlInitFailed,
    #[error("GLFW window pointer is null")]
    NullWindow,
}

/// Initialize the Dear ImGui GLFW platform backend for an OpenGL window.
///
/// When `install_callbacks` is true the backend installs its own GLFW input
/// callbacks, chaining to any callbacks the host installed before.
///
/// # Safety
///
/// - A Dear ImGui context must be current.
/// - `window` must be a live GLFW window that outlives the backend (until
///   [`shutdown_platform`]).
pub unsafe fn init_for_opengl(
    window: *mut GLFWwindow,
    install_callbacks: bool,
) -> Result<(), GlfwBackendError> {
    if window.is_null() {
        return Err(GlfwBackendError::NullWindow);
    }
    if !unsafe { ffi::ImGui_ImplGlfw_InitForOpenGL_Rust(window, install_callbacks) } {
        return Err(GlfwBackendError::GlfwInitFailed);
    }
    #[cfg(feature = "tracing")]
    tracing::info!("Dear ImGui GLFW platform initialized");
    Ok(())
}

/// Initialize the Dear ImGui OpenGL3 renderer backend.
///
/// `glsl_version` should be a GLSL version string such as `"#version 330"`;
/// `None` lets the backend pick its platform default.
///
/// Requires a current OpenGL context on the calling thread.
pub fn init_renderer(glsl_version: Option<&CStr>) -> Result<(), GlfwBackendError> {
    let glsl_ptr = glsl_version.map_or(std::ptr::null(), CStr::as_ptr);
    if !unsafe { ffi::ImGui_ImplOpenGL3_Init_Rust(glsl_ptr) } {
        return Err(GlfwBackendError::OpenGlInitFailed);
    }
    #[cfg(feature = "tracing")]
    tracing::info!("Dear ImGui OpenGL3 renderer initialized");
    Ok(())
}

/// Shutdown the OpenGL3 renderer backend.
///
/// Call this before [`shutdown_platform`] and before destroying the context.
pub fn shutdown_renderer() {
    unsafe { ffi::ImGui_ImplOpenGL3_Shutdown_Rust() }
}

/// Shutdown the GLFW platform backend, restoring the host's callbacks.
pub fn shutdown_platform() {
    unsafe { ffi::ImGui_ImplGlfw_Shutdown_Rust() }
}

/// Prepare the OpenGL3 renderer for a new frame (lazily creates device objects).
pub fn renderer_new_frame() {
    unsafe { ffi::ImGui_ImplOpenGL3_NewFrame_Rust() }
}

/// Feed window size, time step and input state from GLFW into the current context.
pub fn platform_new_frame() {
    unsafe { ffi::ImGui_ImplGlfw_NewFrame_Rust() }
}

/// Render Dear ImGui draw data using the OpenGL3 backend.
///
/// # Safety
///
/// `draw_data` must be null or the pointer returned by the core's draw-data
/// query for the frame just rendered. An OpenGL context must be current.
pub unsafe fn render_draw_data(draw_data: *mut sys::ImDrawData) {
    if draw_data.is_null() {
        return;
    }
    unsafe { ffi::ImGui_ImplOpenGL3_RenderDrawData_Rust(draw_data) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_window_is_rejected_before_reaching_the_backend() {
        let err = unsafe { init_for_opengl(std::ptr::null_mut(), true) }.unwrap_err();
        assert!(matches!(err, GlfwBackendError::NullWindow));
    }

    #[test]
    fn error_messages_name_the_failing_backend_call() {
        assert!(
            GlfwBackendError::GlfwInitFailed
                .to_string()
                .contains("ImGui_ImplGlfw_InitForOpenGL")
        );
        assert!(
            GlfwBackendError::OpenGlInitFailed
                .to_string()
                .contains("ImGui_ImplOpenGL3_Init")
        );
    }

    #[test]
    fn null_draw_data_is_ignored() {
        unsafe { render_draw_data(std::ptr::null_mut()) };
    }
}
