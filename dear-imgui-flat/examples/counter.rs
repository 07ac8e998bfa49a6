//! Button counter in a GLFW window
//!
//! Run with:
//!
//! ```text
//! cargo run -p dear-imgui-flat --example counter --features glfw-opengl3
//! ```

use dear_imgui_flat::{BackendConfig, Condition, ImGui, WindowFlags, WindowHandle};
use glfw::Context as _;

// GL 1.1 entry points, exported by the system GL library the backend links.
unsafe extern "system" {
    fn glViewport(x: i32, y: i32, width: i32, height: i32);
    fn glClearColor(r: f32, g: f32, b: f32, a: f32);
    fn glClear(mask: u32);
}

const GL_COLOR_BUFFER_BIT: u32 = 0x0000_4000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dear_imgui_flat::init_tracing();

    let mut glfw = glfw::init(glfw::fail_on_errors)?;
    glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

    let (mut window, _events) = glfw
        .create_window(800, 600, "Dear ImGui flat counter", glfw::WindowMode::Windowed)
        .ok_or("failed to create GLFW window")?;
    window.make_current();
    glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

    let handle = WindowHandle::from_raw(window.window_ptr().cast())
        .ok_or("GLFW returned a null window")?;
    // Dropped before `window`: the backends detach from a live window.
    let mut gui = ImGui::new(handle, BackendConfig::default())?;

    let mut counter = 0u32;
    let mut show_demo = false;

    while !window.should_close() {
        glfw.poll_events();

        gui.new_frame();
        gui.set_next_window_size([260.0, 120.0], Condition::FirstUseEver);
        if gui.begin("Debug", None, WindowFlags::empty()) {
            if gui.button("Click me!") {
                counter += 1;
                tracing::info!(counter, "button clicked");
            }
            gui.same_line();
            gui.text(format!("Count: {counter}"));
            gui.checkbox("Demo window", &mut show_demo);
        }
        gui.end();
        if show_demo {
            gui.show_demo_window(Some(&mut show_demo));
        }

        let (width, height) = window.get_framebuffer_size();
        unsafe {
            glViewport(0, 0, width, height);
            glClearColor(0.1, 0.1, 0.15, 1.0);
            glClear(GL_COLOR_BUFFER_BIT);
        }
        gui.render();
        window.swap_buffers();
    }

    Ok(())
}
