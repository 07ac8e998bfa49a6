//! [`GuiCore`] over the linked Dear ImGui library
//!
//! Backend steps consult the current context's IO to see whether a backend is
//! attached (the backends store their state there), so a context that never
//! initialized one can still run frames, shut down and be destroyed.

use std::ffi::CStr;
use std::marker::PhantomData;
use std::ptr;

use crate::core::GuiCore;
use crate::flags::{ComboFlags, SelectableFlags, TableColumnFlags, TableFlags, WindowFlags};
use crate::handle::{ContextHandle, WindowHandle};
use crate::input::MouseButton;
use crate::logging;
use crate::style::{StyleColor, StyleVar};
use crate::{Condition, sys};

#[cfg(not(feature = "glfw-opengl3"))]
use crate::error::FlatError;

/// Forwards every [`GuiCore`] call to Dear ImGui and the GLFW/OpenGL3 backends.
///
/// Holds no state. Every call acts on whatever context is current on the
/// calling thread.
#[derive(Debug)]
pub struct NativeCore {
    // Dear ImGui contexts are bound to the thread that uses them.
    _not_send: PhantomData<*mut ()>,
}

impl NativeCore {
    /// # Safety
    ///
    /// Apart from [`GuiCore::create_context`] and [`GuiCore::current_context`],
    /// every method must be called while a context is current on this thread.
    /// Begin/end pairing, frame ordering and stack balance are checked by the
    /// library's own assertions, not here.
    pub const unsafe fn new() -> Self {
        Self {
            _not_send: PhantomData,
        }
    }

    fn io(&mut self) -> *mut sys::ImGuiIO {
        unsafe { sys::igGetIO_Nil() }
    }

    #[cfg(feature = "glfw-opengl3")]
    fn renderer_attached(&mut self) -> bool {
        !unsafe { (*self.io()).BackendRendererUserData }.is_null()
    }

    #[cfg(feature = "glfw-opengl3")]
    fn platform_attached(&mut self) -> bool {
        !unsafe { (*self.io()).BackendPlatformUserData }.is_null()
    }
}

fn open_ptr(open: Option<&mut bool>) -> *mut bool {
    open.map_or(ptr::null_mut(), |open| open as *mut bool)
}

fn opt_ptr(text: Option<&CStr>) -> *const std::ffi::c_char {
    text.map_or(ptr::null(), CStr::as_ptr)
}

const ZERO: sys::ImVec2 = sys::ImVec2 { x: 0.0, y: 0.0 };

impl GuiCore for NativeCore {
    fn create_context(&mut self) -> Option<ContextHandle> {
        let ctx = ContextHandle::from_raw(unsafe { sys::igCreateContext(ptr::null_mut()) });
        if ctx.is_some() {
            logging::log_context_created();
        }
        ctx
    }

    fn destroy_context(&mut self, ctx: Option<ContextHandle>) {
        unsafe { sys::igDestroyContext(ctx.map_or(ptr::null_mut(), ContextHandle::as_raw)) };
        logging::log_context_destroyed();
    }

    fn current_context(&mut self) -> Option<ContextHandle> {
        ContextHandle::from_raw(unsafe { sys::igGetCurrentContext() })
    }

    #[cfg(feature = "glfw-opengl3")]
    fn init_platform(&mut self, window: WindowHandle, install_callbacks: bool) -> bool {
        match unsafe { dear_imgui_glfw::init_for_opengl(window.as_raw().cast(), install_callbacks) }
        {
            Ok(()) => true,
            Err(err) => {
                flat_error!("GLFW platform backend initialization failed: {}", err);
                false
            }
        }
    }

    #[cfg(not(feature = "glfw-opengl3"))]
    fn init_platform(&mut self, _window: WindowHandle, _install_callbacks: bool) -> bool {
        FlatError::BackendUnavailable { backend: "GLFW" }.reject();
        false
    }

    #[cfg(feature = "glfw-opengl3")]
    fn init_renderer(&mut self, glsl_version: Option<&CStr>) -> bool {
        match dear_imgui_glfw::init_renderer(glsl_version) {
            Ok(()) => true,
            Err(err) => {
                flat_error!("OpenGL3 renderer backend initialization failed: {}", err);
                false
            }
        }
    }

    #[cfg(not(feature = "glfw-opengl3"))]
    fn init_renderer(&mut self, _glsl_version: Option<&CStr>) -> bool {
        FlatError::BackendUnavailable { backend: "OpenGL3" }.reject();
        false
    }

    fn shutdown_renderer(&mut self) {
        #[cfg(feature = "glfw-opengl3")]
        if self.renderer_attached() {
            dear_imgui_glfw::shutdown_renderer();
            logging::log_backend_shutdown("OpenGL3");
            return;
        }
        flat_debug!("No OpenGL3 renderer attached, nothing to shut down");
    }

    fn shutdown_platform(&mut self) {
        #[cfg(feature = "glfw-opengl3")]
        if self.platform_attached() {
            dear_imgui_glfw::shutdown_platform();
            logging::log_backend_shutdown("GLFW");
            return;
        }
        flat_debug!("No GLFW platform attached, nothing to shut down");
    }

    fn new_frame(&mut self) {
        #[cfg(feature = "glfw-opengl3")]
        {
            if self.renderer_attached() {
                dear_imgui_glfw::renderer_new_frame();
            }
            if self.platform_attached() {
                dear_imgui_glfw::platform_new_frame();
            }
        }
        unsafe { sys::igNewFrame() }
    }

    fn render(&mut self) {
        unsafe { sys::igRender() }
    }

    fn end_frame(&mut self) {
        unsafe { sys::igEndFrame() }
    }

    fn render_draw_data(&mut self) {
        #[cfg(feature = "glfw-opengl3")]
        if self.renderer_attached() {
            unsafe { dear_imgui_glfw::render_draw_data(sys::igGetDrawData()) };
        }
    }

    fn set_display_size(&mut self, size: sys::ImVec2) {
        unsafe { (*self.io()).DisplaySize = size }
    }

    fn want_capture_mouse(&mut self) -> bool {
        unsafe { (*self.io()).WantCaptureMouse }
    }

    fn want_capture_keyboard(&mut self) -> bool {
        unsafe { (*self.io()).WantCaptureKeyboard }
    }

    fn begin(&mut self, name: &CStr, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        unsafe { sys::igBegin(name.as_ptr(), open_ptr(open), flags.bits()) }
    }

    fn end(&mut self) {
        unsafe { sys::igEnd() }
    }

    fn text(&mut self, text: &CStr) {
        unsafe { sys::igTextUnformatted(text.as_ptr(), ptr::null()) }
    }

    fn button(&mut self, label: &CStr, size: sys::ImVec2) -> bool {
        unsafe { sys::igButton(label.as_ptr(), size) }
    }

    fn checkbox(&mut self, label: &CStr, value: &mut bool) -> bool {
        unsafe { sys::igCheckbox(label.as_ptr(), value) }
    }

    fn slider_float(&mut self, label: &CStr, value: &mut f32, min: f32, max: f32) -> bool {
        unsafe { sys::igSliderFloat(label.as_ptr(), value, min, max, c"%.3f".as_ptr(), 0) }
    }

    fn slider_int(&mut self, label: &CStr, value: &mut i32, min: i32, max: i32) -> bool {
        unsafe { sys::igSliderInt(label.as_ptr(), value, min, max, c"%d".as_ptr(), 0) }
    }

    fn input_float(&mut self, label: &CStr, value: &mut f32) -> bool {
        unsafe { sys::igInputFloat(label.as_ptr(), value, 0.0, 0.0, c"%.3f".as_ptr(), 0) }
    }

    fn input_int(&mut self, label: &CStr, value: &mut i32) -> bool {
        unsafe { sys::igInputInt(label.as_ptr(), value, 1, 100, 0) }
    }

    fn color_edit3(&mut self, label: &CStr, color: &mut [f32; 3]) -> bool {
        unsafe { sys::igColorEdit3(label.as_ptr(), color.as_mut_ptr(), 0) }
    }

    fn color_edit4(&mut self, label: &CStr, color: &mut [f32; 4]) -> bool {
        unsafe { sys::igColorEdit4(label.as_ptr(), color.as_mut_ptr(), 0) }
    }

    fn same_line(&mut self) {
        unsafe { sys::igSameLine(0.0, -1.0) }
    }

    fn separator(&mut self) {
        unsafe { sys::igSeparator() }
    }

    fn spacing(&mut self) {
        unsafe { sys::igSpacing() }
    }

    fn dummy(&mut self, size: sys::ImVec2) {
        unsafe { sys::igDummy(size) }
    }

    fn indent(&mut self, width: f32) {
        unsafe { sys::igIndent(width) }
    }

    fn unindent(&mut self, width: f32) {
        unsafe { sys::igUnindent(width) }
    }

    fn tree_node(&mut self, label: &CStr) -> bool {
        unsafe { sys::igTreeNodeEx_Str(label.as_ptr(), 0) }
    }

    fn tree_pop(&mut self) {
        unsafe { sys::igTreePop() }
    }

    fn begin_combo(&mut self, label: &CStr, preview: Option<&CStr>, flags: ComboFlags) -> bool {
        unsafe { sys::igBeginCombo(label.as_ptr(), opt_ptr(preview), flags.bits()) }
    }

    fn end_combo(&mut self) {
        unsafe { sys::igEndCombo() }
    }

    fn selectable(&mut self, label: &CStr, selected: bool, flags: SelectableFlags) -> bool {
        unsafe { sys::igSelectable_Bool(label.as_ptr(), selected, flags.bits(), ZERO) }
    }

    fn begin_main_menu_bar(&mut self) -> bool {
        unsafe { sys::igBeginMainMenuBar() }
    }

    fn end_main_menu_bar(&mut self) {
        unsafe { sys::igEndMainMenuBar() }
    }

    fn begin_menu(&mut self, label: &CStr, enabled: bool) -> bool {
        unsafe { sys::igBeginMenu(label.as_ptr(), enabled) }
    }

    fn end_menu(&mut self) {
        unsafe { sys::igEndMenu() }
    }

    fn menu_item(
        &mut self,
        label: &CStr,
        shortcut: Option<&CStr>,
        selected: bool,
        enabled: bool,
    ) -> bool {
        unsafe { sys::igMenuItem_Bool(label.as_ptr(), opt_ptr(shortcut), selected, enabled) }
    }

    fn set_tooltip(&mut self, text: &CStr) {
        unsafe { sys::igSetTooltip(c"%s".as_ptr(), text.as_ptr()) }
    }

    fn begin_tooltip(&mut self) -> bool {
        unsafe { sys::igBeginTooltip() }
    }

    fn end_tooltip(&mut self) {
        unsafe { sys::igEndTooltip() }
    }

    fn begin_popup(&mut self, id: &CStr, flags: WindowFlags) -> bool {
        unsafe { sys::igBeginPopup(id.as_ptr(), flags.bits()) }
    }

    fn begin_popup_modal(
        &mut self,
        name: &CStr,
        open: Option<&mut bool>,
        flags: WindowFlags,
    ) -> bool {
        unsafe { sys::igBeginPopupModal(name.as_ptr(), open_ptr(open), flags.bits()) }
    }

    fn end_popup(&mut self) {
        unsafe { sys::igEndPopup() }
    }

    fn open_popup(&mut self, id: &CStr) {
        unsafe { sys::igOpenPopup_Str(id.as_ptr(), 0) }
    }

    fn close_current_popup(&mut self) {
        unsafe { sys::igCloseCurrentPopup() }
    }

    fn begin_table(&mut self, id: &CStr, columns: i32, flags: TableFlags) -> bool {
        unsafe { sys::igBeginTable(id.as_ptr(), columns, flags.bits(), ZERO, 0.0) }
    }

    fn end_table(&mut self) {
        unsafe { sys::igEndTable() }
    }

    fn table_next_row(&mut self) {
        unsafe { sys::igTableNextRow(0, 0.0) }
    }

    fn table_next_column(&mut self) -> bool {
        unsafe { sys::igTableNextColumn() }
    }

    fn table_set_column_index(&mut self, column: i32) -> bool {
        unsafe { sys::igTableSetColumnIndex(column) }
    }

    fn table_setup_column(
        &mut self,
        label: &CStr,
        flags: TableColumnFlags,
        init_width_or_weight: f32,
    ) {
        unsafe { sys::igTableSetupColumn(label.as_ptr(), flags.bits(), init_width_or_weight, 0) }
    }

    fn table_headers_row(&mut self) {
        unsafe { sys::igTableHeadersRow() }
    }

    fn columns(&mut self, count: i32, id: Option<&CStr>, border: bool) {
        unsafe { sys::igColumns(count, opt_ptr(id), border) }
    }

    fn next_column(&mut self) {
        unsafe { sys::igNextColumn() }
    }

    fn push_style_color(&mut self, color: StyleColor, value: sys::ImVec4) {
        unsafe { sys::igPushStyleColor_Vec4(color.raw(), value) }
    }

    fn pop_style_color(&mut self, count: i32) {
        unsafe { sys::igPopStyleColor(count) }
    }

    fn push_style_var_float(&mut self, var: StyleVar, value: f32) {
        unsafe { sys::igPushStyleVar_Float(var.raw(), value) }
    }

    fn push_style_var_vec2(&mut self, var: StyleVar, value: sys::ImVec2) {
        unsafe { sys::igPushStyleVar_Vec2(var.raw(), value) }
    }

    fn pop_style_var(&mut self, count: i32) {
        unsafe { sys::igPopStyleVar(count) }
    }

    fn push_id_int(&mut self, id: i32) {
        unsafe { sys::igPushID_Int(id) }
    }

    fn push_id_str(&mut self, id: &CStr) {
        unsafe { sys::igPushID_Str(id.as_ptr()) }
    }

    fn pop_id(&mut self) {
        unsafe { sys::igPopID() }
    }

    fn is_item_hovered(&mut self) -> bool {
        unsafe { sys::igIsItemHovered(0) }
    }

    fn is_item_clicked(&mut self, button: MouseButton) -> bool {
        unsafe { sys::igIsItemClicked(button as i32) }
    }

    fn is_item_active(&mut self) -> bool {
        unsafe { sys::igIsItemActive() }
    }

    fn set_next_window_pos(&mut self, pos: sys::ImVec2, cond: Condition) {
        unsafe { sys::igSetNextWindowPos(pos, cond.raw(), ZERO) }
    }

    fn set_next_window_size(&mut self, size: sys::ImVec2, cond: Condition) {
        unsafe { sys::igSetNextWindowSize(size, cond.raw()) }
    }

    fn show_demo_window(&mut self, open: Option<&mut bool>) {
        unsafe { sys::igShowDemoWindow(open_ptr(open)) }
    }
}
