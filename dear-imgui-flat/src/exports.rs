//! The exported C surface
//!
//! One `extern "C"` symbol per adapter operation, each running the adapter
//! function over [`NativeCore`] inside [`guard`]. A rejected call is logged
//! and returns `0` (or null from [`imgui_create_context`]); nothing unwinds
//! into the caller.
//!
//! A rejected `imgui_begin` or `imgui_push_*` pushes nothing, so the caller
//! must skip the matching end or pop. Dear ImGui asserts on unbalanced stacks.
//!
//! # Safety
//!
//! Apart from [`imgui_create_context`], every function must be called on the
//! thread that owns the current context, with a context current. Pointer
//! arguments follow the rules in [`adapter`](crate::adapter).

#![allow(clippy::missing_safety_doc)]

use std::ffi::{c_char, c_int};
use std::ptr;

use crate::adapter;
use crate::convert::guard;
use crate::handle::GlfwWindow;
use crate::native::NativeCore;
use crate::sys;

// Context

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_create_context() -> *mut sys::ImGuiContext {
    guard("imgui_create_context", ptr::null_mut(), || unsafe {
        adapter::create_context(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_destroy_context(ctx: *mut sys::ImGuiContext) {
    guard("imgui_destroy_context", (), || unsafe {
        adapter::destroy_context(&mut NativeCore::new(), ctx)
    })
}

// Backends

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_init_for_glfw(
    window: *mut GlfwWindow,
    install_callbacks: c_int,
) -> c_int {
    guard("imgui_init_for_glfw", 0, || unsafe {
        adapter::init_for_glfw(&mut NativeCore::new(), window, install_callbacks)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_init_for_opengl3(glsl_version: *const c_char) -> c_int {
    guard("imgui_init_for_opengl3", 0, || unsafe {
        adapter::init_for_opengl3(&mut NativeCore::new(), glsl_version)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_shutdown_opengl3() {
    guard("imgui_shutdown_opengl3", (), || unsafe {
        adapter::shutdown_opengl3(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_shutdown_glfw() {
    guard("imgui_shutdown_glfw", (), || unsafe { adapter::shutdown_glfw(&mut NativeCore::new()) })
}

// Frame

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_new_frame() {
    guard("imgui_new_frame", (), || unsafe { adapter::new_frame(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_render() {
    guard("imgui_render", (), || unsafe { adapter::render(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_frame() {
    guard("imgui_end_frame", (), || unsafe { adapter::end_frame(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_opengl3_render_draw_data() {
    guard("imgui_opengl3_render_draw_data", (), || unsafe {
        adapter::opengl3_render_draw_data(&mut NativeCore::new())
    })
}

// IO

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_io_set_display_size(width: f32, height: f32) {
    guard("imgui_io_set_display_size", (), || unsafe {
        adapter::io_set_display_size(&mut NativeCore::new(), width, height)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_io_want_capture_mouse() -> c_int {
    guard("imgui_io_want_capture_mouse", 0, || unsafe {
        adapter::io_want_capture_mouse(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_io_want_capture_keyboard() -> c_int {
    guard("imgui_io_want_capture_keyboard", 0, || unsafe {
        adapter::io_want_capture_keyboard(&mut NativeCore::new())
    })
}

// Windows and widgets

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin(
    name: *const c_char,
    p_open: *mut c_int,
    flags: c_int,
) -> c_int {
    guard("imgui_begin", 0, || unsafe {
        adapter::begin(&mut NativeCore::new(), name, p_open, flags)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end() {
    guard("imgui_end", (), || unsafe { adapter::end(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_text(text: *const c_char) {
    guard("imgui_text", (), || unsafe { adapter::text(&mut NativeCore::new(), text) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_button(label: *const c_char) -> c_int {
    guard("imgui_button", 0, || unsafe { adapter::button(&mut NativeCore::new(), label) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_checkbox(label: *const c_char, v: *mut c_int) -> c_int {
    guard("imgui_checkbox", 0, || unsafe { adapter::checkbox(&mut NativeCore::new(), label, v) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_slider_float(
    label: *const c_char,
    v: *mut f32,
    v_min: f32,
    v_max: f32,
) -> c_int {
    guard("imgui_slider_float", 0, || unsafe {
        adapter::slider_float(&mut NativeCore::new(), label, v, v_min, v_max)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_slider_int(
    label: *const c_char,
    v: *mut c_int,
    v_min: c_int,
    v_max: c_int,
) -> c_int {
    guard("imgui_slider_int", 0, || unsafe {
        adapter::slider_int(&mut NativeCore::new(), label, v, v_min, v_max)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_input_float(label: *const c_char, v: *mut f32) -> c_int {
    guard("imgui_input_float", 0, || unsafe {
        adapter::input_float(&mut NativeCore::new(), label, v)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_input_int(label: *const c_char, v: *mut c_int) -> c_int {
    guard("imgui_input_int", 0, || unsafe { adapter::input_int(&mut NativeCore::new(), label, v) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_color_edit3(label: *const c_char, col: *mut f32) -> c_int {
    guard("imgui_color_edit3", 0, || unsafe {
        adapter::color_edit3(&mut NativeCore::new(), label, col)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_color_edit4(label: *const c_char, col: *mut f32) -> c_int {
    guard("imgui_color_edit4", 0, || unsafe {
        adapter::color_edit4(&mut NativeCore::new(), label, col)
    })
}

// Layout

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_same_line() {
    guard("imgui_same_line", (), || unsafe { adapter::same_line(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_separator() {
    guard("imgui_separator", (), || unsafe { adapter::separator(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_spacing() {
    guard("imgui_spacing", (), || unsafe { adapter::spacing(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_dummy(width: f32, height: f32) {
    guard("imgui_dummy", (), || unsafe { adapter::dummy(&mut NativeCore::new(), width, height) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_indent(indent_w: f32) {
    guard("imgui_indent", (), || unsafe { adapter::indent(&mut NativeCore::new(), indent_w) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_unindent(indent_w: f32) {
    guard("imgui_unindent", (), || unsafe { adapter::unindent(&mut NativeCore::new(), indent_w) })
}

// Trees

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_tree_node(label: *const c_char) -> c_int {
    guard("imgui_tree_node", 0, || unsafe { adapter::tree_node(&mut NativeCore::new(), label) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_tree_pop() {
    guard("imgui_tree_pop", (), || unsafe { adapter::tree_pop(&mut NativeCore::new()) })
}

// Combos

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_combo(
    label: *const c_char,
    preview_value: *const c_char,
    flags: c_int,
) -> c_int {
    guard("imgui_begin_combo", 0, || unsafe {
        adapter::begin_combo(&mut NativeCore::new(), label, preview_value, flags)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_combo() {
    guard("imgui_end_combo", (), || unsafe { adapter::end_combo(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_selectable(
    label: *const c_char,
    selected: c_int,
    flags: c_int,
) -> c_int {
    guard("imgui_selectable", 0, || unsafe {
        adapter::selectable(&mut NativeCore::new(), label, selected, flags)
    })
}

// Menus

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_main_menu_bar() -> c_int {
    guard("imgui_begin_main_menu_bar", 0, || unsafe {
        adapter::begin_main_menu_bar(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_main_menu_bar() {
    guard("imgui_end_main_menu_bar", (), || unsafe {
        adapter::end_main_menu_bar(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_menu(label: *const c_char, enabled: c_int) -> c_int {
    guard("imgui_begin_menu", 0, || unsafe {
        adapter::begin_menu(&mut NativeCore::new(), label, enabled)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_menu() {
    guard("imgui_end_menu", (), || unsafe { adapter::end_menu(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_menu_item(
    label: *const c_char,
    shortcut: *const c_char,
    selected: c_int,
    enabled: c_int,
) -> c_int {
    guard("imgui_menu_item", 0, || unsafe {
        adapter::menu_item(&mut NativeCore::new(), label, shortcut, selected, enabled)
    })
}

// Tooltips

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_set_tooltip(text: *const c_char) {
    guard("imgui_set_tooltip", (), || unsafe { adapter::set_tooltip(&mut NativeCore::new(), text) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_tooltip() -> c_int {
    guard("imgui_begin_tooltip", 0, || unsafe { adapter::begin_tooltip(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_tooltip() {
    guard("imgui_end_tooltip", (), || unsafe { adapter::end_tooltip(&mut NativeCore::new()) })
}

// Popups

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_popup(str_id: *const c_char, flags: c_int) -> c_int {
    guard("imgui_begin_popup", 0, || unsafe {
        adapter::begin_popup(&mut NativeCore::new(), str_id, flags)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_popup_modal(
    name: *const c_char,
    p_open: *mut c_int,
    flags: c_int,
) -> c_int {
    guard("imgui_begin_popup_modal", 0, || unsafe {
        adapter::begin_popup_modal(&mut NativeCore::new(), name, p_open, flags)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_popup() {
    guard("imgui_end_popup", (), || unsafe { adapter::end_popup(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_open_popup(str_id: *const c_char) {
    guard("imgui_open_popup", (), || unsafe { adapter::open_popup(&mut NativeCore::new(), str_id) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_close_current_popup() {
    guard("imgui_close_current_popup", (), || unsafe {
        adapter::close_current_popup(&mut NativeCore::new())
    })
}

// Tables

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_begin_table(
    str_id: *const c_char,
    column: c_int,
    flags: c_int,
) -> c_int {
    guard("imgui_begin_table", 0, || unsafe {
        adapter::begin_table(&mut NativeCore::new(), str_id, column, flags)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_end_table() {
    guard("imgui_end_table", (), || unsafe { adapter::end_table(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_table_next_row() {
    guard("imgui_table_next_row", (), || unsafe { adapter::table_next_row(&mut NativeCore::new()) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_table_next_column() -> c_int {
    guard("imgui_table_next_column", 0, || unsafe {
        adapter::table_next_column(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_table_set_column_index(column_n: c_int) -> c_int {
    guard("imgui_table_set_column_index", 0, || unsafe {
        adapter::table_set_column_index(&mut NativeCore::new(), column_n)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_table_setup_column(
    label: *const c_char,
    flags: c_int,
    init_width_or_weight: f32,
) {
    guard("imgui_table_setup_column", (), || unsafe {
        adapter::table_setup_column(&mut NativeCore::new(), label, flags, init_width_or_weight)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_table_headers_row() {
    guard("imgui_table_headers_row", (), || unsafe {
        adapter::table_headers_row(&mut NativeCore::new())
    })
}

// Legacy columns

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_columns(count: c_int, id: *const c_char, border: c_int) {
    guard("imgui_columns", (), || unsafe {
        adapter::columns(&mut NativeCore::new(), count, id, border)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_next_column() {
    guard("imgui_next_column", (), || unsafe { adapter::next_column(&mut NativeCore::new()) })
}

// Style stacks

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_push_style_color(idx: c_int, r: f32, g: f32, b: f32, a: f32) {
    guard("imgui_push_style_color", (), || unsafe {
        adapter::push_style_color(&mut NativeCore::new(), idx, r, g, b, a)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_pop_style_color(count: c_int) {
    guard("imgui_pop_style_color", (), || unsafe {
        adapter::pop_style_color(&mut NativeCore::new(), count)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_push_style_var_float(idx: c_int, val: f32) {
    guard("imgui_push_style_var_float", (), || unsafe {
        adapter::push_style_var_float(&mut NativeCore::new(), idx, val)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_push_style_var_vec2(idx: c_int, x: f32, y: f32) {
    guard("imgui_push_style_var_vec2", (), || unsafe {
        adapter::push_style_var_vec2(&mut NativeCore::new(), idx, x, y)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_pop_style_var(count: c_int) {
    guard("imgui_pop_style_var", (), || unsafe {
        adapter::pop_style_var(&mut NativeCore::new(), count)
    })
}

// ID stack

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_push_id_int(int_id: c_int) {
    guard("imgui_push_id_int", (), || unsafe {
        adapter::push_id_int(&mut NativeCore::new(), int_id)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_push_id_str(str_id: *const c_char) {
    guard("imgui_push_id_str", (), || unsafe {
        adapter::push_id_str(&mut NativeCore::new(), str_id)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_pop_id() {
    guard("imgui_pop_id", (), || unsafe { adapter::pop_id(&mut NativeCore::new()) })
}

// Item queries

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_is_item_hovered() -> c_int {
    guard("imgui_is_item_hovered", 0, || unsafe {
        adapter::is_item_hovered(&mut NativeCore::new())
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_is_item_clicked(mouse_button: c_int) -> c_int {
    guard("imgui_is_item_clicked", 0, || unsafe {
        adapter::is_item_clicked(&mut NativeCore::new(), mouse_button)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_is_item_active() -> c_int {
    guard("imgui_is_item_active", 0, || unsafe { adapter::is_item_active(&mut NativeCore::new()) })
}

// Window placement

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_set_next_window_pos(x: f32, y: f32, cond: c_int) {
    guard("imgui_set_next_window_pos", (), || unsafe {
        adapter::set_next_window_pos(&mut NativeCore::new(), x, y, cond)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_set_next_window_size(width: f32, height: f32, cond: c_int) {
    guard("imgui_set_next_window_size", (), || unsafe {
        adapter::set_next_window_size(&mut NativeCore::new(), width, height, cond)
    })
}

// Diagnostics

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imgui_show_demo_window(p_open: *mut c_int) {
    guard("imgui_show_demo_window", (), || unsafe {
        adapter::show_demo_window(&mut NativeCore::new(), p_open)
    })
}
