//! Boundary operations, generic over the [`GuiCore`] they forward to
//!
//! Each function takes the boundary representation of its arguments, converts
//! it, and makes exactly one call into `core`. Rejected arguments (null
//! required pointers, out-of-range enum indices, mismatched style variable
//! arity) return an error before `core` is touched. The exported `imgui_*`
//! functions run these under [`guard`](crate::convert::guard), which logs the
//! error and returns the failure value.
//!
//! # Safety
//!
//! Every pointer argument must be null or valid for the access its C
//! declaration implies, for the duration of the call: text is NUL-terminated,
//! `*mut c_int`/`*mut f32` point to one writable value, colors point to 3 or
//! 4 writable floats.

use std::ffi::{c_char, c_int};

use crate::convert::{
    c_bool, c_text, color3, color4, required, required_text, vec2, vec4, with_int_bool,
    with_open_flag,
};
use crate::core::GuiCore;
use crate::error::{FlatError, FlatResult};
use crate::flags::{
    BoundaryFlags, ComboFlags, SelectableFlags, TableColumnFlags, TableFlags, WindowFlags,
};
use crate::handle::{ContextHandle, GlfwWindow, WindowHandle};
use crate::input::MouseButton;
use crate::style::{StyleColor, StyleVar, StyleVarKind};
use crate::{Condition, sys};

fn checked<T>(raw: i32, operation: &'static str, kind: &'static str) -> FlatResult<T>
where
    T: TryFrom<i32, Error = i32>,
{
    T::try_from(raw).map_err(|value| FlatError::invalid_enum(operation, kind, value))
}

fn style_var(
    raw: i32,
    expected: StyleVarKind,
    operation: &'static str,
) -> FlatResult<StyleVar> {
    let var: StyleVar = checked(raw, operation, "StyleVar")?;
    if var.kind() == expected {
        Ok(var)
    } else {
        Err(FlatError::StyleVarArity {
            operation,
            var,
            expected: var.kind(),
        })
    }
}

// Context

pub fn create_context<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<*mut sys::ImGuiContext> {
    core.create_context()
        .map(ContextHandle::as_raw)
        .ok_or_else(|| FlatError::context_creation("igCreateContext returned null"))
}

/// Destroy `ctx`. A null `ctx` destroys the current context.
pub fn destroy_context<C: GuiCore + ?Sized>(
    core: &mut C,
    ctx: *mut sys::ImGuiContext,
) -> FlatResult<()> {
    core.destroy_context(ContextHandle::from_raw(ctx));
    Ok(())
}

// Backends

pub fn init_for_glfw<C: GuiCore + ?Sized>(
    core: &mut C,
    window: *mut GlfwWindow,
    install_callbacks: c_int,
) -> FlatResult<c_int> {
    let window = WindowHandle::from_raw(window)
        .ok_or(FlatError::null_argument("imgui_init_for_glfw", "window"))?;
    Ok(c_bool(core.init_platform(window, install_callbacks != 0)))
}

/// # Safety
///
/// `glsl_version` must be null or NUL-terminated.
pub unsafe fn init_for_opengl3<C: GuiCore + ?Sized>(
    core: &mut C,
    glsl_version: *const c_char,
) -> FlatResult<c_int> {
    let glsl_version = unsafe { c_text(glsl_version) };
    Ok(c_bool(core.init_renderer(glsl_version)))
}

pub fn shutdown_opengl3<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.shutdown_renderer();
    Ok(())
}

pub fn shutdown_glfw<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.shutdown_platform();
    Ok(())
}

// Frame

pub fn new_frame<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.new_frame();
    Ok(())
}

pub fn render<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.render();
    Ok(())
}

pub fn end_frame<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_frame();
    Ok(())
}

pub fn opengl3_render_draw_data<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.render_draw_data();
    Ok(())
}

// IO

pub fn io_set_display_size<C: GuiCore + ?Sized>(
    core: &mut C,
    width: f32,
    height: f32,
) -> FlatResult<()> {
    core.set_display_size(vec2(width, height));
    Ok(())
}

pub fn io_want_capture_mouse<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.want_capture_mouse()))
}

pub fn io_want_capture_keyboard<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.want_capture_keyboard()))
}

// Windows and widgets

pub unsafe fn begin<C: GuiCore + ?Sized>(
    core: &mut C,
    name: *const c_char,
    p_open: *mut c_int,
    flags: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_begin";
    let name = unsafe { required_text(name, OP, "name") }?;
    let flags = WindowFlags::from_boundary(flags, OP);
    let visible = unsafe { with_open_flag(p_open, |open| core.begin(name, open, flags)) };
    Ok(c_bool(visible))
}

pub fn end<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end();
    Ok(())
}

pub unsafe fn text<C: GuiCore + ?Sized>(core: &mut C, text: *const c_char) -> FlatResult<()> {
    let text = unsafe { required_text(text, "imgui_text", "text") }?;
    core.text(text);
    Ok(())
}

pub unsafe fn button<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
) -> FlatResult<c_int> {
    let label = unsafe { required_text(label, "imgui_button", "label") }?;
    Ok(c_bool(core.button(label, vec2(0.0, 0.0))))
}

pub unsafe fn checkbox<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    v: *mut c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_checkbox";
    let label = unsafe { required_text(label, OP, "label") }?;
    let v = required(v, OP, "v")?;
    let changed = unsafe { with_int_bool(v, |value| core.checkbox(label, value)) };
    Ok(c_bool(changed))
}

pub unsafe fn slider_float<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    v: *mut f32,
    v_min: f32,
    v_max: f32,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_slider_float";
    let label = unsafe { required_text(label, OP, "label") }?;
    let mut v = required(v, OP, "v")?;
    Ok(c_bool(core.slider_float(label, unsafe { v.as_mut() }, v_min, v_max)))
}

pub unsafe fn slider_int<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    v: *mut c_int,
    v_min: c_int,
    v_max: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_slider_int";
    let label = unsafe { required_text(label, OP, "label") }?;
    let mut v = required(v, OP, "v")?;
    Ok(c_bool(core.slider_int(label, unsafe { v.as_mut() }, v_min, v_max)))
}

pub unsafe fn input_float<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    v: *mut f32,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_input_float";
    let label = unsafe { required_text(label, OP, "label") }?;
    let mut v = required(v, OP, "v")?;
    Ok(c_bool(core.input_float(label, unsafe { v.as_mut() })))
}

pub unsafe fn input_int<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    v: *mut c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_input_int";
    let label = unsafe { required_text(label, OP, "label") }?;
    let mut v = required(v, OP, "v")?;
    Ok(c_bool(core.input_int(label, unsafe { v.as_mut() })))
}

pub unsafe fn color_edit3<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    col: *mut f32,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_color_edit3";
    let label = unsafe { required_text(label, OP, "label") }?;
    let col = required(col, OP, "col")?;
    Ok(c_bool(core.color_edit3(label, unsafe { color3(col) })))
}

pub unsafe fn color_edit4<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    col: *mut f32,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_color_edit4";
    let label = unsafe { required_text(label, OP, "label") }?;
    let col = required(col, OP, "col")?;
    Ok(c_bool(core.color_edit4(label, unsafe { color4(col) })))
}

// Layout

pub fn same_line<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.same_line();
    Ok(())
}

pub fn separator<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.separator();
    Ok(())
}

pub fn spacing<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.spacing();
    Ok(())
}

pub fn dummy<C: GuiCore + ?Sized>(core: &mut C, width: f32, height: f32) -> FlatResult<()> {
    core.dummy(vec2(width, height));
    Ok(())
}

pub fn indent<C: GuiCore + ?Sized>(core: &mut C, indent_w: f32) -> FlatResult<()> {
    core.indent(indent_w);
    Ok(())
}

pub fn unindent<C: GuiCore + ?Sized>(core: &mut C, indent_w: f32) -> FlatResult<()> {
    core.unindent(indent_w);
    Ok(())
}

// Trees

pub unsafe fn tree_node<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
) -> FlatResult<c_int> {
    let label = unsafe { required_text(label, "imgui_tree_node", "label") }?;
    Ok(c_bool(core.tree_node(label)))
}

pub fn tree_pop<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.tree_pop();
    Ok(())
}

// Combos

pub unsafe fn begin_combo<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    preview_value: *const c_char,
    flags: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_begin_combo";
    let label = unsafe { required_text(label, OP, "label") }?;
    let preview = unsafe { c_text(preview_value) };
    let flags = ComboFlags::from_boundary(flags, OP);
    Ok(c_bool(core.begin_combo(label, preview, flags)))
}

pub fn end_combo<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_combo();
    Ok(())
}

pub unsafe fn selectable<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    selected: c_int,
    flags: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_selectable";
    let label = unsafe { required_text(label, OP, "label") }?;
    let flags = SelectableFlags::from_boundary(flags, OP);
    Ok(c_bool(core.selectable(label, selected != 0, flags)))
}

// Menus

pub fn begin_main_menu_bar<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.begin_main_menu_bar()))
}

pub fn end_main_menu_bar<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_main_menu_bar();
    Ok(())
}

pub unsafe fn begin_menu<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    enabled: c_int,
) -> FlatResult<c_int> {
    let label = unsafe { required_text(label, "imgui_begin_menu", "label") }?;
    Ok(c_bool(core.begin_menu(label, enabled != 0)))
}

pub fn end_menu<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_menu();
    Ok(())
}

pub unsafe fn menu_item<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    shortcut: *const c_char,
    selected: c_int,
    enabled: c_int,
) -> FlatResult<c_int> {
    let label = unsafe { required_text(label, "imgui_menu_item", "label") }?;
    let shortcut = unsafe { c_text(shortcut) };
    Ok(c_bool(core.menu_item(
        label,
        shortcut,
        selected != 0,
        enabled != 0,
    )))
}

// Tooltips

pub unsafe fn set_tooltip<C: GuiCore + ?Sized>(
    core: &mut C,
    text: *const c_char,
) -> FlatResult<()> {
    let text = unsafe { required_text(text, "imgui_set_tooltip", "text") }?;
    core.set_tooltip(text);
    Ok(())
}

pub fn begin_tooltip<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.begin_tooltip()))
}

pub fn end_tooltip<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_tooltip();
    Ok(())
}

// Popups

pub unsafe fn begin_popup<C: GuiCore + ?Sized>(
    core: &mut C,
    str_id: *const c_char,
    flags: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_begin_popup";
    let id = unsafe { required_text(str_id, OP, "str_id") }?;
    let flags = WindowFlags::from_boundary(flags, OP);
    Ok(c_bool(core.begin_popup(id, flags)))
}

pub unsafe fn begin_popup_modal<C: GuiCore + ?Sized>(
    core: &mut C,
    name: *const c_char,
    p_open: *mut c_int,
    flags: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_begin_popup_modal";
    let name = unsafe { required_text(name, OP, "name") }?;
    let flags = WindowFlags::from_boundary(flags, OP);
    let open = unsafe { with_open_flag(p_open, |open| core.begin_popup_modal(name, open, flags)) };
    Ok(c_bool(open))
}

pub fn end_popup<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_popup();
    Ok(())
}

pub unsafe fn open_popup<C: GuiCore + ?Sized>(
    core: &mut C,
    str_id: *const c_char,
) -> FlatResult<()> {
    let id = unsafe { required_text(str_id, "imgui_open_popup", "str_id") }?;
    core.open_popup(id);
    Ok(())
}

pub fn close_current_popup<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.close_current_popup();
    Ok(())
}

// Tables

pub unsafe fn begin_table<C: GuiCore + ?Sized>(
    core: &mut C,
    str_id: *const c_char,
    column: c_int,
    flags: c_int,
) -> FlatResult<c_int> {
    const OP: &str = "imgui_begin_table";
    let id = unsafe { required_text(str_id, OP, "str_id") }?;
    let flags = TableFlags::from_boundary(flags, OP);
    Ok(c_bool(core.begin_table(id, column, flags)))
}

pub fn end_table<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.end_table();
    Ok(())
}

pub fn table_next_row<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.table_next_row();
    Ok(())
}

pub fn table_next_column<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.table_next_column()))
}

pub fn table_set_column_index<C: GuiCore + ?Sized>(
    core: &mut C,
    column_n: c_int,
) -> FlatResult<c_int> {
    Ok(c_bool(core.table_set_column_index(column_n)))
}

pub unsafe fn table_setup_column<C: GuiCore + ?Sized>(
    core: &mut C,
    label: *const c_char,
    flags: c_int,
    init_width_or_weight: f32,
) -> FlatResult<()> {
    const OP: &str = "imgui_table_setup_column";
    let label = unsafe { required_text(label, OP, "label") }?;
    let flags = TableColumnFlags::from_boundary(flags, OP);
    core.table_setup_column(label, flags, init_width_or_weight);
    Ok(())
}

pub fn table_headers_row<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.table_headers_row();
    Ok(())
}

// Legacy columns

pub unsafe fn columns<C: GuiCore + ?Sized>(
    core: &mut C,
    count: c_int,
    id: *const c_char,
    border: c_int,
) -> FlatResult<()> {
    let id = unsafe { c_text(id) };
    core.columns(count, id, border != 0);
    Ok(())
}

pub fn next_column<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.next_column();
    Ok(())
}

// Style stacks

pub fn push_style_color<C: GuiCore + ?Sized>(
    core: &mut C,
    idx: c_int,
    r: f32,
    g: f32,
    b: f32,
    a: f32,
) -> FlatResult<()> {
    let color: StyleColor = checked(idx, "imgui_push_style_color", "StyleColor")?;
    core.push_style_color(color, vec4(r, g, b, a));
    Ok(())
}

pub fn pop_style_color<C: GuiCore + ?Sized>(core: &mut C, count: c_int) -> FlatResult<()> {
    core.pop_style_color(count);
    Ok(())
}

pub fn push_style_var_float<C: GuiCore + ?Sized>(
    core: &mut C,
    idx: c_int,
    val: f32,
) -> FlatResult<()> {
    let var = style_var(idx, StyleVarKind::Float, "imgui_push_style_var_float")?;
    core.push_style_var_float(var, val);
    Ok(())
}

pub fn push_style_var_vec2<C: GuiCore + ?Sized>(
    core: &mut C,
    idx: c_int,
    x: f32,
    y: f32,
) -> FlatResult<()> {
    let var = style_var(idx, StyleVarKind::Vec2, "imgui_push_style_var_vec2")?;
    core.push_style_var_vec2(var, vec2(x, y));
    Ok(())
}

pub fn pop_style_var<C: GuiCore + ?Sized>(core: &mut C, count: c_int) -> FlatResult<()> {
    core.pop_style_var(count);
    Ok(())
}

// ID stack

pub fn push_id_int<C: GuiCore + ?Sized>(core: &mut C, int_id: c_int) -> FlatResult<()> {
    core.push_id_int(int_id);
    Ok(())
}

pub unsafe fn push_id_str<C: GuiCore + ?Sized>(
    core: &mut C,
    str_id: *const c_char,
) -> FlatResult<()> {
    let id = unsafe { required_text(str_id, "imgui_push_id_str", "str_id") }?;
    core.push_id_str(id);
    Ok(())
}

pub fn pop_id<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<()> {
    core.pop_id();
    Ok(())
}

// Item queries

pub fn is_item_hovered<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.is_item_hovered()))
}

pub fn is_item_clicked<C: GuiCore + ?Sized>(
    core: &mut C,
    mouse_button: c_int,
) -> FlatResult<c_int> {
    let button: MouseButton = checked(mouse_button, "imgui_is_item_clicked", "MouseButton")?;
    Ok(c_bool(core.is_item_clicked(button)))
}

pub fn is_item_active<C: GuiCore + ?Sized>(core: &mut C) -> FlatResult<c_int> {
    Ok(c_bool(core.is_item_active()))
}

// Window placement

pub fn set_next_window_pos<C: GuiCore + ?Sized>(
    core: &mut C,
    x: f32,
    y: f32,
    cond: c_int,
) -> FlatResult<()> {
    let cond: Condition = checked(cond, "imgui_set_next_window_pos", "Condition")?;
    core.set_next_window_pos(vec2(x, y), cond);
    Ok(())
}

pub fn set_next_window_size<C: GuiCore + ?Sized>(
    core: &mut C,
    width: f32,
    height: f32,
    cond: c_int,
) -> FlatResult<()> {
    let cond: Condition = checked(cond, "imgui_set_next_window_size", "Condition")?;
    core.set_next_window_size(vec2(width, height), cond);
    Ok(())
}

// Diagnostics

pub unsafe fn show_demo_window<C: GuiCore + ?Sized>(
    core: &mut C,
    p_open: *mut c_int,
) -> FlatResult<()> {
    unsafe { with_open_flag(p_open, |open| core.show_demo_window(open)) };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingCore};
    use pretty_assertions::assert_eq;
    use std::ptr;

    #[test]
    fn closing_a_window_is_written_back_through_the_open_flag() {
        let mut core = RecordingCore::returning([true]);
        core.write_flag = Some(false);

        let ctx = create_context(&mut core).unwrap();
        assert!(!ctx.is_null());

        let mut open: c_int = 1;
        let visible = unsafe { begin(&mut core, c"Debug".as_ptr(), &mut open, 0) }.unwrap();

        assert_eq!(open, 0);
        assert_eq!(visible, 1);
        assert_eq!(
            core.last(),
            Some(&Call::Begin {
                name: "Debug".into(),
                open: Some(true),
                flags: WindowFlags::empty(),
            })
        );
    }

    #[test]
    fn begin_result_is_independent_of_the_open_flag() {
        let mut core = RecordingCore::returning([false]);
        core.write_flag = Some(true);

        let mut open: c_int = 0;
        let visible = unsafe { begin(&mut core, c"W".as_ptr(), &mut open, 0) }.unwrap();

        assert_eq!(visible, 0);
        assert_eq!(open, 1);
    }

    #[test]
    fn null_open_flag_means_no_close_button() {
        let mut core = RecordingCore::returning([true, true]);
        unsafe {
            begin(&mut core, c"W".as_ptr(), ptr::null_mut(), 0).unwrap();
            begin_popup_modal(&mut core, c"M".as_ptr(), ptr::null_mut(), 0).unwrap();
            show_demo_window(&mut core, ptr::null_mut()).unwrap();
        }
        assert!(matches!(core.calls[0], Call::Begin { open: None, .. }));
        assert!(matches!(core.calls[1], Call::BeginPopupModal { open: None, .. }));
        assert_eq!(core.calls[2], Call::ShowDemoWindow(None));
    }

    #[test]
    fn closing_a_modal_or_the_demo_window_is_written_back() {
        let mut core = RecordingCore::returning([true]);
        core.write_flag = Some(false);

        let mut modal_open: c_int = 1;
        let visible =
            unsafe { begin_popup_modal(&mut core, c"Confirm".as_ptr(), &mut modal_open, 0) };
        assert_eq!(visible, Ok(1));
        assert_eq!(modal_open, 0);
        assert_eq!(
            core.last(),
            Some(&Call::BeginPopupModal {
                name: "Confirm".into(),
                open: Some(true),
                flags: WindowFlags::empty(),
            })
        );

        let mut demo_open: c_int = 1;
        unsafe { show_demo_window(&mut core, &mut demo_open) }.unwrap();
        assert_eq!(demo_open, 0);
        assert_eq!(core.last(), Some(&Call::ShowDemoWindow(Some(true))));
    }

    #[test]
    fn modal_result_is_independent_of_the_open_flag() {
        let mut core = RecordingCore::returning([false]);
        core.write_flag = Some(true);

        let mut open: c_int = 0;
        let visible = unsafe { begin_popup_modal(&mut core, c"M".as_ptr(), &mut open, 0) };
        assert_eq!(visible, Ok(0));
        assert_eq!(open, 1);
    }

    #[test]
    fn open_flags_are_normalized_to_zero_or_one() {
        let mut core = RecordingCore::new();
        let mut open: c_int = 7;
        unsafe { show_demo_window(&mut core, &mut open) }.unwrap();
        assert_eq!(open, 1);
        assert_eq!(core.last(), Some(&Call::ShowDemoWindow(Some(true))));

        let mut checked: c_int = -2;
        core.write_flag = Some(false);
        unsafe { checkbox(&mut core, c"c".as_ptr(), &mut checked) }.unwrap();
        assert_eq!(checked, 0);
    }

    #[test]
    fn boolean_results_map_to_one_and_zero() {
        for scripted in [true, false] {
            let expected = if scripted { 1 } else { 0 };
            let mut core = RecordingCore::returning(std::iter::repeat_n(scripted, 32));
            unsafe {
                assert_eq!(button(&mut core, c"b".as_ptr()), Ok(expected));
                assert_eq!(tree_node(&mut core, c"t".as_ptr()), Ok(expected));
                assert_eq!(begin_menu(&mut core, c"m".as_ptr(), 1), Ok(expected));
                assert_eq!(begin_popup(&mut core, c"p".as_ptr(), 0), Ok(expected));
                assert_eq!(begin_table(&mut core, c"t".as_ptr(), 3, 0), Ok(expected));

                let mut flag: c_int = 0;
                let mut number = 0.0f32;
                let mut int: c_int = 0;
                let mut rgba = [0.0f32; 4];
                let label = c"w".as_ptr();
                assert_eq!(checkbox(&mut core, label, &mut flag), Ok(expected));
                assert_eq!(slider_float(&mut core, label, &mut number, 0.0, 1.0), Ok(expected));
                assert_eq!(slider_int(&mut core, label, &mut int, 0, 10), Ok(expected));
                assert_eq!(input_float(&mut core, label, &mut number), Ok(expected));
                assert_eq!(input_int(&mut core, label, &mut int), Ok(expected));
                assert_eq!(color_edit3(&mut core, label, rgba.as_mut_ptr()), Ok(expected));
                assert_eq!(color_edit4(&mut core, label, rgba.as_mut_ptr()), Ok(expected));
                assert_eq!(begin_combo(&mut core, label, ptr::null(), 0), Ok(expected));
                assert_eq!(selectable(&mut core, label, 1, 0), Ok(expected));
                assert_eq!(menu_item(&mut core, label, ptr::null(), 0, 1), Ok(expected));
                assert_eq!(
                    begin_popup_modal(&mut core, label, ptr::null_mut(), 0),
                    Ok(expected)
                );
                assert_eq!(begin(&mut core, label, ptr::null_mut(), 0), Ok(expected));
            }
            assert_eq!(io_want_capture_mouse(&mut core), Ok(expected));
            assert_eq!(io_want_capture_keyboard(&mut core), Ok(expected));
            assert_eq!(begin_main_menu_bar(&mut core), Ok(expected));
            assert_eq!(begin_tooltip(&mut core), Ok(expected));
            assert_eq!(table_next_column(&mut core), Ok(expected));
            assert_eq!(table_set_column_index(&mut core, 2), Ok(expected));
            assert_eq!(is_item_hovered(&mut core), Ok(expected));
            assert_eq!(is_item_active(&mut core), Ok(expected));
            assert_eq!(is_item_clicked(&mut core, 1), Ok(expected));
        }
    }

    #[test]
    fn scalar_pairs_become_exact_vectors() {
        let mut core = RecordingCore::new();
        dummy(&mut core, 12.5, -0.125).unwrap();
        io_set_display_size(&mut core, 1920.0, 1080.0).unwrap();
        set_next_window_pos(&mut core, 3.0e-7, 4.0e9, 4).unwrap();
        set_next_window_size(&mut core, 640.0, 480.0, 2).unwrap();
        push_style_var_vec2(&mut core, StyleVar::WindowPadding.raw(), 8.0, 4.0).unwrap();

        assert_eq!(
            core.calls,
            vec![
                Call::Dummy([12.5, -0.125]),
                Call::SetDisplaySize([1920.0, 1080.0]),
                Call::SetNextWindowPos([3.0e-7, 4.0e9], Condition::FirstUseEver),
                Call::SetNextWindowSize([640.0, 480.0], Condition::Once),
                Call::PushStyleVarVec2(StyleVar::WindowPadding, [8.0, 4.0]),
            ]
        );
    }

    #[test]
    fn color_arrays_are_edited_in_place() {
        let mut core = RecordingCore::returning([true, false]);
        let mut rgb = [0.0f32; 3];
        let mut rgba = [0.0f32; 4];

        let changed = unsafe { color_edit3(&mut core, c"rgb".as_ptr(), rgb.as_mut_ptr()) };
        assert_eq!(changed, Ok(1));
        let changed = unsafe { color_edit4(&mut core, c"rgba".as_ptr(), rgba.as_mut_ptr()) };
        assert_eq!(changed, Ok(0));

        assert_eq!(
            core.calls[0],
            Call::ColorEdit3 {
                label: "rgb".into(),
                addr: rgb.as_ptr() as usize,
            }
        );
        assert_eq!(
            core.calls[1],
            Call::ColorEdit4 {
                label: "rgba".into(),
                addr: rgba.as_ptr() as usize,
            }
        );
        assert_eq!(rgb[0], 1.0);
        assert_eq!(rgba[3], 0.5);
    }

    #[test]
    fn value_pointers_are_written_through() {
        let mut core = RecordingCore::returning([true, true, true, true]);
        core.write_number = Some(42.0);

        let mut f = 1.5f32;
        let mut i: c_int = 3;
        unsafe {
            slider_float(&mut core, c"f".as_ptr(), &mut f, 0.0, 100.0).unwrap();
            slider_int(&mut core, c"i".as_ptr(), &mut i, 0, 100).unwrap();
        }
        assert_eq!((f, i), (42.0, 42));

        let mut f = 0.0f32;
        let mut i: c_int = 0;
        unsafe {
            input_float(&mut core, c"f".as_ptr(), &mut f).unwrap();
            input_int(&mut core, c"i".as_ptr(), &mut i).unwrap();
        }
        assert_eq!((f, i), (42.0, 42));
        assert_eq!(
            core.calls[1],
            Call::SliderInt {
                label: "i".into(),
                value: 3,
                min: 0,
                max: 100,
            }
        );
    }

    #[test]
    fn out_of_range_enums_never_reach_the_core() {
        let mut core = RecordingCore::returning([true]);

        assert!(matches!(
            push_style_color(&mut core, 9_999, 1.0, 1.0, 1.0, 1.0),
            Err(FlatError::InvalidEnum { kind: "StyleColor", value: 9_999, .. })
        ));
        assert!(push_style_var_float(&mut core, -1, 1.0).is_err());
        assert!(set_next_window_pos(&mut core, 0.0, 0.0, 3).is_err());
        assert!(set_next_window_size(&mut core, 0.0, 0.0, 16).is_err());
        assert_eq!(
            is_item_clicked(&mut core, 5),
            Err(FlatError::invalid_enum(
                "imgui_is_item_clicked",
                "MouseButton",
                5
            ))
        );

        assert!(core.calls.is_empty());
        assert_eq!(core.results.len(), 1);
    }

    #[test]
    fn style_vars_pushed_with_the_wrong_arity_are_rejected() {
        let mut core = RecordingCore::new();

        let err = push_style_var_float(&mut core, StyleVar::ItemSpacing.raw(), 2.0).unwrap_err();
        assert_eq!(
            err,
            FlatError::StyleVarArity {
                operation: "imgui_push_style_var_float",
                var: StyleVar::ItemSpacing,
                expected: StyleVarKind::Vec2,
            }
        );
        assert!(push_style_var_vec2(&mut core, StyleVar::Alpha.raw(), 0.5, 0.5).is_err());
        assert!(core.calls.is_empty());

        push_style_var_float(&mut core, StyleVar::Alpha.raw(), 0.5).unwrap();
        assert_eq!(core.last(), Some(&Call::PushStyleVarFloat(StyleVar::Alpha, 0.5)));
    }

    #[test]
    fn null_required_pointers_are_rejected() {
        let mut core = RecordingCore::new();
        let mut v: c_int = 0;
        unsafe {
            assert_eq!(
                begin(&mut core, ptr::null(), ptr::null_mut(), 0),
                Err(FlatError::null_argument("imgui_begin", "name"))
            );
            assert!(text(&mut core, ptr::null()).is_err());
            assert!(checkbox(&mut core, c"c".as_ptr(), ptr::null_mut()).is_err());
            assert!(checkbox(&mut core, ptr::null(), &mut v).is_err());
            assert!(color_edit4(&mut core, c"c".as_ptr(), ptr::null_mut()).is_err());
            assert!(push_id_str(&mut core, ptr::null()).is_err());
        }
        assert!(init_for_glfw(&mut core, ptr::null_mut(), 1).is_err());
        assert!(core.calls.is_empty());
    }

    #[test]
    fn optional_text_forwards_null_as_absent() {
        let mut core = RecordingCore::new();
        unsafe {
            begin_combo(&mut core, c"combo".as_ptr(), ptr::null(), 0).unwrap();
            menu_item(&mut core, c"Quit".as_ptr(), ptr::null(), 0, 1).unwrap();
            columns(&mut core, 2, ptr::null(), 1).unwrap();
            init_for_opengl3(&mut core, ptr::null()).unwrap();
        }
        assert_eq!(
            core.calls,
            vec![
                Call::BeginCombo {
                    label: "combo".into(),
                    preview: None,
                    flags: ComboFlags::empty(),
                },
                Call::MenuItem {
                    label: "Quit".into(),
                    shortcut: None,
                    selected: false,
                    enabled: true,
                },
                Call::Columns {
                    count: 2,
                    id: None,
                    border: true,
                },
                Call::InitRenderer(None),
            ]
        );
    }

    #[test]
    fn text_and_tooltips_are_forwarded_verbatim() {
        let mut core = RecordingCore::new();
        unsafe {
            text(&mut core, c"100% %s %d".as_ptr()).unwrap();
            set_tooltip(&mut core, c"50%".as_ptr()).unwrap();
        }
        assert_eq!(core.calls[0], Call::Text("100% %s %d".into()));
        assert_eq!(core.calls[1], Call::SetTooltip("50%".into()));
    }

    #[test]
    fn unknown_flag_bits_are_dropped_but_the_call_proceeds() {
        let mut core = RecordingCore::returning([true]);
        let raw = WindowFlags::NO_TITLE_BAR.bits() | (1 << 30);
        let visible = unsafe { begin(&mut core, c"W".as_ptr(), ptr::null_mut(), raw) };
        assert_eq!(visible, Ok(1));
        assert_eq!(
            core.last(),
            Some(&Call::Begin {
                name: "W".into(),
                open: None,
                flags: WindowFlags::NO_TITLE_BAR,
            })
        );
    }

    #[test]
    fn zero_condition_means_always() {
        let mut core = RecordingCore::new();
        set_next_window_pos(&mut core, 1.0, 2.0, 0).unwrap();
        assert_eq!(
            core.last(),
            Some(&Call::SetNextWindowPos([1.0, 2.0], Condition::Always))
        );
    }

    #[test]
    fn context_lifecycle_forwards_the_handle() {
        let mut core = RecordingCore::new();
        let ctx = create_context(&mut core).unwrap();
        destroy_context(&mut core, ctx).unwrap();
        assert_eq!(
            core.calls,
            vec![
                Call::CreateContext,
                Call::DestroyContext(ContextHandle::from_raw(ctx)),
            ]
        );

        core.refuse_context = true;
        assert!(matches!(
            create_context(&mut core),
            Err(FlatError::ContextCreation { .. })
        ));
    }

    #[test]
    fn backend_init_reports_the_core_result() {
        let mut core = RecordingCore::returning([true, false]);
        let mut window = 0u8;
        let window = (&mut window as *mut u8).cast::<GlfwWindow>();

        assert_eq!(init_for_glfw(&mut core, window, 0), Ok(1));
        assert_eq!(
            unsafe { init_for_opengl3(&mut core, c"#version 150".as_ptr()) },
            Ok(0)
        );
        assert_eq!(
            core.calls,
            vec![
                Call::InitPlatform {
                    window: WindowHandle::from_raw(window).unwrap(),
                    install_callbacks: false,
                },
                Call::InitRenderer(Some("#version 150".into())),
            ]
        );
    }
}
