//! The seam between the boundary and the GUI library
//!
//! [`GuiCore`] has one method per library call the flat surface forwards to,
//! expressed in the library's own representation: native `bool`s, optional
//! `&mut bool` open flags, borrowed C strings, vectors and checked enums.
//! [`NativeCore`](crate::NativeCore) forwards each method to Dear ImGui and
//! the GLFW/OpenGL3 backends. Tests substitute a recording double to observe
//! exactly what crossed the seam.
//!
//! The library's own ordering rules (frame lifecycle, begin/end balance, ID
//! and style stack discipline) are the caller's to respect. Nothing here
//! tracks them.

use std::ffi::CStr;

use crate::flags::{ComboFlags, SelectableFlags, TableColumnFlags, TableFlags, WindowFlags};
use crate::handle::{ContextHandle, WindowHandle};
use crate::input::MouseButton;
use crate::style::{StyleColor, StyleVar};
use crate::{Condition, sys};

/// The operations of the GUI library and its backends that the adapter forwards to.
pub trait GuiCore {
    // Context

    /// Create a context and make it current.
    #[doc(alias = "CreateContext")]
    fn create_context(&mut self) -> Option<ContextHandle>;

    /// Destroy `ctx`, or the current context when `None`.
    #[doc(alias = "DestroyContext")]
    fn destroy_context(&mut self, ctx: Option<ContextHandle>);

    #[doc(alias = "GetCurrentContext")]
    fn current_context(&mut self) -> Option<ContextHandle>;

    // Backends

    /// Initialize the windowing backend for an OpenGL window.
    fn init_platform(&mut self, window: WindowHandle, install_callbacks: bool) -> bool;

    /// Initialize the graphics backend. `None` selects the backend's default GLSL version.
    fn init_renderer(&mut self, glsl_version: Option<&CStr>) -> bool;

    fn shutdown_renderer(&mut self);

    fn shutdown_platform(&mut self);

    // Frame

    /// Start a frame: graphics backend, then windowing backend, then the core.
    #[doc(alias = "NewFrame")]
    fn new_frame(&mut self);

    #[doc(alias = "Render")]
    fn render(&mut self);

    #[doc(alias = "EndFrame")]
    fn end_frame(&mut self);

    /// Hand the last rendered frame's draw data to the graphics backend.
    fn render_draw_data(&mut self);

    // IO

    fn set_display_size(&mut self, size: sys::ImVec2);

    fn want_capture_mouse(&mut self) -> bool;

    fn want_capture_keyboard(&mut self) -> bool;

    // Windows and widgets

    /// Begin a window. `open` of `None` means the window has no close button.
    #[doc(alias = "Begin")]
    fn begin(&mut self, name: &CStr, open: Option<&mut bool>, flags: WindowFlags) -> bool;

    #[doc(alias = "End")]
    fn end(&mut self);

    /// Display text verbatim.
    #[doc(alias = "TextUnformatted")]
    fn text(&mut self, text: &CStr);

    #[doc(alias = "Button")]
    fn button(&mut self, label: &CStr, size: sys::ImVec2) -> bool;

    #[doc(alias = "Checkbox")]
    fn checkbox(&mut self, label: &CStr, value: &mut bool) -> bool;

    #[doc(alias = "SliderFloat")]
    fn slider_float(&mut self, label: &CStr, value: &mut f32, min: f32, max: f32) -> bool;

    #[doc(alias = "SliderInt")]
    fn slider_int(&mut self, label: &CStr, value: &mut i32, min: i32, max: i32) -> bool;

    #[doc(alias = "InputFloat")]
    fn input_float(&mut self, label: &CStr, value: &mut f32) -> bool;

    #[doc(alias = "InputInt")]
    fn input_int(&mut self, label: &CStr, value: &mut i32) -> bool;

    #[doc(alias = "ColorEdit3")]
    fn color_edit3(&mut self, label: &CStr, color: &mut [f32; 3]) -> bool;

    #[doc(alias = "ColorEdit4")]
    fn color_edit4(&mut self, label: &CStr, color: &mut [f32; 4]) -> bool;

    // Layout

    #[doc(alias = "SameLine")]
    fn same_line(&mut self);

    fn separator(&mut self);

    fn spacing(&mut self);

    fn dummy(&mut self, size: sys::ImVec2);

    fn indent(&mut self, width: f32);

    fn unindent(&mut self, width: f32);

    // Trees

    #[doc(alias = "TreeNode")]
    fn tree_node(&mut self, label: &CStr) -> bool;

    #[doc(alias = "TreePop")]
    fn tree_pop(&mut self);

    // Combos

    /// Begin a combo box. `preview` of `None` shows no preview text.
    #[doc(alias = "BeginCombo")]
    fn begin_combo(&mut self, label: &CStr, preview: Option<&CStr>, flags: ComboFlags) -> bool;

    #[doc(alias = "EndCombo")]
    fn end_combo(&mut self);

    #[doc(alias = "Selectable")]
    fn selectable(&mut self, label: &CStr, selected: bool, flags: SelectableFlags) -> bool;

    // Menus

    #[doc(alias = "BeginMainMenuBar")]
    fn begin_main_menu_bar(&mut self) -> bool;

    #[doc(alias = "EndMainMenuBar")]
    fn end_main_menu_bar(&mut self);

    #[doc(alias = "BeginMenu")]
    fn begin_menu(&mut self, label: &CStr, enabled: bool) -> bool;

    #[doc(alias = "EndMenu")]
    fn end_menu(&mut self);

    #[doc(alias = "MenuItem")]
    fn menu_item(
        &mut self,
        label: &CStr,
        shortcut: Option<&CStr>,
        selected: bool,
        enabled: bool,
    ) -> bool;

    // Tooltips

    /// Set a plain-text tooltip. `%` in `text` is displayed as is.
    #[doc(alias = "SetTooltip")]
    fn set_tooltip(&mut self, text: &CStr);

    #[doc(alias = "BeginTooltip")]
    fn begin_tooltip(&mut self) -> bool;

    #[doc(alias = "EndTooltip")]
    fn end_tooltip(&mut self);

    // Popups

    #[doc(alias = "BeginPopup")]
    fn begin_popup(&mut self, id: &CStr, flags: WindowFlags) -> bool;

    #[doc(alias = "BeginPopupModal")]
    fn begin_popup_modal(
        &mut self,
        name: &CStr,
        open: Option<&mut bool>,
        flags: WindowFlags,
    ) -> bool;

    #[doc(alias = "EndPopup")]
    fn end_popup(&mut self);

    #[doc(alias = "OpenPopup")]
    fn open_popup(&mut self, id: &CStr);

    #[doc(alias = "CloseCurrentPopup")]
    fn close_current_popup(&mut self);

    // Tables

    #[doc(alias = "BeginTable")]
    fn begin_table(&mut self, id: &CStr, columns: i32, flags: TableFlags) -> bool;

    #[doc(alias = "EndTable")]
    fn end_table(&mut self);

    #[doc(alias = "TableNextRow")]
    fn table_next_row(&mut self);

    #[doc(alias = "TableNextColumn")]
    fn table_next_column(&mut self) -> bool;

    #[doc(alias = "TableSetColumnIndex")]
    fn table_set_column_index(&mut self, column: i32) -> bool;

    #[doc(alias = "TableSetupColumn")]
    fn table_setup_column(
        &mut self,
        label: &CStr,
        flags: TableColumnFlags,
        init_width_or_weight: f32,
    );

    #[doc(alias = "TableHeadersRow")]
    fn table_headers_row(&mut self);

    // Legacy columns

    #[doc(alias = "Columns")]
    fn columns(&mut self, count: i32, id: Option<&CStr>, border: bool);

    #[doc(alias = "NextColumn")]
    fn next_column(&mut self);

    // Style stacks

    #[doc(alias = "PushStyleColor")]
    fn push_style_color(&mut self, color: StyleColor, value: sys::ImVec4);

    #[doc(alias = "PopStyleColor")]
    fn pop_style_color(&mut self, count: i32);

    /// Push a scalar style variable.
    ///
    /// `var` is always of [`StyleVarKind::Float`](crate::StyleVarKind::Float).
    #[doc(alias = "PushStyleVar")]
    fn push_style_var_float(&mut self, var: StyleVar, value: f32);

    /// Push a 2-component style variable.
    ///
    /// `var` is always of [`StyleVarKind::Vec2`](crate::StyleVarKind::Vec2).
    #[doc(alias = "PushStyleVar")]
    fn push_style_var_vec2(&mut self, var: StyleVar, value: sys::ImVec2);

    #[doc(alias = "PopStyleVar")]
    fn pop_style_var(&mut self, count: i32);

    // ID stack

    #[doc(alias = "PushID")]
    fn push_id_int(&mut self, id: i32);

    #[doc(alias = "PushID")]
    fn push_id_str(&mut self, id: &CStr);

    #[doc(alias = "PopID")]
    fn pop_id(&mut self);

    // Item queries

    #[doc(alias = "IsItemHovered")]
    fn is_item_hovered(&mut self) -> bool;

    #[doc(alias = "IsItemClicked")]
    fn is_item_clicked(&mut self, button: MouseButton) -> bool;

    #[doc(alias = "IsItemActive")]
    fn is_item_active(&mut self) -> bool;

    // Window placement

    #[doc(alias = "SetNextWindowPos")]
    fn set_next_window_pos(&mut self, pos: sys::ImVec2, cond: Condition);

    #[doc(alias = "SetNextWindowSize")]
    fn set_next_window_size(&mut self, size: sys::ImVec2, cond: Condition);

    // Diagnostics

    #[doc(alias = "ShowDemoWindow")]
    fn show_demo_window(&mut self, open: Option<&mut bool>);
}
