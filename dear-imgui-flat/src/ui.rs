//! Safe Rust wrapper over the same operations as the C surface
//!
//! [`ImGui`] owns one context and whatever backends it initialized, and
//! tears them down in reverse order on drop. Labels are `&str`; they are
//! staged as C strings in a scratch [`UiBuffer`] for the duration of a call.
//!
//! ```no_run
//! use dear_imgui_flat::*;
//!
//! # fn window() -> WindowHandle { unimplemented!() }
//! let mut gui = ImGui::new(window(), BackendConfig::default())?;
//! let mut open = true;
//! let mut volume = 0.5;
//!
//! gui.new_frame();
//! gui.set_next_window_size([320.0, 120.0], Condition::FirstUseEver);
//! if gui.begin("Mixer", Some(&mut open), WindowFlags::NO_COLLAPSE) {
//!     gui.slider_float("Volume", &mut volume, 0.0, 1.0);
//! }
//! gui.end();
//! gui.render();
//! # Ok::<(), FlatError>(())
//! ```

use std::ffi::CString;

use crate::convert::{vec2, vec4};
use crate::core::GuiCore;
use crate::error::{FlatError, FlatResult};
use crate::flags::{ComboFlags, SelectableFlags, TableColumnFlags, TableFlags, WindowFlags};
use crate::handle::{ContextHandle, WindowHandle};
use crate::input::MouseButton;
use crate::native::NativeCore;
use crate::string::UiBuffer;
use crate::style::{StyleColor, StyleVar, StyleVarKind, StyleVarValue};
use crate::{Condition, sys};

/// How [`ImGui::new`] sets up the backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// GLSL version directive handed to the OpenGL3 renderer. `None` lets the
    /// renderer pick its own default.
    pub glsl_version: Option<String>,
    /// Let the GLFW backend install its input callbacks on the window,
    /// chaining any the host installed before.
    pub install_callbacks: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            glsl_version: Some("#version 330".to_owned()),
            install_callbacks: true,
        }
    }
}

/// One Dear ImGui context and the backends attached to it.
///
/// Only one may exist per thread at a time; creating a second while the
/// first is alive fails with [`FlatError::ContextAlreadyActive`]. The type is
/// neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct ImGui<C: GuiCore = NativeCore> {
    core: C,
    ctx: ContextHandle,
    buffer: UiBuffer,
    platform_initialized: bool,
    renderer_initialized: bool,
}

impl ImGui<NativeCore> {
    /// Create a context and attach the GLFW platform and OpenGL3 renderer
    /// backends to `window`.
    ///
    /// # Errors
    ///
    /// Fails if another context is current, if the GLSL version contains a NUL
    /// byte, or if either backend refuses to initialize. Anything already set
    /// up is torn down before returning the error.
    pub fn new(window: WindowHandle, config: BackendConfig) -> FlatResult<Self> {
        // The core is only used after `with_core` checked there is no other
        // context and made its own current.
        Self::with_core(unsafe { NativeCore::new() }, window, config)
    }

    /// Create a context with no backends attached.
    pub fn headless() -> FlatResult<Self> {
        Self::headless_with_core(unsafe { NativeCore::new() })
    }
}

impl<C: GuiCore> ImGui<C> {
    /// Like [`ImGui::new`] over any [`GuiCore`].
    pub fn with_core(core: C, window: WindowHandle, config: BackendConfig) -> FlatResult<Self> {
        let glsl_version = config
            .glsl_version
            .map(CString::new)
            .transpose()
            .map_err(|_| FlatError::InvalidGlslVersion)?;

        let mut gui = Self::headless_with_core(core)?;

        if !gui.core.init_platform(window, config.install_callbacks) {
            return Err(FlatError::backend_init(
                "GLFW",
                "ImGui_ImplGlfw_InitForOpenGL returned false",
            ));
        }
        gui.platform_initialized = true;

        if !gui.core.init_renderer(glsl_version.as_deref()) {
            return Err(FlatError::backend_init(
                "OpenGL3",
                "ImGui_ImplOpenGL3_Init returned false",
            ));
        }
        gui.renderer_initialized = true;

        Ok(gui)
    }

    /// Like [`ImGui::headless`] over any [`GuiCore`].
    pub fn headless_with_core(mut core: C) -> FlatResult<Self> {
        if core.current_context().is_some() {
            return Err(FlatError::ContextAlreadyActive);
        }
        let ctx = core
            .create_context()
            .ok_or_else(|| FlatError::context_creation("igCreateContext returned null"))?;

        Ok(Self {
            core,
            ctx,
            buffer: UiBuffer::default(),
            platform_initialized: false,
            renderer_initialized: false,
        })
    }

    /// The owned context.
    pub fn context(&self) -> ContextHandle {
        self.ctx
    }

    // Frame

    /// Start a frame on the attached backends and the core.
    #[doc(alias = "NewFrame")]
    pub fn new_frame(&mut self) {
        self.core.new_frame();
    }

    /// Finish the frame and hand its draw data to the renderer, if one is attached.
    #[doc(alias = "Render")]
    pub fn render(&mut self) {
        self.core.render();
        self.core.render_draw_data();
    }

    #[doc(alias = "EndFrame")]
    pub fn end_frame(&mut self) {
        self.core.end_frame();
    }

    // IO

    pub fn set_display_size(&mut self, size: impl Into<mint::Vector2<f32>>) {
        self.core.set_display_size(im_vec2(size));
    }

    pub fn want_capture_mouse(&mut self) -> bool {
        self.core.want_capture_mouse()
    }

    pub fn want_capture_keyboard(&mut self) -> bool {
        self.core.want_capture_keyboard()
    }

    // Windows and widgets

    /// Begin a window. Pass `Some(&mut open)` to show a close button; the
    /// library clears `open` when it is clicked.
    ///
    /// [`end`](Self::end) must be called whatever this returns.
    #[doc(alias = "Begin")]
    pub fn begin(
        &mut self,
        name: impl AsRef<str>,
        open: Option<&mut bool>,
        flags: WindowFlags,
    ) -> bool {
        let name = self.buffer.scratch_txt(name);
        self.core.begin(name, open, flags)
    }

    #[doc(alias = "End")]
    pub fn end(&mut self) {
        self.core.end();
    }

    /// Display text verbatim.
    #[doc(alias = "TextUnformatted")]
    pub fn text(&mut self, text: impl AsRef<str>) {
        let text = self.buffer.scratch_txt(text);
        self.core.text(text);
    }

    #[doc(alias = "Button")]
    pub fn button(&mut self, label: impl AsRef<str>) -> bool {
        self.button_with_size(label, [0.0f32, 0.0])
    }

    /// A button of a fixed size. A zero component is sized to the label.
    #[doc(alias = "Button")]
    pub fn button_with_size(
        &mut self,
        label: impl AsRef<str>,
        size: impl Into<mint::Vector2<f32>>,
    ) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.button(label, im_vec2(size))
    }

    #[doc(alias = "Checkbox")]
    pub fn checkbox(&mut self, label: impl AsRef<str>, value: &mut bool) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.checkbox(label, value)
    }

    #[doc(alias = "SliderFloat")]
    pub fn slider_float(
        &mut self,
        label: impl AsRef<str>,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.slider_float(label, value, min, max)
    }

    #[doc(alias = "SliderInt")]
    pub fn slider_int(
        &mut self,
        label: impl AsRef<str>,
        value: &mut i32,
        min: i32,
        max: i32,
    ) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.slider_int(label, value, min, max)
    }

    #[doc(alias = "InputFloat")]
    pub fn input_float(&mut self, label: impl AsRef<str>, value: &mut f32) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.input_float(label, value)
    }

    #[doc(alias = "InputInt")]
    pub fn input_int(&mut self, label: impl AsRef<str>, value: &mut i32) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.input_int(label, value)
    }

    #[doc(alias = "ColorEdit3")]
    pub fn color_edit3(&mut self, label: impl AsRef<str>, color: &mut [f32; 3]) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.color_edit3(label, color)
    }

    #[doc(alias = "ColorEdit4")]
    pub fn color_edit4(&mut self, label: impl AsRef<str>, color: &mut [f32; 4]) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.color_edit4(label, color)
    }

    // Layout

    #[doc(alias = "SameLine")]
    pub fn same_line(&mut self) {
        self.core.same_line();
    }

    pub fn separator(&mut self) {
        self.core.separator();
    }

    pub fn spacing(&mut self) {
        self.core.spacing();
    }

    pub fn dummy(&mut self, size: impl Into<mint::Vector2<f32>>) {
        self.core.dummy(im_vec2(size));
    }

    /// Move content right. `0.0` uses the style's indent spacing.
    pub fn indent(&mut self, width: f32) {
        self.core.indent(width);
    }

    pub fn unindent(&mut self, width: f32) {
        self.core.unindent(width);
    }

    // Trees

    /// Returns `true` when open; call [`tree_pop`](Self::tree_pop) only then.
    #[doc(alias = "TreeNode")]
    pub fn tree_node(&mut self, label: impl AsRef<str>) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.tree_node(label)
    }

    #[doc(alias = "TreePop")]
    pub fn tree_pop(&mut self) {
        self.core.tree_pop();
    }

    // Combos

    #[doc(alias = "BeginCombo")]
    pub fn begin_combo(
        &mut self,
        label: impl AsRef<str>,
        preview: Option<&str>,
        flags: ComboFlags,
    ) -> bool {
        let (label, preview) = self.buffer.scratch_txt_with_opt(label, preview);
        self.core.begin_combo(label, preview, flags)
    }

    #[doc(alias = "EndCombo")]
    pub fn end_combo(&mut self) {
        self.core.end_combo();
    }

    #[doc(alias = "Selectable")]
    pub fn selectable(
        &mut self,
        label: impl AsRef<str>,
        selected: bool,
        flags: SelectableFlags,
    ) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.selectable(label, selected, flags)
    }

    // Menus

    #[doc(alias = "BeginMainMenuBar")]
    pub fn begin_main_menu_bar(&mut self) -> bool {
        self.core.begin_main_menu_bar()
    }

    #[doc(alias = "EndMainMenuBar")]
    pub fn end_main_menu_bar(&mut self) {
        self.core.end_main_menu_bar();
    }

    #[doc(alias = "BeginMenu")]
    pub fn begin_menu(&mut self, label: impl AsRef<str>, enabled: bool) -> bool {
        let label = self.buffer.scratch_txt(label);
        self.core.begin_menu(label, enabled)
    }

    #[doc(alias = "EndMenu")]
    pub fn end_menu(&mut self) {
        self.core.end_menu();
    }

    /// Returns `true` when the item is activated.
    #[doc(alias = "MenuItem")]
    pub fn menu_item(
        &mut self,
        label: impl AsRef<str>,
        shortcut: Option<&str>,
        selected: bool,
        enabled: bool,
    ) -> bool {
        let (label, shortcut) = self.buffer.scratch_txt_with_opt(label, shortcut);
        self.core.menu_item(label, shortcut, selected, enabled)
    }

    // Tooltips

    #[doc(alias = "SetTooltip")]
    pub fn set_tooltip(&mut self, text: impl AsRef<str>) {
        let text = self.buffer.scratch_txt(text);
        self.core.set_tooltip(text);
    }

    #[doc(alias = "BeginTooltip")]
    pub fn begin_tooltip(&mut self) -> bool {
        self.core.begin_tooltip()
    }

    #[doc(alias = "EndTooltip")]
    pub fn end_tooltip(&mut self) {
        self.core.end_tooltip();
    }

    // Popups

    #[doc(alias = "BeginPopup")]
    pub fn begin_popup(&mut self, id: impl AsRef<str>, flags: WindowFlags) -> bool {
        let id = self.buffer.scratch_txt(id);
        self.core.begin_popup(id, flags)
    }

    #[doc(alias = "BeginPopupModal")]
    pub fn begin_popup_modal(
        &mut self,
        name: impl AsRef<str>,
        open: Option<&mut bool>,
        flags: WindowFlags,
    ) -> bool {
        let name = self.buffer.scratch_txt(name);
        self.core.begin_popup_modal(name, open, flags)
    }

    #[doc(alias = "EndPopup")]
    pub fn end_popup(&mut self) {
        self.core.end_popup();
    }

    #[doc(alias = "OpenPopup")]
    pub fn open_popup(&mut self, id: impl AsRef<str>) {
        let id = self.buffer.scratch_txt(id);
        self.core.open_popup(id);
    }

    #[doc(alias = "CloseCurrentPopup")]
    pub fn close_current_popup(&mut self) {
        self.core.close_current_popup();
    }

    // Tables

    #[doc(alias = "BeginTable")]
    pub fn begin_table(&mut self, id: impl AsRef<str>, columns: i32, flags: TableFlags) -> bool {
        let id = self.buffer.scratch_txt(id);
        self.core.begin_table(id, columns, flags)
    }

    #[doc(alias = "EndTable")]
    pub fn end_table(&mut self) {
        self.core.end_table();
    }

    #[doc(alias = "TableNextRow")]
    pub fn table_next_row(&mut self) {
        self.core.table_next_row();
    }

    #[doc(alias = "TableNextColumn")]
    pub fn table_next_column(&mut self) -> bool {
        self.core.table_next_column()
    }

    #[doc(alias = "TableSetColumnIndex")]
    pub fn table_set_column_index(&mut self, column: i32) -> bool {
        self.core.table_set_column_index(column)
    }

    #[doc(alias = "TableSetupColumn")]
    pub fn table_setup_column(
        &mut self,
        label: impl AsRef<str>,
        flags: TableColumnFlags,
        init_width_or_weight: f32,
    ) {
        let label = self.buffer.scratch_txt(label);
        self.core.table_setup_column(label, flags, init_width_or_weight);
    }

    #[doc(alias = "TableHeadersRow")]
    pub fn table_headers_row(&mut self) {
        self.core.table_headers_row();
    }

    // Legacy columns

    #[doc(alias = "Columns")]
    pub fn columns(&mut self, count: i32, id: Option<&str>, border: bool) {
        let id = self.buffer.scratch_txt_opt(id);
        self.core.columns(count, id, border);
    }

    #[doc(alias = "NextColumn")]
    pub fn next_column(&mut self) {
        self.core.next_column();
    }

    // Style stacks

    #[doc(alias = "PushStyleColor")]
    pub fn push_style_color(&mut self, color: StyleColor, value: impl Into<mint::Vector4<f32>>) {
        let v = value.into();
        self.core.push_style_color(color, vec4(v.x, v.y, v.z, v.w));
    }

    #[doc(alias = "PopStyleColor")]
    pub fn pop_style_color(&mut self, count: i32) {
        self.core.pop_style_color(count);
    }

    /// Push a style variable.
    ///
    /// # Errors
    ///
    /// [`FlatError::StyleVarArity`] if `value` is a scalar for a 2-component
    /// variable or the reverse. Nothing is pushed then.
    #[doc(alias = "PushStyleVar")]
    pub fn push_style_var(
        &mut self,
        var: StyleVar,
        value: impl Into<StyleVarValue>,
    ) -> FlatResult<()> {
        match value.into() {
            StyleVarValue::Float(v) if var.kind() == StyleVarKind::Float => {
                self.core.push_style_var_float(var, v);
                Ok(())
            }
            StyleVarValue::Vec2([x, y]) if var.kind() == StyleVarKind::Vec2 => {
                self.core.push_style_var_vec2(var, vec2(x, y));
                Ok(())
            }
            _ => Err(FlatError::StyleVarArity {
                operation: "push_style_var",
                var,
                expected: var.kind(),
            }),
        }
    }

    #[doc(alias = "PopStyleVar")]
    pub fn pop_style_var(&mut self, count: i32) {
        self.core.pop_style_var(count);
    }

    // ID stack

    #[doc(alias = "PushID")]
    pub fn push_id_int(&mut self, id: i32) {
        self.core.push_id_int(id);
    }

    #[doc(alias = "PushID")]
    pub fn push_id_str(&mut self, id: impl AsRef<str>) {
        let id = self.buffer.scratch_txt(id);
        self.core.push_id_str(id);
    }

    #[doc(alias = "PopID")]
    pub fn pop_id(&mut self) {
        self.core.pop_id();
    }

    // Item queries

    #[doc(alias = "IsItemHovered")]
    pub fn is_item_hovered(&mut self) -> bool {
        self.core.is_item_hovered()
    }

    #[doc(alias = "IsItemClicked")]
    pub fn is_item_clicked(&mut self, button: MouseButton) -> bool {
        self.core.is_item_clicked(button)
    }

    #[doc(alias = "IsItemActive")]
    pub fn is_item_active(&mut self) -> bool {
        self.core.is_item_active()
    }

    // Window placement

    #[doc(alias = "SetNextWindowPos")]
    pub fn set_next_window_pos(&mut self, pos: impl Into<mint::Vector2<f32>>, cond: Condition) {
        self.core.set_next_window_pos(im_vec2(pos), cond);
    }

    #[doc(alias = "SetNextWindowSize")]
    pub fn set_next_window_size(&mut self, size: impl Into<mint::Vector2<f32>>, cond: Condition) {
        self.core.set_next_window_size(im_vec2(size), cond);
    }

    // Diagnostics

    #[doc(alias = "ShowDemoWindow")]
    pub fn show_demo_window(&mut self, open: Option<&mut bool>) {
        self.core.show_demo_window(open);
    }
}

impl<C: GuiCore> Drop for ImGui<C> {
    fn drop(&mut self) {
        if self.renderer_initialized {
            self.core.shutdown_renderer();
        }
        if self.platform_initialized {
            self.core.shutdown_platform();
        }
        self.core.destroy_context(Some(self.ctx));
    }
}

fn im_vec2(v: impl Into<mint::Vector2<f32>>) -> sys::ImVec2 {
    let v = v.into();
    vec2(v.x, v.y)
}
