//! Recording stand-in for the GUI library, used by unit tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::CStr;
use std::rc::Rc;
use std::ptr::NonNull;

use crate::core::GuiCore;
use crate::flags::{ComboFlags, SelectableFlags, TableColumnFlags, TableFlags, WindowFlags};
use crate::handle::{ContextHandle, WindowHandle};
use crate::input::MouseButton;
use crate::style::{StyleColor, StyleVar};
use crate::{Condition, sys};

/// One call that reached the core, with its arguments as received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateContext,
    DestroyContext(Option<ContextHandle>),
    CurrentContext,
    InitPlatform {
        window: WindowHandle,
        install_callbacks: bool,
    },
    InitRenderer(Option<String>),
    ShutdownRenderer,
    ShutdownPlatform,
    NewFrame,
    Render,
    EndFrame,
    RenderDrawData,
    SetDisplaySize([f32; 2]),
    WantCaptureMouse,
    WantCaptureKeyboard,
    Begin {
        name: String,
        open: Option<bool>,
        flags: WindowFlags,
    },
    End,
    Text(String),
    Button {
        label: String,
        size: [f32; 2],
    },
    Checkbox {
        label: String,
        value: bool,
    },
    SliderFloat {
        label: String,
        value: f32,
        min: f32,
        max: f32,
    },
    SliderInt {
        label: String,
        value: i32,
        min: i32,
        max: i32,
    },
    InputFloat {
        label: String,
        value: f32,
    },
    InputInt {
        label: String,
        value: i32,
    },
    ColorEdit3 {
        label: String,
        addr: usize,
    },
    ColorEdit4 {
        label: String,
        addr: usize,
    },
    SameLine,
    Separator,
    Spacing,
    Dummy([f32; 2]),
    Indent(f32),
    Unindent(f32),
    TreeNode(String),
    TreePop,
    BeginCombo {
        label: String,
        preview: Option<String>,
        flags: ComboFlags,
    },
    EndCombo,
    Selectable {
        label: String,
        selected: bool,
        flags: SelectableFlags,
    },
    BeginMainMenuBar,
    EndMainMenuBar,
    BeginMenu {
        label: String,
        enabled: bool,
    },
    EndMenu,
    MenuItem {
        label: String,
        shortcut: Option<String>,
        selected: bool,
        enabled: bool,
    },
    SetTooltip(String),
    BeginTooltip,
    EndTooltip,
    BeginPopup {
        id: String,
        flags: WindowFlags,
    },
    BeginPopupModal {
        name: String,
        open: Option<bool>,
        flags: WindowFlags,
    },
    EndPopup,
    OpenPopup(String),
    CloseCurrentPopup,
    BeginTable {
        id: String,
        columns: i32,
        flags: TableFlags,
    },
    EndTable,
    TableNextRow,
    TableNextColumn,
    TableSetColumnIndex(i32),
    TableSetupColumn {
        label: String,
        flags: TableColumnFlags,
        init_width_or_weight: f32,
    },
    TableHeadersRow,
    Columns {
        count: i32,
        id: Option<String>,
        border: bool,
    },
    NextColumn,
    PushStyleColor(StyleColor, [f32; 4]),
    PopStyleColor(i32),
    PushStyleVarFloat(StyleVar, f32),
    PushStyleVarVec2(StyleVar, [f32; 2]),
    PopStyleVar(i32),
    PushIdInt(i32),
    PushIdStr(String),
    PopId,
    IsItemHovered,
    IsItemClicked(MouseButton),
    IsItemActive,
    SetNextWindowPos([f32; 2], Condition),
    SetNextWindowSize([f32; 2], Condition),
    ShowDemoWindow(Option<bool>),
}

/// Records every call and answers boolean queries from a script.
#[derive(Debug, Default)]
pub(crate) struct RecordingCore {
    pub calls: Vec<Call>,
    /// Results for boolean-returning calls, consumed in order. `false` once empty.
    pub results: VecDeque<bool>,
    /// Written into any open flag or checkbox value the core receives.
    pub write_flag: Option<bool>,
    /// Value written through slider/input pointers.
    pub write_number: Option<f32>,
    /// Makes `create_context` fail.
    pub refuse_context: bool,
    /// Receives `calls` when the core is dropped.
    pub sink: Option<Rc<RefCell<Vec<Call>>>>,
    current: Option<ContextHandle>,
}

impl RecordingCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the results of the next boolean-returning calls.
    pub fn returning(results: impl IntoIterator<Item = bool>) -> Self {
        let mut core = Self::default();
        core.results = results.into_iter().collect();
        core
    }

    /// A core whose calls end up in the returned log once it is dropped.
    pub fn with_sink(results: impl IntoIterator<Item = bool>) -> (Self, Rc<RefCell<Vec<Call>>>) {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let mut core = Self::returning(results);
        core.sink = Some(Rc::clone(&sink));
        (core, sink)
    }

    pub fn last(&self) -> Option<&Call> {
        self.calls.last()
    }

    fn answer(&mut self, call: Call) -> bool {
        self.calls.push(call);
        self.results.pop_front().unwrap_or(false)
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call);
    }

    fn touch_flag(&self, flag: Option<&mut bool>) -> Option<bool> {
        flag.map(|flag| {
            let seen = *flag;
            if let Some(value) = self.write_flag {
                *flag = value;
            }
            seen
        })
    }
}

impl Drop for RecordingCore {
    fn drop(&mut self) {
        if let Some(sink) = &self.sink {
            sink.borrow_mut().append(&mut self.calls);
        }
    }
}

fn owned(text: &CStr) -> String {
    text.to_string_lossy().into_owned()
}

fn owned_opt(text: Option<&CStr>) -> Option<String> {
    text.map(owned)
}

fn pair(v: sys::ImVec2) -> [f32; 2] {
    [v.x, v.y]
}

impl GuiCore for RecordingCore {
    fn create_context(&mut self) -> Option<ContextHandle> {
        self.record(Call::CreateContext);
        if self.refuse_context {
            return None;
        }
        self.current = ContextHandle::from_raw(NonNull::dangling().as_ptr());
        self.current
    }

    fn destroy_context(&mut self, ctx: Option<ContextHandle>) {
        self.record(Call::DestroyContext(ctx));
        if ctx.is_none() || ctx == self.current {
            self.current = None;
        }
    }

    fn current_context(&mut self) -> Option<ContextHandle> {
        self.record(Call::CurrentContext);
        self.current
    }

    fn init_platform(&mut self, window: WindowHandle, install_callbacks: bool) -> bool {
        self.answer(Call::InitPlatform {
            window,
            install_callbacks,
        })
    }

    fn init_renderer(&mut self, glsl_version: Option<&CStr>) -> bool {
        self.answer(Call::InitRenderer(owned_opt(glsl_version)))
    }

    fn shutdown_renderer(&mut self) {
        self.record(Call::ShutdownRenderer);
    }

    fn shutdown_platform(&mut self) {
        self.record(Call::ShutdownPlatform);
    }

    fn new_frame(&mut self) {
        self.record(Call::NewFrame);
    }

    fn render(&mut self) {
        self.record(Call::Render);
    }

    fn end_frame(&mut self) {
        self.record(Call::EndFrame);
    }

    fn render_draw_data(&mut self) {
        self.record(Call::RenderDrawData);
    }

    fn set_display_size(&mut self, size: sys::ImVec2) {
        self.record(Call::SetDisplaySize(pair(size)));
    }

    fn want_capture_mouse(&mut self) -> bool {
        self.answer(Call::WantCaptureMouse)
    }

    fn want_capture_keyboard(&mut self) -> bool {
        self.answer(Call::WantCaptureKeyboard)
    }

    fn begin(&mut self, name: &CStr, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let open = self.touch_flag(open);
        self.answer(Call::Begin {
            name: owned(name),
            open,
            flags,
        })
    }

    fn end(&mut self) {
        self.record(Call::End);
    }

    fn text(&mut self, text: &CStr) {
        self.record(Call::Text(owned(text)));
    }

    fn button(&mut self, label: &CStr, size: sys::ImVec2) -> bool {
        self.answer(Call::Button {
            label: owned(label),
            size: pair(size),
        })
    }

    fn checkbox(&mut self, label: &CStr, value: &mut bool) -> bool {
        let seen = self.touch_flag(Some(value)).unwrap_or_default();
        self.answer(Call::Checkbox {
            label: owned(label),
            value: seen,
        })
    }

    fn slider_float(&mut self, label: &CStr, value: &mut f32, min: f32, max: f32) -> bool {
        let seen = *value;
        if let Some(v) = self.write_number {
            *value = v;
        }
        self.answer(Call::SliderFloat {
            label: owned(label),
            value: seen,
            min,
            max,
        })
    }

    fn slider_int(&mut self, label: &CStr, value: &mut i32, min: i32, max: i32) -> bool {
        let seen = *value;
        if let Some(v) = self.write_number {
            *value = v as i32;
        }
        self.answer(Call::SliderInt {
            label: owned(label),
            value: seen,
            min,
            max,
        })
    }

    fn input_float(&mut self, label: &CStr, value: &mut f32) -> bool {
        let seen = *value;
        if let Some(v) = self.write_number {
            *value = v;
        }
        self.answer(Call::InputFloat {
            label: owned(label),
            value: seen,
        })
    }

    fn input_int(&mut self, label: &CStr, value: &mut i32) -> bool {
        let seen = *value;
        if let Some(v) = self.write_number {
            *value = v as i32;
        }
        self.answer(Call::InputInt {
            label: owned(label),
            value: seen,
        })
    }

    fn color_edit3(&mut self, label: &CStr, color: &mut [f32; 3]) -> bool {
        color[0] = 1.0;
        self.answer(Call::ColorEdit3 {
            label: owned(label),
            addr: color.as_ptr() as usize,
        })
    }

    fn color_edit4(&mut self, label: &CStr, color: &mut [f32; 4]) -> bool {
        color[3] = 0.5;
        self.answer(Call::ColorEdit4 {
            label: owned(label),
            addr: color.as_ptr() as usize,
        })
    }

    fn same_line(&mut self) {
        self.record(Call::SameLine);
    }

    fn separator(&mut self) {
        self.record(Call::Separator);
    }

    fn spacing(&mut self) {
        self.record(Call::Spacing);
    }

    fn dummy(&mut self, size: sys::ImVec2) {
        self.record(Call::Dummy(pair(size)));
    }

    fn indent(&mut self, width: f32) {
        self.record(Call::Indent(width));
    }

    fn unindent(&mut self, width: f32) {
        self.record(Call::Unindent(width));
    }

    fn tree_node(&mut self, label: &CStr) -> bool {
        self.answer(Call::TreeNode(owned(label)))
    }

    fn tree_pop(&mut self) {
        self.record(Call::TreePop);
    }

    fn begin_combo(&mut self, label: &CStr, preview: Option<&CStr>, flags: ComboFlags) -> bool {
        self.answer(Call::BeginCombo {
            label: owned(label),
            preview: owned_opt(preview),
            flags,
        })
    }

    fn end_combo(&mut self) {
        self.record(Call::EndCombo);
    }

    fn selectable(&mut self, label: &CStr, selected: bool, flags: SelectableFlags) -> bool {
        self.answer(Call::Selectable {
            label: owned(label),
            selected,
            flags,
        })
    }

    fn begin_main_menu_bar(&mut self) -> bool {
        self.answer(Call::BeginMainMenuBar)
    }

    fn end_main_menu_bar(&mut self) {
        self.record(Call::EndMainMenuBar);
    }

    fn begin_menu(&mut self, label: &CStr, enabled: bool) -> bool {
        self.answer(Call::BeginMenu {
            label: owned(label),
            enabled,
        })
    }

    fn end_menu(&mut self) {
        self.record(Call::EndMenu);
    }

    fn menu_item(
        &mut self,
        label: &CStr,
        shortcut: Option<&CStr>,
        selected: bool,
        enabled: bool,
    ) -> bool {
        self.answer(Call::MenuItem {
            label: owned(label),
            shortcut: owned_opt(shortcut),
            selected,
            enabled,
        })
    }

    fn set_tooltip(&mut self, text: &CStr) {
        self.record(Call::SetTooltip(owned(text)));
    }

    fn begin_tooltip(&mut self) -> bool {
        self.answer(Call::BeginTooltip)
    }

    fn end_tooltip(&mut self) {
        self.record(Call::EndTooltip);
    }

    fn begin_popup(&mut self, id: &CStr, flags: WindowFlags) -> bool {
        self.answer(Call::BeginPopup {
            id: owned(id),
            flags,
        })
    }

    fn begin_popup_modal(
        &mut self,
        name: &CStr,
        open: Option<&mut bool>,
        flags: WindowFlags,
    ) -> bool {
        let open = self.touch_flag(open);
        self.answer(Call::BeginPopupModal {
            name: owned(name),
            open,
            flags,
        })
    }

    fn end_popup(&mut self) {
        self.record(Call::EndPopup);
    }

    fn open_popup(&mut self, id: &CStr) {
        self.record(Call::OpenPopup(owned(id)));
    }

    fn close_current_popup(&mut self) {
        self.record(Call::CloseCurrentPopup);
    }

    fn begin_table(&mut self, id: &CStr, columns: i32, flags: TableFlags) -> bool {
        self.answer(Call::BeginTable {
            id: owned(id),
            columns,
            flags,
        })
    }

    fn end_table(&mut self) {
        self.record(Call::EndTable);
    }

    fn table_next_row(&mut self) {
        self.record(Call::TableNextRow);
    }

    fn table_next_column(&mut self) -> bool {
        self.answer(Call::TableNextColumn)
    }

    fn table_set_column_index(&mut self, column: i32) -> bool {
        self.answer(Call::TableSetColumnIndex(column))
    }

    fn table_setup_column(
        &mut self,
        label: &CStr,
        flags: TableColumnFlags,
        init_width_or_weight: f32,
    ) {
        self.record(Call::TableSetupColumn {
            label: owned(label),
            flags,
            init_width_or_weight,
        });
    }

    fn table_headers_row(&mut self) {
        self.record(Call::TableHeadersRow);
    }

    fn columns(&mut self, count: i32, id: Option<&CStr>, border: bool) {
        self.record(Call::Columns {
            count,
            id: owned_opt(id),
            border,
        });
    }

    fn next_column(&mut self) {
        self.record(Call::NextColumn);
    }

    fn push_style_color(&mut self, color: StyleColor, value: sys::ImVec4) {
        self.record(Call::PushStyleColor(
            color,
            [value.x, value.y, value.z, value.w],
        ));
    }

    fn pop_style_color(&mut self, count: i32) {
        self.record(Call::PopStyleColor(count));
    }

    fn push_style_var_float(&mut self, var: StyleVar, value: f32) {
        self.record(Call::PushStyleVarFloat(var, value));
    }

    fn push_style_var_vec2(&mut self, var: StyleVar, value: sys::ImVec2) {
        self.record(Call::PushStyleVarVec2(var, pair(value)));
    }

    fn pop_style_var(&mut self, count: i32) {
        self.record(Call::PopStyleVar(count));
    }

    fn push_id_int(&mut self, id: i32) {
        self.record(Call::PushIdInt(id));
    }

    fn push_id_str(&mut self, id: &CStr) {
        self.record(Call::PushIdStr(owned(id)));
    }

    fn pop_id(&mut self) {
        self.record(Call::PopId);
    }

    fn is_item_hovered(&mut self) -> bool {
        self.answer(Call::IsItemHovered)
    }

    fn is_item_clicked(&mut self, button: MouseButton) -> bool {
        self.answer(Call::IsItemClicked(button))
    }

    fn is_item_active(&mut self) -> bool {
        self.answer(Call::IsItemActive)
    }

    fn set_next_window_pos(&mut self, pos: sys::ImVec2, cond: Condition) {
        self.record(Call::SetNextWindowPos(pair(pos), cond));
    }

    fn set_next_window_size(&mut self, size: sys::ImVec2, cond: Condition) {
        self.record(Call::SetNextWindowSize(pair(size), cond));
    }

    fn show_demo_window(&mut self, open: Option<&mut bool>) {
        let open = self.touch_flag(open);
        self.record(Call::ShowDemoWindow(open));
    }
}
