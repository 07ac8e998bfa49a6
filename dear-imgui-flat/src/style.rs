//! Style color and style variable identifiers
//!
//! The core library takes these as plain integers and indexes its style
//! tables with them unchecked. Here they are closed enumerations: an integer
//! arriving at the boundary either names a member or the call is rejected.

use crate::sys;

/// Style color identifier
#[repr(i32)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum StyleColor {
    Text = sys::ImGuiCol_Text as i32,
    TextDisabled = sys::ImGuiCol_TextDisabled as i32,
    WindowBg = sys::ImGuiCol_WindowBg as i32,
    ChildBg = sys::ImGuiCol_ChildBg as i32,
    PopupBg = sys::ImGuiCol_PopupBg as i32,
    Border = sys::ImGuiCol_Border as i32,
    BorderShadow = sys::ImGuiCol_BorderShadow as i32,
    FrameBg = sys::ImGuiCol_FrameBg as i32,
    FrameBgHovered = sys::ImGuiCol_FrameBgHovered as i32,
    FrameBgActive = sys::ImGuiCol_FrameBgActive as i32,
    TitleBg = sys::ImGuiCol_TitleBg as i32,
    TitleBgActive = sys::ImGuiCol_TitleBgActive as i32,
    TitleBgCollapsed = sys::ImGuiCol_TitleBgCollapsed as i32,
    MenuBarBg = sys::ImGuiCol_MenuBarBg as i32,
    ScrollbarBg = sys::ImGuiCol_ScrollbarBg as i32,
    ScrollbarGrab = sys::ImGuiCol_ScrollbarGrab as i32,
    ScrollbarGrabHovered = sys::ImGuiCol_ScrollbarGrabHovered as i32,
    ScrollbarGrabActive = sys::ImGuiCol_ScrollbarGrabActive as i32,
    CheckMark = sys::ImGuiCol_CheckMark as i32,
    SliderGrab = sys::ImGuiCol_SliderGrab as i32,
    SliderGrabActive = sys::ImGuiCol_SliderGrabActive as i32,
    Button = sys::ImGuiCol_Button as i32,
    ButtonHovered = sys::ImGuiCol_ButtonHovered as i32,
    ButtonActive = sys::ImGuiCol_ButtonActive as i32,
    Header = sys::ImGuiCol_Header as i32,
    HeaderHovered = sys::ImGuiCol_HeaderHovered as i32,
    HeaderActive = sys::ImGuiCol_HeaderActive as i32,
    Separator = sys::ImGuiCol_Separator as i32,
    SeparatorHovered = sys::ImGuiCol_SeparatorHovered as i32,
    SeparatorActive = sys::ImGuiCol_SeparatorActive as i32,
    ResizeGrip = sys::ImGuiCol_ResizeGrip as i32,
    ResizeGripHovered = sys::ImGuiCol_ResizeGripHovered as i32,
    ResizeGripActive = sys::ImGuiCol_ResizeGripActive as i32,
    InputTextCursor = sys::ImGuiCol_InputTextCursor as i32,
    TabHovered = sys::ImGuiCol_TabHovered as i32,
    Tab = sys::ImGuiCol_Tab as i32,
    TabSelected = sys::ImGuiCol_TabSelected as i32,
    TabSelectedOverline = sys::ImGuiCol_TabSelectedOverline as i32,
    TabDimmed = sys::ImGuiCol_TabDimmed as i32,
    TabDimmedSelected = sys::ImGuiCol_TabDimmedSelected as i32,
    TabDimmedSelectedOverline = sys::ImGuiCol_TabDimmedSelectedOverline as i32,
    DockingPreview = sys::ImGuiCol_DockingPreview as i32,
    DockingEmptyBg = sys::ImGuiCol_DockingEmptyBg as i32,
    PlotLines = sys::ImGuiCol_PlotLines as i32,
    PlotLinesHovered = sys::ImGuiCol_PlotLinesHovered as i32,
    PlotHistogram = sys::ImGuiCol_PlotHistogram as i32,
    PlotHistogramHovered = sys::ImGuiCol_PlotHistogramHovered as i32,
    TableHeaderBg = sys::ImGuiCol_TableHeaderBg as i32,
    TableBorderStrong = sys::ImGuiCol_TableBorderStrong as i32,
    TableBorderLight = sys::ImGuiCol_TableBorderLight as i32,
    TableRowBg = sys::ImGuiCol_TableRowBg as i32,
    TableRowBgAlt = sys::ImGuiCol_TableRowBgAlt as i32,
    TextLink = sys::ImGuiCol_TextLink as i32,
    TextSelectedBg = sys::ImGuiCol_TextSelectedBg as i32,
    TreeLines = sys::ImGuiCol_TreeLines as i32,
    DragDropTarget = sys::ImGuiCol_DragDropTarget as i32,
    DragDropTargetBg = sys::ImGuiCol_DragDropTargetBg as i32,
    UnsavedMarker = sys::ImGuiCol_UnsavedMarker as i32,
    NavCursor = sys::ImGuiCol_NavCursor as i32,
    NavWindowingHighlight = sys::ImGuiCol_NavWindowingHighlight as i32,
    NavWindowingDimBg = sys::ImGuiCol_NavWindowingDimBg as i32,
    ModalWindowDimBg = sys::ImGuiCol_ModalWindowDimBg as i32,
}

impl StyleColor {
    /// Every style color, in index order.
    pub const VARIANTS: [StyleColor; 62] = [
        StyleColor::Text,
        StyleColor::TextDisabled,
        StyleColor::WindowBg,
        StyleColor::ChildBg,
        StyleColor::PopupBg,
        StyleColor::Border,
        StyleColor::BorderShadow,
        StyleColor::FrameBg,
        StyleColor::FrameBgHovered,
        StyleColor::FrameBgActive,
        StyleColor::TitleBg,
        StyleColor::TitleBgActive,
        StyleColor::TitleBgCollapsed,
        StyleColor::MenuBarBg,
        StyleColor::ScrollbarBg,
        StyleColor::ScrollbarGrab,
        StyleColor::ScrollbarGrabHovered,
        StyleColor::ScrollbarGrabActive,
        StyleColor::CheckMark,
        StyleColor::SliderGrab,
        StyleColor::SliderGrabActive,
        StyleColor::Button,
        StyleColor::ButtonHovered,
        StyleColor::ButtonActive,
        StyleColor::Header,
        StyleColor::HeaderHovered,
        StyleColor::HeaderActive,
        StyleColor::Separator,
        StyleColor::SeparatorHovered,
        StyleColor::SeparatorActive,
        StyleColor::ResizeGrip,
        StyleColor::ResizeGripHovered,
        StyleColor::ResizeGripActive,
        StyleColor::InputTextCursor,
        StyleColor::TabHovered,
        StyleColor::Tab,
        StyleColor::TabSelected,
        StyleColor::TabSelectedOverline,
        StyleColor::TabDimmed,
        StyleColor::TabDimmedSelected,
        StyleColor::TabDimmedSelectedOverline,
        StyleColor::DockingPreview,
        StyleColor::DockingEmptyBg,
        StyleColor::PlotLines,
        StyleColor::PlotLinesHovered,
        StyleColor::PlotHistogram,
        StyleColor::PlotHistogramHovered,
        StyleColor::TableHeaderBg,
        StyleColor::TableBorderStrong,
        StyleColor::TableBorderLight,
        StyleColor::TableRowBg,
        StyleColor::TableRowBgAlt,
        StyleColor::TextLink,
        StyleColor::TextSelectedBg,
        StyleColor::TreeLines,
        StyleColor::DragDropTarget,
        StyleColor::DragDropTargetBg,
        StyleColor::UnsavedMarker,
        StyleColor::NavCursor,
        StyleColor::NavWindowingHighlight,
        StyleColor::NavWindowingDimBg,
        StyleColor::ModalWindowDimBg,
    ];

    /// Number of style colors known to the linked core library.
    pub const COUNT: usize = sys::ImGuiCol_COUNT as usize;

    /// Raw index as understood by the core library.
    #[inline]
    pub const fn raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for StyleColor {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index).copied())
            .ok_or(value)
    }
}

/// Number of components a style variable holds
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum StyleVarKind {
    Float,
    Vec2,
}

/// Style variable identifier
#[repr(i32)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum StyleVar {
    /// Global alpha applies to everything
    Alpha = sys::ImGuiStyleVar_Alpha as i32,
    /// Additional alpha multiplier applied to disabled elements
    DisabledAlpha = sys::ImGuiStyleVar_DisabledAlpha as i32,
    /// Padding within a window
    WindowPadding = sys::ImGuiStyleVar_WindowPadding as i32,
    /// Rounding radius of window corners
    WindowRounding = sys::ImGuiStyleVar_WindowRounding as i32,
    /// Thickness of border around windows
    WindowBorderSize = sys::ImGuiStyleVar_WindowBorderSize as i32,
    /// Minimum window size
    WindowMinSize = sys::ImGuiStyleVar_WindowMinSize as i32,
    /// Alignment for title bar text
    WindowTitleAlign = sys::ImGuiStyleVar_WindowTitleAlign as i32,
    ChildRounding = sys::ImGuiStyleVar_ChildRounding as i32,
    ChildBorderSize = sys::ImGuiStyleVar_ChildBorderSize as i32,
    PopupRounding = sys::ImGuiStyleVar_PopupRounding as i32,
    PopupBorderSize = sys::ImGuiStyleVar_PopupBorderSize as i32,
    /// Padding within a framed rectangle (used by most widgets)
    FramePadding = sys::ImGuiStyleVar_FramePadding as i32,
    FrameRounding = sys::ImGuiStyleVar_FrameRounding as i32,
    FrameBorderSize = sys::ImGuiStyleVar_FrameBorderSize as i32,
    /// Horizontal and vertical spacing between widgets/lines
    ItemSpacing = sys::ImGuiStyleVar_ItemSpacing as i32,
    /// Horizontal and vertical spacing between elements of a composed widget
    ItemInnerSpacing = sys::ImGuiStyleVar_ItemInnerSpacing as i32,
    IndentSpacing = sys::ImGuiStyleVar_IndentSpacing as i32,
    CellPadding = sys::ImGuiStyleVar_CellPadding as i32,
    ScrollbarSize = sys::ImGuiStyleVar_ScrollbarSize as i32,
    ScrollbarRounding = sys::ImGuiStyleVar_ScrollbarRounding as i32,
    ScrollbarPadding = sys::ImGuiStyleVar_ScrollbarPadding as i32,
    GrabMinSize = sys::ImGuiStyleVar_GrabMinSize as i32,
    GrabRounding = sys::ImGuiStyleVar_GrabRounding as i32,
    ImageRounding = sys::ImGuiStyleVar_ImageRounding as i32,
    ImageBorderSize = sys::ImGuiStyleVar_ImageBorderSize as i32,
    TabRounding = sys::ImGuiStyleVar_TabRounding as i32,
    TabBorderSize = sys::ImGuiStyleVar_TabBorderSize as i32,
    TabMinWidthBase = sys::ImGuiStyleVar_TabMinWidthBase as i32,
    TabMinWidthShrink = sys::ImGuiStyleVar_TabMinWidthShrink as i32,
    TabBarBorderSize = sys::ImGuiStyleVar_TabBarBorderSize as i32,
    TabBarOverlineSize = sys::ImGuiStyleVar_TabBarOverlineSize as i32,
    /// Angle of angled table headers
    TableAngledHeadersAngle = sys::ImGuiStyleVar_TableAngledHeadersAngle as i32,
    TableAngledHeadersTextAlign = sys::ImGuiStyleVar_TableAngledHeadersTextAlign as i32,
    TreeLinesSize = sys::ImGuiStyleVar_TreeLinesSize as i32,
    TreeLinesRounding = sys::ImGuiStyleVar_TreeLinesRounding as i32,
    ButtonTextAlign = sys::ImGuiStyleVar_ButtonTextAlign as i32,
    SelectableTextAlign = sys::ImGuiStyleVar_SelectableTextAlign as i32,
    SeparatorTextBorderSize = sys::ImGuiStyleVar_SeparatorTextBorderSize as i32,
    SeparatorTextAlign = sys::ImGuiStyleVar_SeparatorTextAlign as i32,
    SeparatorTextPadding = sys::ImGuiStyleVar_SeparatorTextPadding as i32,
    /// Thickness of the resizing border between docked windows
    DockingSeparatorSize = sys::ImGuiStyleVar_DockingSeparatorSize as i32,
}

impl StyleVar {
    /// Every style variable, in index order.
    pub const VARIANTS: [StyleVar; 41] = [
        StyleVar::Alpha,
        StyleVar::DisabledAlpha,
        StyleVar::WindowPadding,
        StyleVar::WindowRounding,
        StyleVar::WindowBorderSize,
        StyleVar::WindowMinSize,
        StyleVar::WindowTitleAlign,
        StyleVar::ChildRounding,
        StyleVar::ChildBorderSize,
        StyleVar::PopupRounding,
        StyleVar::PopupBorderSize,
        StyleVar::FramePadding,
        StyleVar::FrameRounding,
        StyleVar::FrameBorderSize,
        StyleVar::ItemSpacing,
        StyleVar::ItemInnerSpacing,
        StyleVar::IndentSpacing,
        StyleVar::CellPadding,
        StyleVar::ScrollbarSize,
        StyleVar::ScrollbarRounding,
        StyleVar::ScrollbarPadding,
        StyleVar::GrabMinSize,
        StyleVar::GrabRounding,
        StyleVar::ImageRounding,
        StyleVar::ImageBorderSize,
        StyleVar::TabRounding,
        StyleVar::TabBorderSize,
        StyleVar::TabMinWidthBase,
        StyleVar::TabMinWidthShrink,
        StyleVar::TabBarBorderSize,
        StyleVar::TabBarOverlineSize,
        StyleVar::TableAngledHeadersAngle,
        StyleVar::TableAngledHeadersTextAlign,
        StyleVar::TreeLinesSize,
        StyleVar::TreeLinesRounding,
        StyleVar::ButtonTextAlign,
        StyleVar::SelectableTextAlign,
        StyleVar::SeparatorTextBorderSize,
        StyleVar::SeparatorTextAlign,
        StyleVar::SeparatorTextPadding,
        StyleVar::DockingSeparatorSize,
    ];

    /// Number of style variables known to the linked core library.
    pub const COUNT: usize = sys::ImGuiStyleVar_COUNT as usize;

    /// Raw index as understood by the core library.
    #[inline]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Whether this variable is pushed as a scalar or as a 2-component vector.
    pub const fn kind(self) -> StyleVarKind {
        use StyleVar::*;
        match self {
            WindowPadding
            | WindowMinSize
            | WindowTitleAlign
            | FramePadding
            | ItemSpacing
            | ItemInnerSpacing
            | CellPadding
            | TableAngledHeadersTextAlign
            | ButtonTextAlign
            | SelectableTextAlign
            | SeparatorTextAlign
            | SeparatorTextPadding => StyleVarKind::Vec2,
            _ => StyleVarKind::Float,
        }
    }
}

impl TryFrom<i32> for StyleVar {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index).copied())
            .ok_or(value)
    }
}

/// A value pushed onto the style variable stack
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleVarValue {
    Float(f32),
    Vec2([f32; 2]),
}

impl StyleVarValue {
    pub const fn kind(&self) -> StyleVarKind {
        match self {
            StyleVarValue::Float(_) => StyleVarKind::Float,
            StyleVarValue::Vec2(_) => StyleVarKind::Vec2,
        }
    }
}

impl From<f32> for StyleVarValue {
    fn from(v: f32) -> Self {
        StyleVarValue::Float(v)
    }
}

impl From<[f32; 2]> for StyleVarValue {
    fn from(v: [f32; 2]) -> Self {
        StyleVarValue::Vec2(v)
    }
}
