//! Bit flag sets accepted by windows, combos, selectables and tables
//!
//! Unlike the index enums these are never rejected at the boundary. Unknown
//! bits are dropped with a warning and the call still goes through, so a
//! caller's begin/end pairing is never thrown off by a stray bit.

use bitflags::bitflags;

use crate::sys;

bitflags! {
    /// Configuration flags for windows
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: i32 {
        /// Disable title-bar
        const NO_TITLE_BAR = sys::ImGuiWindowFlags_NoTitleBar as i32;
        /// Disable user resizing with the lower-right grip
        const NO_RESIZE = sys::ImGuiWindowFlags_NoResize as i32;
        /// Disable user moving the window
        const NO_MOVE = sys::ImGuiWindowFlags_NoMove as i32;
        /// Disable scrollbars (window can still scroll with mouse or programmatically)
        const NO_SCROLLBAR = sys::ImGuiWindowFlags_NoScrollbar as i32;
        /// Disable user vertically scrolling with mouse wheel
        const NO_SCROLL_WITH_MOUSE = sys::ImGuiWindowFlags_NoScrollWithMouse as i32;
        /// Disable user collapsing window by double-clicking on it
        const NO_COLLAPSE = sys::ImGuiWindowFlags_NoCollapse as i32;
        /// Resize every window to its content every frame
        const ALWAYS_AUTO_RESIZE = sys::ImGuiWindowFlags_AlwaysAutoResize as i32;
        /// Disable drawing background color and outside border
        const NO_BACKGROUND = sys::ImGuiWindowFlags_NoBackground as i32;
        /// Never load/save settings in .ini file
        const NO_SAVED_SETTINGS = sys::ImGuiWindowFlags_NoSavedSettings as i32;
        /// Disable catching mouse, hovering test with pass through
        const NO_MOUSE_INPUTS = sys::ImGuiWindowFlags_NoMouseInputs as i32;
        /// Has a menu-bar
        const MENU_BAR = sys::ImGuiWindowFlags_MenuBar as i32;
        /// Allow horizontal scrollbar to appear
        const HORIZONTAL_SCROLLBAR = sys::ImGuiWindowFlags_HorizontalScrollbar as i32;
        /// Disable taking focus when transitioning from hidden to visible state
        const NO_FOCUS_ON_APPEARING = sys::ImGuiWindowFlags_NoFocusOnAppearing as i32;
        /// Disable bringing window to front when taking focus
        const NO_BRING_TO_FRONT_ON_FOCUS = sys::ImGuiWindowFlags_NoBringToFrontOnFocus as i32;
        /// Always show vertical scrollbar
        const ALWAYS_VERTICAL_SCROLLBAR = sys::ImGuiWindowFlags_AlwaysVerticalScrollbar as i32;
        /// Always show horizontal scrollbar
        const ALWAYS_HORIZONTAL_SCROLLBAR = sys::ImGuiWindowFlags_AlwaysHorizontalScrollbar as i32;
        /// No gamepad/keyboard navigation within the window
        const NO_NAV_INPUTS = sys::ImGuiWindowFlags_NoNavInputs as i32;
        /// No focusing toward this window with gamepad/keyboard navigation
        const NO_NAV_FOCUS = sys::ImGuiWindowFlags_NoNavFocus as i32;
        /// Display a dot next to the title
        const UNSAVED_DOCUMENT = sys::ImGuiWindowFlags_UnsavedDocument as i32;
        /// Disable gamepad/keyboard navigation and focusing
        const NO_NAV = Self::NO_NAV_INPUTS.bits() | Self::NO_NAV_FOCUS.bits();
        /// Disable all window decorations
        const NO_DECORATION = Self::NO_TITLE_BAR.bits() | Self::NO_RESIZE.bits() | Self::NO_SCROLLBAR.bits() | Self::NO_COLLAPSE.bits();
        /// Disable all user interactions
        const NO_INPUTS = Self::NO_MOUSE_INPUTS.bits() | Self::NO_NAV_INPUTS.bits();
    }
}

bitflags! {
    /// Flags for combo boxes
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComboFlags: i32 {
        const NONE = 0;
        /// Align the popup toward the left by default
        const POPUP_ALIGN_LEFT = sys::ImGuiComboFlags_PopupAlignLeft as i32;
        /// Max ~4 items visible
        const HEIGHT_SMALL = sys::ImGuiComboFlags_HeightSmall as i32;
        /// Max ~8 items visible (default)
        const HEIGHT_REGULAR = sys::ImGuiComboFlags_HeightRegular as i32;
        /// Max ~20 items visible
        const HEIGHT_LARGE = sys::ImGuiComboFlags_HeightLarge as i32;
        /// As many fitting items as possible
        const HEIGHT_LARGEST = sys::ImGuiComboFlags_HeightLargest as i32;
        /// Display on the preview box without the square arrow button
        const NO_ARROW_BUTTON = sys::ImGuiComboFlags_NoArrowButton as i32;
        /// Display only a square arrow button
        const NO_PREVIEW = sys::ImGuiComboFlags_NoPreview as i32;
        /// Width dynamically calculated from preview contents
        const WIDTH_FIT_PREVIEW = sys::ImGuiComboFlags_WidthFitPreview as i32;
    }
}

bitflags! {
    /// Flags for selectables
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SelectableFlags: i32 {
        const NONE = 0;
        /// Clicking this doesn't close parent popup window
        const NO_AUTO_CLOSE_POPUPS = sys::ImGuiSelectableFlags_NoAutoClosePopups as i32;
        /// Frame spans all columns (text still fits in current column)
        const SPAN_ALL_COLUMNS = sys::ImGuiSelectableFlags_SpanAllColumns as i32;
        /// Generate press events on double clicks too
        const ALLOW_DOUBLE_CLICK = sys::ImGuiSelectableFlags_AllowDoubleClick as i32;
        /// Cannot be selected, display greyed out text
        const DISABLED = sys::ImGuiSelectableFlags_Disabled as i32;
        /// Allow subsequent widgets to overlap this one
        const ALLOW_OVERLAP = sys::ImGuiSelectableFlags_AllowOverlap as i32;
    }
}

bitflags! {
    /// Flags for tables
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TableFlags: i32 {
        const NONE = 0;
        const RESIZABLE = sys::ImGuiTableFlags_Resizable as i32;
        const REORDERABLE = sys::ImGuiTableFlags_Reorderable as i32;
        const HIDEABLE = sys::ImGuiTableFlags_Hideable as i32;
        const SORTABLE = sys::ImGuiTableFlags_Sortable as i32;
        const NO_SAVED_SETTINGS = sys::ImGuiTableFlags_NoSavedSettings as i32;
        const CONTEXT_MENU_IN_BODY = sys::ImGuiTableFlags_ContextMenuInBody as i32;
        /// Alternate row background colors
        const ROW_BG = sys::ImGuiTableFlags_RowBg as i32;
        const BORDERS_INNER_H = sys::ImGuiTableFlags_BordersInnerH as i32;
        const BORDERS_OUTER_H = sys::ImGuiTableFlags_BordersOuterH as i32;
        const BORDERS_INNER_V = sys::ImGuiTableFlags_BordersInnerV as i32;
        const BORDERS_OUTER_V = sys::ImGuiTableFlags_BordersOuterV as i32;
        const BORDERS_H = Self::BORDERS_INNER_H.bits() | Self::BORDERS_OUTER_H.bits();
        const BORDERS_V = Self::BORDERS_INNER_V.bits() | Self::BORDERS_OUTER_V.bits();
        const BORDERS_INNER = Self::BORDERS_INNER_V.bits() | Self::BORDERS_INNER_H.bits();
        const BORDERS_OUTER = Self::BORDERS_OUTER_V.bits() | Self::BORDERS_OUTER_H.bits();
        const BORDERS = Self::BORDERS_INNER.bits() | Self::BORDERS_OUTER.bits();
        const NO_BORDERS_IN_BODY = sys::ImGuiTableFlags_NoBordersInBody as i32;
        const NO_BORDERS_IN_BODY_UNTIL_RESIZE = sys::ImGuiTableFlags_NoBordersInBodyUntilResize as i32;
        // Sizing policies are a 3-bit field, not independent bits.
        const SIZING_FIXED_FIT = sys::ImGuiTableFlags_SizingFixedFit as i32;
        const SIZING_FIXED_SAME = sys::ImGuiTableFlags_SizingFixedSame as i32;
        const SIZING_STRETCH_PROP = sys::ImGuiTableFlags_SizingStretchProp as i32;
        const SIZING_STRETCH_SAME = sys::ImGuiTableFlags_SizingStretchSame as i32;
        const NO_HOST_EXTEND_X = sys::ImGuiTableFlags_NoHostExtendX as i32;
        const NO_HOST_EXTEND_Y = sys::ImGuiTableFlags_NoHostExtendY as i32;
        const NO_KEEP_COLUMNS_VISIBLE = sys::ImGuiTableFlags_NoKeepColumnsVisible as i32;
        const PRECISE_WIDTHS = sys::ImGuiTableFlags_PreciseWidths as i32;
        const NO_CLIP = sys::ImGuiTableFlags_NoClip as i32;
        const PAD_OUTER_X = sys::ImGuiTableFlags_PadOuterX as i32;
        const NO_PAD_OUTER_X = sys::ImGuiTableFlags_NoPadOuterX as i32;
        const NO_PAD_INNER_X = sys::ImGuiTableFlags_NoPadInnerX as i32;
        const SCROLL_X = sys::ImGuiTableFlags_ScrollX as i32;
        const SCROLL_Y = sys::ImGuiTableFlags_ScrollY as i32;
        const SORT_MULTI = sys::ImGuiTableFlags_SortMulti as i32;
        const SORT_TRISTATE = sys::ImGuiTableFlags_SortTristate as i32;
        const HIGHLIGHT_HOVERED_COLUMN = sys::ImGuiTableFlags_HighlightHoveredColumn as i32;
    }
}

bitflags! {
    /// Flags for table columns
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TableColumnFlags: i32 {
        const NONE = 0;
        const DEFAULT_HIDE = sys::ImGuiTableColumnFlags_DefaultHide as i32;
        const DEFAULT_SORT = sys::ImGuiTableColumnFlags_DefaultSort as i32;
        const WIDTH_FIXED = sys::ImGuiTableColumnFlags_WidthFixed as i32;
        const WIDTH_STRETCH = sys::ImGuiTableColumnFlags_WidthStretch as i32;
        const NO_RESIZE = sys::ImGuiTableColumnFlags_NoResize as i32;
        const NO_REORDER = sys::ImGuiTableColumnFlags_NoReorder as i32;
        const NO_HIDE = sys::ImGuiTableColumnFlags_NoHide as i32;
        const NO_CLIP = sys::ImGuiTableColumnFlags_NoClip as i32;
        const NO_SORT = sys::ImGuiTableColumnFlags_NoSort as i32;
        const NO_SORT_ASCENDING = sys::ImGuiTableColumnFlags_NoSortAscending as i32;
        const NO_SORT_DESCENDING = sys::ImGuiTableColumnFlags_NoSortDescending as i32;
        const NO_HEADER_LABEL = sys::ImGuiTableColumnFlags_NoHeaderLabel as i32;
        const NO_HEADER_WIDTH = sys::ImGuiTableColumnFlags_NoHeaderWidth as i32;
        const PREFER_SORT_ASCENDING = sys::ImGuiTableColumnFlags_PreferSortAscending as i32;
        const PREFER_SORT_DESCENDING = sys::ImGuiTableColumnFlags_PreferSortDescending as i32;
        const INDENT_ENABLE = sys::ImGuiTableColumnFlags_IndentEnable as i32;
        const INDENT_DISABLE = sys::ImGuiTableColumnFlags_IndentDisable as i32;
    }
}

/// Conversion from the raw integer a C caller passes for a flag set.
pub trait BoundaryFlags: Sized + Copy {
    const NAME: &'static str;

    /// Keep the known bits of `raw`, logging the ones that were dropped.
    fn from_boundary(raw: i32, operation: &'static str) -> Self;
}

macro_rules! boundary_flags {
    ($($ty:ident),* $(,)?) => {$(
        impl BoundaryFlags for $ty {
            const NAME: &'static str = stringify!($ty);

            fn from_boundary(raw: i32, operation: &'static str) -> Self {
                let flags = Self::from_bits_truncate(raw);
                let dropped = raw & !flags.bits();
                if dropped != 0 {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        "{}: ignoring unknown {} bits {:#x}",
                        operation,
                        Self::NAME,
                        dropped
                    );
                    #[cfg(not(feature = "tracing"))]
                    let _ = operation;
                }
                flags
            }
        }
    )*};
}

boundary_flags!(
    WindowFlags,
    ComboFlags,
    SelectableFlags,
    TableFlags,
    TableColumnFlags
);
