use crate::sys;

/// Mouse button identifier
#[repr(i32)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum MouseButton {
    /// Left mouse button
    Left = sys::ImGuiMouseButton_Left as i32,
    /// Right mouse button
    Right = sys::ImGuiMouseButton_Right as i32,
    /// Middle mouse button
    Middle = sys::ImGuiMouseButton_Middle as i32,
    /// Extra mouse button 1 (e.g. Back)
    Extra1 = 3,
    /// Extra mouse button 2 (e.g. Forward)
    Extra2 = 4,
}

impl MouseButton {
    pub const VARIANTS: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Extra1,
        MouseButton::Extra2,
    ];
}

impl TryFrom<i32> for MouseButton {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|b| *b as i32 == value)
            .ok_or(value)
    }
}
