//! Scratch buffer for staging Rust strings as C strings
//!
//! The safe wrapper takes `&str` labels. Each call pushes its strings into a
//! [`UiBuffer`] with a trailing NUL and hands the core borrowed [`CStr`]s
//! that live until the next push.

use std::ffi::CStr;

/// Internal buffer for UI string operations
#[derive(Debug)]
pub struct UiBuffer {
    pub buffer: Vec<u8>,
    pub max_len: usize,
}

impl UiBuffer {
    /// Creates a new buffer with the specified capacity
    pub const fn new(max_len: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_len,
        }
    }

    /// Push a single text to the scratch buffer.
    pub fn scratch_txt(&mut self, txt: impl AsRef<str>) -> &CStr {
        self.refresh_buffer();

        let start = self.push(txt);
        self.at(start)
    }

    /// Push an optional text to the scratch buffer.
    pub fn scratch_txt_opt(&mut self, txt: Option<impl AsRef<str>>) -> Option<&CStr> {
        txt.map(|v| self.scratch_txt(v))
    }

    /// Same as [`Self::scratch_txt`] but for two strings that stay valid together
    pub fn scratch_txt_two(
        &mut self,
        txt_0: impl AsRef<str>,
        txt_1: impl AsRef<str>,
    ) -> (&CStr, &CStr) {
        self.refresh_buffer();

        let first = self.push(txt_0);
        let second = self.push(txt_1);

        (self.at(first), self.at(second))
    }

    /// Same as [`Self::scratch_txt_two`] but with an optional second value
    pub fn scratch_txt_with_opt(
        &mut self,
        txt_0: impl AsRef<str>,
        txt_1: Option<impl AsRef<str>>,
    ) -> (&CStr, Option<&CStr>) {
        match txt_1 {
            Some(value) => {
                let (a, b) = self.scratch_txt_two(txt_0, value);
                (a, Some(b))
            }
            None => (self.scratch_txt(txt_0), None),
        }
    }

    /// Clears the buffer if it grew past `max_len`, so it does not grow without bound.
    pub fn refresh_buffer(&mut self) {
        if self.buffer.len() > self.max_len {
            self.buffer.clear();
        }
    }

    /// The NUL-terminated string starting at `pos`.
    ///
    /// Panics if `pos` is not the start of a pushed string.
    fn at(&self, pos: usize) -> &CStr {
        match CStr::from_bytes_until_nul(&self.buffer[pos..]) {
            Ok(text) => text,
            Err(_) => unreachable!("every pushed string is NUL-terminated"),
        }
    }

    /// Pushes a new scratch text and returns the byte index where it starts.
    pub fn push(&mut self, txt: impl AsRef<str>) -> usize {
        assert!(!txt.as_ref().contains('\0'), "string contained null byte");
        let len = self.buffer.len();
        self.buffer.extend(txt.as_ref().as_bytes());
        self.buffer.push(b'\0');

        len
    }
}

impl Default for UiBuffer {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_text_is_nul_terminated() {
        let mut buf = UiBuffer::new(64);
        assert_eq!(buf.scratch_txt("Hello"), c"Hello");
        assert_eq!(buf.buffer.last(), Some(&0));
    }

    #[test]
    fn two_strings_stay_valid_together() {
        let mut buf = UiBuffer::new(64);
        let (a, b) = buf.scratch_txt_two("Quit", "Ctrl+Q");
        assert_eq!(a, c"Quit");
        assert_eq!(b, c"Ctrl+Q");

        let (a, b) = buf.scratch_txt_with_opt("Open", None::<&str>);
        assert_eq!(a, c"Open");
        assert!(b.is_none());
        assert!(buf.scratch_txt_opt(None::<String>).is_none());
    }

    #[test]
    fn buffer_is_cleared_once_over_max_len() {
        let mut buf = UiBuffer::new(8);
        buf.scratch_txt("0123456789");
        assert_eq!(buf.buffer.len(), 11);
        buf.scratch_txt("ab");
        assert_eq!(buf.buffer, b"ab\0");
    }

    #[test]
    #[should_panic(expected = "string contained null byte")]
    fn interior_nul_panics() {
        UiBuffer::default().scratch_txt("a\0b");
    }
}
