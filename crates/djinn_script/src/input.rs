//! Input polling
//!
//! State is read from the host on every call; nothing is buffered here.

use crate::ffi::HostCalls;
use djinn_core::input::{KeyCode, MouseCode};
use djinn_core::math::Vector2;

#[derive(Clone, Copy)]
pub struct Input<'a> {
    host: &'a dyn HostCalls,
}

impl<'a> Input<'a> {
    pub fn new(host: &'a dyn HostCalls) -> Self {
        Self { host }
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.host.input_is_key_down(key)
    }

    pub fn is_mouse_button_down(&self, button: MouseCode) -> bool {
        self.host.input_is_mouse_button_down(button)
    }

    pub fn mouse_position(&self) -> Vector2 {
        self.host.input_mouse_position().into()
    }

    pub fn mouse_x(&self) -> f32 {
        self.host.input_mouse_x()
    }

    pub fn mouse_y(&self) -> f32 {
        self.host.input_mouse_y()
    }

    /// `-1`, `0` or `1` along an axis from a negative/positive key pair. The
    /// negative key wins when both are held.
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        if self.is_key_down(negative) {
            -1.0
        } else if self.is_key_down(positive) {
            1.0
        } else {
            0.0
        }
    }
}
