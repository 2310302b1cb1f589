use crate::ffi::HostCalls;

/// Read-only view of the host window.
#[derive(Clone, Copy)]
pub struct Window<'a> {
    host: &'a dyn HostCalls,
}

impl<'a> Window<'a> {
    pub fn new(host: &'a dyn HostCalls) -> Self {
        Self { host }
    }

    pub fn width(&self) -> f32 {
        self.host.window_width()
    }

    pub fn height(&self) -> f32 {
        self.host.window_height()
    }

    /// Width over height; zero while the window has no height.
    pub fn aspect_ratio(&self) -> f32 {
        let height = self.height();
        if height == 0.0 {
            0.0
        } else {
            self.width() / height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;

    #[test]
    fn aspect_ratio_guards_zero_height() {
        let test_host = TestHost::default();
        assert_eq!(Window::new(&test_host).aspect_ratio(), 0.0);

        test_host.resize(1280.0, 720.0);
        let window = Window::new(&test_host);
        assert_eq!(window.width(), 1280.0);
        assert!((window.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
