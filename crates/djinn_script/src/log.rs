//! Script logging facade
//!
//! Lines go to the host, which decides where they end up.

use crate::ffi::{HostCalls, LogLevel};

/// Fire-and-forget logging through the host.
#[derive(Clone, Copy)]
pub struct Log<'a> {
    host: &'a dyn HostCalls,
}

impl<'a> Log<'a> {
    pub fn new(host: &'a dyn HostCalls) -> Self {
        Self { host }
    }

    pub fn trace(&self, text: &str) {
        self.host.log(LogLevel::Trace, text);
    }

    pub fn info(&self, text: &str) {
        self.host.log(LogLevel::Info, text);
    }

    pub fn warn(&self, text: &str) {
        self.host.log(LogLevel::Warn, text);
    }

    pub fn error(&self, text: &str) {
        self.host.log(LogLevel::Error, text);
    }

    pub fn critical(&self, text: &str) {
        self.host.log(LogLevel::Critical, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;

    #[test]
    fn forwards_level_and_text() {
        let test_host = TestHost::default();
        let log = Log::new(&test_host);
        log.info("spawned");
        log.critical("out of bodies");

        assert_eq!(
            test_host.logs(),
            vec![
                (LogLevel::Info, "spawned".to_owned()),
                (LogLevel::Critical, "out of bodies".to_owned()),
            ]
        );
    }
}
