use std::io;
use std::sync::{Arc, Mutex};

use slog::{Drain, Logger};
use slog_async::Async;
use slog_term::{CompactFormat, FullFormat, PlainDecorator, PlainSyncDecorator};

pub struct TestLogger;

impl TestLogger {
    fn from_writer<W: io::Write + Send + 'static>(writer: W) -> Logger {
        let decorator = PlainDecorator::new(writer);
        let drain = CompactFormat::new(decorator).build().fuse();
        let drain = Async::new(drain).build().fuse();
        Logger::root(Arc::new(drain), slog::o!())
    }

    pub fn stdout() -> Logger {
        Self::from_writer(slog_term::TestStdoutWriter)
    }

    /// Logger writing synchronously to an in memory buffer, so a test can read the logs
    /// as soon as the logging call returns.
    pub fn memory() -> (Logger, MemoryLogs) {
        let logs = MemoryLogs::default();
        let decorator = PlainSyncDecorator::new(logs.clone());
        let drain = FullFormat::new(decorator).build().fuse();

        (Logger::root(drain, slog::o!()), logs)
    }
}

#[derive(Clone, Default)]
pub struct MemoryLogs(Arc<Mutex<Vec<u8>>>);

impl MemoryLogs {
    pub fn read(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

impl io::Write for MemoryLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
