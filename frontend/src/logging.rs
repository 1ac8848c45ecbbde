use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

/// Collects one formatted event and hands it to the browser console.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            gloo_console::log!(line.to_string());
        }
    }
}

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("run_tracker_lib=debug,{}=debug", env!("CARGO_CRATE_NAME"))))
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleWriter::default)
        .init();
}
