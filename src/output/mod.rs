//! Output sinks.
//!
//! Each sink follows an `Init -> Write* -> Save` lifecycle: `init` opens
//! the destination, `write` is called once per surviving variant, `save`
//! flushes and closes it.

mod csv_sink;
mod html;
mod json;
mod text;

use std::fs::File;
use std::io::{self, Write as _};

use crate::domain::Variant;
use crate::error::{Error, Result};

pub trait Output {
    fn init(&mut self, writer: Box<dyn io::Write + Send>) -> Result<()>;
    fn write(&mut self, variant: &Variant) -> Result<()>;
    fn save(&mut self) -> Result<()>;
}

/// Resolves a format name to its `Output` implementation.
pub fn build(format: &str) -> Result<Box<dyn Output>> {
    match format.to_lowercase().as_str() {
        "text" => Ok(Box::new(text::TextOutput::default())),
        "json" => Ok(Box::new(json::JsonOutput::default())),
        "csv" => Ok(Box::new(csv_sink::CsvOutput::default())),
        "html" => Ok(Box::new(html::HtmlOutput::default())),
        other => Err(Error::Config { kind: "output-format", code: other.to_string() }),
    }
}

/// Opens `path`, or stdout when `path` is `None`.
pub fn destination(path: &Option<String>) -> Result<Box<dyn io::Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::Output(e.to_string()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Runs the full `Init -> Write* -> Save` lifecycle for a batch of
/// variants against one already-open writer.
pub fn emit(mut sink: Box<dyn Output>, writer: Box<dyn io::Write + Send>, variants: &[Variant]) -> Result<()> {
    sink.init(writer)?;
    for variant in variants {
        sink.write(variant)?;
    }
    sink.save()
}

fn flush(writer: &mut dyn io::Write) -> Result<()> {
    writer.flush().map_err(|e| Error::Output(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub fn into_string(self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
