//! Newline-delimited JSON, one object per variant.
//!
//! Plain NDJSON rather than a single top-level array: `write` is called
//! once per variant as it survives the pipeline, long before `save`
//! closes the stream, so there is no natural point to buffer a whole
//! array and its closing bracket.

use std::io;

use super::{flush, Output};
use crate::domain::Variant;
use crate::error::{Error, Result};

#[derive(Default)]
pub struct JsonOutput {
    writer: Option<Box<dyn io::Write + Send>>,
}

impl Output for JsonOutput {
    fn init(&mut self, writer: Box<dyn io::Write + Send>) -> Result<()> {
        self.writer = Some(writer);
        Ok(())
    }

    fn write(&mut self, variant: &Variant) -> Result<()> {
        let writer = self.writer.as_mut().expect("init called before write");
        serde_json::to_writer(&mut *writer, variant).map_err(|e| Error::Output(e.to_string()))?;
        writeln!(writer).map_err(|e| Error::Output(e.to_string()))
    }

    fn save(&mut self) -> Result<()> {
        let writer = self.writer.as_mut().expect("init called before save");
        flush(writer.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuf;

    #[test]
    fn writes_one_json_object_per_line() {
        let buf = SharedBuf::default();
        let mut sink = JsonOutput::default();
        sink.init(Box::new(buf.clone())).unwrap();

        let mut a = Variant::new("co", "", "gogle", "com");
        a.id = 1;
        let mut b = Variant::new("hg", "", "g00gle", "com");
        b.id = 2;
        sink.write(&a).unwrap();
        sink.write(&b).unwrap();
        sink.save().unwrap();

        let text = buf.into_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["algorithm"], "co");
        assert_eq!(parsed["label"], "gogle");
    }
}
