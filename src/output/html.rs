//! Minimal self-contained HTML table, no styling dependency beyond what
//! is inlined here.

use std::io;

use super::{flush, Output};
use crate::domain::Variant;
use crate::error::{Error, Result};

const COLUMNS: &[&str] = &["ID", "Domain", "Algorithm", "LD", "Live", "IP"];

#[derive(Default)]
pub struct HtmlOutput {
    writer: Option<Box<dyn io::Write + Send>>,
}

impl Output for HtmlOutput {
    fn init(&mut self, mut writer: Box<dyn io::Write + Send>) -> Result<()> {
        writeln!(writer, "<!doctype html><html><head><meta charset=\"utf-8\"><title>domtypo</title></head><body>")
            .map_err(|e| Error::Output(e.to_string()))?;
        writeln!(writer, "<table border=\"1\">").map_err(|e| Error::Output(e.to_string()))?;
        write!(writer, "<tr>").map_err(|e| Error::Output(e.to_string()))?;
        for col in COLUMNS {
            write!(writer, "<th>{col}</th>").map_err(|e| Error::Output(e.to_string()))?;
        }
        writeln!(writer, "</tr>").map_err(|e| Error::Output(e.to_string()))?;
        self.writer = Some(writer);
        Ok(())
    }

    fn write(&mut self, variant: &Variant) -> Result<()> {
        let writer = self.writer.as_mut().expect("init called before write");
        writeln!(
            writer,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            variant.id,
            escape(&variant.fqdn()),
            escape(&variant.algorithm),
            variant.get_meta("LD").unwrap_or("-"),
            variant.live,
            variant.get_meta("IP").unwrap_or("-"),
        )
        .map_err(|e| Error::Output(e.to_string()))
    }

    fn save(&mut self) -> Result<()> {
        let writer = self.writer.as_mut().expect("init called before save");
        writeln!(writer, "</table></body></html>").map_err(|e| Error::Output(e.to_string()))?;
        flush(writer.as_mut())
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuf;

    #[test]
    fn writes_a_table_with_one_row_per_variant() {
        let buf = SharedBuf::default();
        let mut sink = HtmlOutput::default();
        sink.init(Box::new(buf.clone())).unwrap();
        let mut v = Variant::new("co", "", "gogle", "com");
        v.id = 1;
        sink.write(&v).unwrap();
        sink.save().unwrap();

        let text = buf.into_string();
        assert!(text.contains("<table"));
        assert!(text.contains("gogle.com"));
        assert!(text.trim_end().ends_with("</html>"));
    }
}
