//! Plain aligned-column text table, the default format.

use std::io;

use super::{flush, Output};
use crate::domain::Variant;
use crate::error::Result;

const COLUMNS: &[&str] = &["ID", "DOMAIN", "ALGORITHM", "LD", "LIVE", "IP"];

#[derive(Default)]
pub struct TextOutput {
    writer: Option<Box<dyn io::Write + Send>>,
}

impl Output for TextOutput {
    fn init(&mut self, mut writer: Box<dyn io::Write + Send>) -> Result<()> {
        writeln!(writer, "{}", COLUMNS.join("\t")).map_err(|e| crate::error::Error::Output(e.to_string()))?;
        self.writer = Some(writer);
        Ok(())
    }

    fn write(&mut self, variant: &Variant) -> Result<()> {
        let writer = self.writer.as_mut().expect("init called before write");
        let ip = variant.get_meta("IP").unwrap_or("-");
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            variant.id,
            variant.fqdn(),
            variant.algorithm,
            variant.get_meta("LD").unwrap_or("-"),
            variant.live,
            ip,
        )
        .map_err(|e| crate::error::Error::Output(e.to_string()))
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
    fn writes_a_header_and_one_row_per_variant() {
        let buf = SharedBuf::default();
        let mut sink = TextOutput::default();
        sink.init(Box::new(buf.clone())).unwrap();
        let mut v = Variant::new("co", "", "gogle", "com");
        v.id = 1;
        sink.write(&v).unwrap();
        sink.save().unwrap();

        let text = buf.into_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("gogle.com"));
    }
}
