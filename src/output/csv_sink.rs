//! CSV output, one row per variant, via the `csv` crate.

use std::io;

use super::Output;
use crate::domain::Variant;
use crate::error::{Error, Result};

const HEADER: &[&str] = &["id", "domain", "algorithm", "ld", "live", "cached", "ip"];

#[derive(Default)]
pub struct CsvOutput {
    writer: Option<csv::Writer<Box<dyn io::Write + Send>>>,
}

impl Output for CsvOutput {
    fn init(&mut self, writer: Box<dyn io::Write + Send>) -> Result<()> {
        let mut w = csv::Writer::from_writer(writer);
        w.write_record(HEADER).map_err(|e| Error::Output(e.to_string()))?;
        self.writer = Some(w);
        Ok(())
    }

    fn write(&mut self, variant: &Variant) -> Result<()> {
        let w = self.writer.as_mut().expect("init called before write");
        w.write_record(&[
            variant.id.to_string(),
            variant.fqdn(),
            variant.algorithm.clone(),
            variant.get_meta("LD").unwrap_or("-").to_string(),
            variant.live.to_string(),
            variant.cached.to_string(),
            variant.get_meta("IP").unwrap_or("-").to_string(),
        ])
        .map_err(|e| Error::Output(e.to_string()))
    }

    fn save(&mut self) -> Result<()> {
        let w = self.writer.as_mut().expect("init called before save");
        w.flush().map_err(|e| Error::Output(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuf;

    #[test]
    fn writes_a_header_and_one_row_per_variant() {
        let buf = SharedBuf::default();
        let mut sink = CsvOutput::default();
        sink.init(Box::new(buf.clone())).unwrap();
        let mut v = Variant::new("co", "", "gogle", "com");
        v.id = 1;
        sink.write(&v).unwrap();
        sink.save().unwrap();

        let text = buf.into_string();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "id,domain,algorithm,ld,live,cached,ip");
        assert!(lines.next().unwrap().starts_with("1,gogle.com,co,"));
    }
}
