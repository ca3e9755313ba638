use anyhow::Result;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}
