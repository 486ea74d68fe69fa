/// Receives the formatted text blocks produced by a predict call.
///
/// Each successful `predict` presents exactly two blocks: `"Input:"` followed
/// by the generated values, then `"Output:"` followed by the values read back
/// from the model, one value per line.
pub trait PresentationSink: Send {
    fn present(&mut self, block: &str) -> anyhow::Result<()>;
}

/// Collects presented blocks in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    blocks: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }
}

impl PresentationSink for BufferSink {
    fn present(&mut self, block: &str) -> anyhow::Result<()> {
        self.blocks.push(block.to_owned());
        Ok(())
    }
}

/// Forwards presented blocks to the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogSink;

impl PresentationSink for LogSink {
    fn present(&mut self, block: &str) -> anyhow::Result<()> {
        log::info!("{block}");
        Ok(())
    }
}
