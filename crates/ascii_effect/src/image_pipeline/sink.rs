use std::io::{self, Write};

/// Consumer of converted markup, such as a page element or a file.
pub trait DisplaySink {
    fn present(&mut self, markup: &str) -> io::Result<()>;
}

/// Sink writing each presented frame to a writer, one frame per line.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for WriteSink<W> {
    fn present(&mut self, markup: &str) -> io::Result<()> {
        writeln!(self.writer, "{markup}")?;
        self.writer.flush()
    }
}

impl DisplaySink for Vec<String> {
    fn present(&mut self, markup: &str) -> io::Result<()> {
        self.push(markup.to_owned());
        Ok(())
    }
}
