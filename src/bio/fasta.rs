use crate::bio::taxonomy::{format_taxonomy, parse_lineage};
use crate::core::config::Config;
use crate::{Result, TaxRenameError};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Path that stands for stdin or stdout
pub const STDIO_PATH: &str = "-";

/// Identifier settings for a [`HeaderRewriter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    pub id_prefix: String,
    pub start_index: u64,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            id_prefix: "seq_".to_string(),
            start_index: 1,
        }
    }
}

impl From<&Config> for RewriteOptions {
    fn from(config: &Config) -> Self {
        Self {
            id_prefix: config.rewrite.id_prefix.clone(),
            start_index: config.rewrite.start_index,
        }
    }
}

/// Streaming rewriter from lineage headers to sequential ids.
///
/// Each `>` line becomes `>seq_N <rank-tagged lineage>`, where N counts
/// headers only. Every other line is trimmed and passed through untouched.
#[derive(Debug, Clone)]
pub struct HeaderRewriter {
    id_prefix: String,
    next_index: u64,
    headers_seen: u64,
}

impl HeaderRewriter {
    pub fn new() -> Self {
        Self::with_options(RewriteOptions::default())
    }

    pub fn with_options(options: RewriteOptions) -> Self {
        Self {
            id_prefix: options.id_prefix,
            next_index: options.start_index,
            headers_seen: 0,
        }
    }

    /// Rewrite one input line. Total over any input.
    pub fn rewrite_line(&mut self, line: &str) -> String {
        let line = line.trim();
        match line.strip_prefix('>') {
            Some(lineage) => self.rewrite_header(lineage),
            None => line.to_string(),
        }
    }

    fn rewrite_header(&mut self, lineage: &str) -> String {
        let taxa = parse_lineage(lineage);
        let header = format!(
            ">{}{} {}",
            self.id_prefix,
            self.next_index,
            format_taxonomy(&taxa)
        );
        self.next_index += 1;
        self.headers_seen += 1;
        header
    }

    /// Number of header lines rewritten so far
    pub fn headers_seen(&self) -> u64 {
        self.headers_seen
    }

    /// Number the next header will receive
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Lazily rewrite a fallible line stream, one output line per input line
    pub fn rewrite_lines<I>(self, lines: I) -> RewriteLines<I>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        RewriteLines {
            rewriter: self,
            lines,
        }
    }
}

impl Default for HeaderRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`HeaderRewriter::rewrite_lines`]
pub struct RewriteLines<I> {
    rewriter: HeaderRewriter,
    lines: I,
}

impl<I> RewriteLines<I> {
    pub fn rewriter(&self) -> &HeaderRewriter {
        &self.rewriter
    }
}

impl<I> Iterator for RewriteLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map(|line| self.rewriter.rewrite_line(&line)))
    }
}

/// Counts reported after (and during) a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub lines: u64,
    pub sequences: u64,
    pub sequence_lines: u64,
    pub blank_lines: u64,
}

/// Line reader that breaks on `\n`, `\r\n` and a bare `\r`.
///
/// Terminators are not part of the yielded line. Invalid UTF-8 comes back
/// as an `InvalidData` error for that line only.
pub struct TextLines<R> {
    reader: R,
    after_cr: bool,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            after_cr: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();

        loop {
            let (consumed, terminator) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                // Only an unterminated final line can reach EOF non-empty
                if buf.is_empty() {
                    return Ok((!line.is_empty()).then_some(line));
                }

                // `\r\n` split across two buffer fills
                if self.after_cr {
                    self.after_cr = false;
                    if buf[0] == b'\n' {
                        (1, None)
                    } else {
                        continue;
                    }
                } else {
                    match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                        Some(i) => {
                            line.extend_from_slice(&buf[..i]);
                            (i + 1, Some(buf[i]))
                        }
                        None => {
                            line.extend_from_slice(buf);
                            (buf.len(), None)
                        }
                    }
                }
            };

            self.reader.consume(consumed);
            match terminator {
                Some(b'\r') => {
                    self.after_cr = true;
                    return Ok(Some(line));
                }
                Some(_) => return Ok(Some(line)),
                None => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line() {
            Ok(Some(bytes)) => Some(
                String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Line-oriented writer; every line is terminated with `\n`
pub struct LineSink<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush buffered lines and hand back the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

/// Destination opened by [`create_output`]
pub enum OutputTarget {
    Stdout(io::Stdout),
    File(File),
    Gzip(GzEncoder<File>),
}

impl OutputTarget {
    /// Complete the stream; closes the gzip member for compressed output
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(mut out) => out.flush(),
            OutputTarget::File(mut file) => file.flush(),
            OutputTarget::Gzip(encoder) => encoder.finish().map(|_| ()),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(out) => out.write(buf),
            OutputTarget::File(file) => file.write(buf),
            OutputTarget::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(out) => out.flush(),
            OutputTarget::File(file) => file.flush(),
            OutputTarget::Gzip(encoder) => encoder.flush(),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Open an input FASTA (plain, `.gz`, or `-` for stdin)
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if is_stdio(path) {
        debug!("Reading from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TaxRenameError::NotFound(path.to_path_buf()),
        _ => TaxRenameError::Io(e),
    })?;
    debug!("Opened input {}", path.display());

    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create an output FASTA (plain, `.gz`, or `-` for stdout)
pub fn create_output<P: AsRef<Path>>(path: P) -> Result<OutputTarget> {
    let path = path.as_ref();
    if is_stdio(path) {
        debug!("Writing to stdout");
        return Ok(OutputTarget::Stdout(io::stdout()));
    }

    let file = File::create(path)?;
    debug!("Created output {}", path.display());

    if is_gzip(path) {
        Ok(OutputTarget::Gzip(GzEncoder::new(file, Compression::default())))
    } else {
        Ok(OutputTarget::File(file))
    }
}

/// Rewrite `reader` into `writer` with the default checkpoint behaviour
pub fn convert_stream<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: &Config,
) -> Result<ConversionSummary> {
    convert_stream_with_progress(reader, writer, config, |_| {})
}

/// Rewrite `reader` into `writer`, calling `on_checkpoint` every
/// `output.checkpoint_interval` lines after the sink has been flushed.
///
/// Lines already written stay written if a later read or write fails.
pub fn convert_stream_with_progress<R, W, F>(
    reader: R,
    writer: W,
    config: &Config,
    mut on_checkpoint: F,
) -> Result<ConversionSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&ConversionSummary),
{
    config.validate()?;
    let interval = config.output.checkpoint_interval;

    let mut sink = LineSink::new(writer);
    let mut summary = ConversionSummary::default();
    let mut lines = HeaderRewriter::with_options(RewriteOptions::from(config))
        .rewrite_lines(TextLines::new(reader));

    while let Some(line) = lines.next() {
        let rewritten = line?;

        let headers = lines.rewriter().headers_seen();
        if headers > summary.sequences {
            summary.sequences = headers;
        } else if rewritten.is_empty() {
            summary.blank_lines += 1;
        } else {
            summary.sequence_lines += 1;
        }

        sink.write_line(&rewritten)?;
        summary.lines += 1;

        if summary.lines % interval == 0 {
            sink.flush()?;
            info!(
                "Processed {} lines, {} sequences...",
                summary.lines, summary.sequences
            );
            on_checkpoint(&summary);
        }
    }

    sink.into_inner()?;
    Ok(summary)
}

/// Convert `input` into `output`
pub fn convert_fasta_headers<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &Config,
) -> Result<ConversionSummary> {
    convert_fasta_headers_with_progress(input, output, config, |_| {})
}

/// Convert `input` into `output`, reporting each checkpoint
pub fn convert_fasta_headers_with_progress<P, Q, F>(
    input: P,
    output: Q,
    config: &Config,
    on_checkpoint: F,
) -> Result<ConversionSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(&ConversionSummary),
{
    let (input, output) = (input.as_ref(), output.as_ref());
    config.validate()?;

    // Open the input first so a missing file never truncates the output
    let reader = open_input(input)?;
    let mut target = create_output(output)?;

    let summary = convert_stream_with_progress(reader, &mut target, config, on_checkpoint)?;
    target.finish()?;

    info!(
        "Converted {} -> {}: {} sequences in {} lines",
        input.display(),
        output.display(),
        summary.sequences,
        summary.lines
    );
    Ok(summary)
}
