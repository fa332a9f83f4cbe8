/// Line-oriented CSV accumulator.
///
/// Every cell is quote-wrapped with internal quotes doubled. Newlines
/// inside a cell are left as-is; handling them is the consumer's
/// responsibility.
pub(crate) struct CsvWriter {
    lines: Vec<String>,
}

impl CsvWriter {
    pub(crate) fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends a raw, unquoted line (banners, no-data markers).
    pub(crate) fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Appends one quoted row.
    pub(crate) fn row<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cells: Vec<String> = cells.into_iter().map(|cell| quote(cell.as_ref())).collect();
        self.lines.push(cells.join(","));
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}

pub(crate) fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
