use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::TransactionLog;

/// Writes a transaction log as plain text, one description per line.
pub struct LedgerPrinter<'a> {
    log: &'a TransactionLog,
}

impl<'a> LedgerPrinter<'a> {
    pub fn new(log: &'a TransactionLog) -> Self {
        Self { log }
    }

    /// Write every entry to `writer` in log order. Returns the number of lines written.
    pub fn print_to<W: Write>(&self, mut writer: W) -> std::io::Result<usize> {
        let mut count = 0;
        for description in self.log.descriptions() {
            writeln!(writer, "{}", description)?;
            count += 1;
        }

        writer.flush()?;
        Ok(count)
    }

    /// Create or truncate `path` and print the ledger into it.
    /// The file is closed when this returns, on success or error.
    pub fn print_to_file(&self, path: &Path) -> std::io::Result<usize> {
        let file = File::create(path)?;
        self.print_to(BufWriter::new(file))
    }
}
