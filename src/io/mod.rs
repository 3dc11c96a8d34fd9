mod export;

pub use export::LedgerPrinter;
