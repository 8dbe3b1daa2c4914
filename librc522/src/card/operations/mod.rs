pub mod dump;
pub mod read;
pub mod sector;
pub mod write;

// Re-export the operations at the operations root so callers can use
// `crate::card::operations::read_block(...)` directly.
pub use dump::{BlockDump, SectorDump, TextDump, dump, dump_data, dump_text, render};
pub use read::read_block;
pub use sector::{WriteReport, write_all, write_text};
pub use write::write_block;
