#![forbid(unsafe_code)]

//! External command channel for the Tiny Canvas device model.
//!
//! `tinycanvas-feed` is the host adapter between an append-only, line-
//! oriented command log and the pure device core. One writer (outside this
//! crate) appends `X,Y,STATUS` lines; [`LogTail`] tail-polls the file,
//! consumes only newline-complete content, and feeds the parsed words to the
//! device's bus path.
//!
//! There is no locking protocol with the writer: consistency comes entirely
//! from the line-completeness rule (an unterminated trailing fragment is
//! left for the next poll), which tolerates a writer appending mid-read.

pub mod command;
pub mod tail;

pub use command::parse_line;
pub use tail::LogTail;
