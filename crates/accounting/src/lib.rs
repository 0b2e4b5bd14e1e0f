//! Accounting module (GL journal posting lines).
//!
//! Pure domain logic only: the posting engine that turns these lines into
//! fact accounts lives elsewhere.

pub mod gl_journal;

pub use gl_journal::{Account, AccountKind, AcctSchemaId, GlJournalDocLine, journal_balance};
