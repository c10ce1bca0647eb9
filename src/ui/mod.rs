pub mod challenge;
pub mod editor;
pub mod view;

pub use challenge::{ChallengeRunner, RunnerState};
pub use editor::{BulkTicket, DocumentEditor, RowTicket};
