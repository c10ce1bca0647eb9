pub mod challenge;
pub mod document;
pub mod loaders;
pub mod seed;

pub use challenge::{DocVerdict, QuestionOutcome};
pub use document::{DocumentList, DocumentRow, MatchState, RowId};
pub use loaders::{load_seed_file, load_seed_or_default};
pub use seed::PageSeed;
