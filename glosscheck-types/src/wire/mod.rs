mod summary_v1;

pub use summary_v1::{EarlyExitV1, SummaryV1};
