pub mod backup;
pub mod prediction;
pub mod statistics;
pub mod timeline;

pub use backup::{BackupDocument, ImportSummary};
pub use prediction::{PredictionResult, SongPrediction};
pub use statistics::{DashboardSummary, MemberStat, SongStat};
