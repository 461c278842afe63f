//! taskmart-core: vocabulary, task model, static tables, and the ranking
//! engine for the task storefront.

pub mod rank;
pub mod relevance;
pub mod tables;
pub mod task;
pub mod vocab;

pub use rank::{MAX_RESULTS, RankOptions, RankedTask, rank, rank_with};
pub use relevance::{best_relevance_rank, relevance_rank};
pub use tables::{DEFAULT_IMAGE, UNRANKED, image_for_title, popular_task_title, priority_rank};
pub use task::Task;
pub use vocab::{Impact, Status, Tag};
