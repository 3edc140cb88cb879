pub mod paper;
pub mod tree;

pub use paper::{Paper, ScoredPaper};
pub use tree::{QueryNode, ResearchRequest, ResearchTree, SubqueryPlan};
