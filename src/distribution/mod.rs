//! Resume rewriting: section detection, phrase templates, and the bullet
//! distributor that injects missing keywords.

pub mod distributor;
pub mod phrases;
pub mod sections;

pub use distributor::{
    contains_keyword, BulletDistributor, DistributionOptions, DistributionOutcome,
    DistributionStats, DEFAULT_MAX_PER_BULLET,
};
