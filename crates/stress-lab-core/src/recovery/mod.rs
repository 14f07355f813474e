pub mod timeline;

pub use timeline::{
    project_recovery, RecoveryAssumptions, RecoveryIter, RecoveryPoint, RecoveryProjection,
};
