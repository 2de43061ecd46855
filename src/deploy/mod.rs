// ABOUTME: Stack deployment orchestration and revision versioning.
// ABOUTME: Exports the StackDeployer and the types describing its results.

mod deployer;
mod revision;

pub use deployer::{DeployReport, StackDeployer};
pub use revision::RevisionCount;
