use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("seed and project must not be configured at the same time")]
    SeedAndProject,

    #[error("the control plane can only be targeted when a shoot is targeted")]
    ControlPlaneWithoutShoot,
}
