//! CLI command implementations.

mod build;
mod init;
mod outline;
mod validate;

pub(crate) use build::BuildArgs;
pub(crate) use init::InitArgs;
pub(crate) use outline::OutlineArgs;
pub(crate) use validate::ValidateArgs;
