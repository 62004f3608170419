//! CLI command implementations.

pub(crate) mod batch;
mod io;
pub(crate) mod render;

pub(crate) use batch::BatchArgs;
pub(crate) use render::RenderArgs;
