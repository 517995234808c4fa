//! The rendering engine: variable interpolation and component rendering.
//!
//! Two mutually recursive walkers over one owned tree. The interpolator
//! resolves `%{name}` placeholders by nearest-ancestor lookup, deferring
//! trailing placeholders into memoizing thunks; the renderer rewrites the
//! tree depth-first, merging defaults into component descriptors and
//! invoking their template functions. Both address nodes by context path and
//! write results back through the root, so each observes what the other has
//! already rewritten.

mod component;
mod error;
mod interpolate;
mod registry;
mod render;
mod renderer;

pub use error::{RenderError, compute_suggestions};
pub use interpolate::{force, interpolate, resolve_thunks};
pub use registry::{Defaults, TemplateFn, TemplateRegistry};
pub use render::render;
pub use renderer::Renderer;

/// Resolution-hop limit guarding mutually referential interpolations.
pub(crate) const MAX_DEPTH: usize = 64;
