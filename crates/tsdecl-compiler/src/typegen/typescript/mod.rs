//! TypeScript declaration generation.
//!
//! [`TypeRenderer`] turns type descriptors into TypeScript type expressions;
//! [`Emitter`] assembles declaration records into `.d.ts` text.

mod config;
mod emitter;
pub(crate) mod naming;
mod render;
mod ts_type;


pub use config::{Config, VoidType};
pub use emitter::{Declaration, Emission, Emitter};
pub use render::TypeRenderer;
pub use ts_type::TsType;
