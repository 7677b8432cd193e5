//! Template layers: where they live, which ones apply, and how they are copied

pub mod copier;
pub mod resolver;
pub mod source;

pub use copier::copy_layer;
pub use resolver::{plan_layers, resolve_layers, LayerKind, TemplateLayer};
pub use source::{TemplateFile, TemplateSource};
