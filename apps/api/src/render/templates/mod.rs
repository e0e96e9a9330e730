//! Built-in templates. Each is a skin over `render::layout`.

mod clean;
mod modern;
mod professional;

pub use clean::CleanTemplate;
pub use modern::ModernTemplate;
pub use professional::ProfessionalTemplate;
