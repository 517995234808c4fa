mod path;
mod template_id;
mod thunk;
mod value;

pub use path::{Path, Step};
pub use template_id::TemplateId;
pub use thunk::Thunk;
pub use value::{Map, RENDER_KEY, Value};
