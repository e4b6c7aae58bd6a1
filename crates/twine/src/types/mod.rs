mod content;
mod element;
mod interpolation;
mod value;

pub use content::{Content, ContentTree, Node, Segment};
pub use element::Element;
pub use interpolation::{Interpolation, Interpolations, Renderer};
pub use value::Value;
