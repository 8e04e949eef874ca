pub mod node;
pub mod render;
pub mod style;

pub use node::{Element, Node};
pub use render::{render_fragment, Fragment};
pub use style::{Breakpoint, Responsive, Style};
