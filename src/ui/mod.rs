pub mod frame;
pub mod pipeline;
pub mod span;
pub mod spinner;
pub mod style;
pub mod theme;

pub use frame::{Frame, Line, RenderLine};
pub use pipeline::RenderPipeline;
pub use span::Span;
pub use spinner::Spinner;
pub use style::{Color, Style};
pub use theme::Theme;
