// Resume rendering: style table, document renderer, template dispatch,
// export packaging and the HTML screens built on them.

pub mod dates;
pub mod dispatch;
pub mod document;
pub mod export;
pub mod handlers;
pub mod html;
pub mod landing;
pub mod style;

pub use dispatch::{preview, style_for};
