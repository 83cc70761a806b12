mod page;
mod theme;


pub use page::{RenderedPage, render_page};
pub use theme::{THEME_ATTRIBUTE, Theme};
