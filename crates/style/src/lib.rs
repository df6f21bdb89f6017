pub mod page;
pub mod theme;

pub use page::{PageSettings, PageSize, StyleError};
pub use theme::{BlockMetrics, FontFamilies, FontSizes, Palette, StyleTheme};
