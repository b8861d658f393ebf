//! Styled widget seam: the trait component authors implement.

pub mod traits;

pub use traits::{Styled, StyledWidget, StyledWidgetExt};
