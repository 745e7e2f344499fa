//! actdiag rendering and Kroki URL encoding
//!
//! Turns a [`RoleGroupedView`](crate::workflow::RoleGroupedView) into actdiag
//! text, then into a compressed token that a Kroki server can render.

pub mod encode;
pub mod render;
pub mod url;

pub use encode::{decode, encode, EncodeError};
pub use render::{render, RenderOptions, DIAGRAM_FOOTER, DIAGRAM_HEADER};
pub use url::{DiagramUrl, DEFAULT_RENDER_HOST};
