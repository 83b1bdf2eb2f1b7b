pub mod links;
pub mod pointer;
pub mod viewport;

pub use links::{publish_navigate_handle, wire_section_links};
pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use viewport::{resize_to_container, wire_resize, wire_visibility};
