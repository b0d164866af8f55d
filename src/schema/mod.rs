//! The fixed vocabulary shared by the reader and the writer.
//!
//! ```text
//! namespace  → which namespace URIs count as the core schema
//! defaults   → DEF_* values for every optional field
//! classify   → ConcreteKind / Category: tag name ↔ concrete type ↔ abstract category
//! ```

pub mod classify;
pub mod defaults;
pub mod namespace;

pub use classify::{
    Category, ConcreteKind, is_color_style, is_container, is_feature, is_geometry,
    is_lat_lon_box, is_overlay, is_style_selector, is_sub_style, is_time_primitive, is_view,
};
