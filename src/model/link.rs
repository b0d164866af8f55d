//! Links, screen vectors and Atom metadata.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ObjectData;
use super::enums::{RefreshMode, Units, ViewRefreshMode};
use crate::schema::defaults;

/// `<Link>` and `<Icon>`: a fetchable resource and its refresh policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    pub object: ObjectData,
    pub href: Option<String>,
    pub refresh_mode: RefreshMode,
    pub refresh_interval: f64,
    pub view_refresh_mode: ViewRefreshMode,
    pub view_refresh_time: f64,
    pub view_bound_scale: f64,
    pub view_format: Option<String>,
    pub http_query: Option<String>,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            href: None,
            refresh_mode: RefreshMode::default(),
            refresh_interval: defaults::DEF_REFRESH_INTERVAL,
            view_refresh_mode: ViewRefreshMode::default(),
            view_refresh_time: defaults::DEF_VIEW_REFRESH_TIME,
            view_bound_scale: defaults::DEF_VIEW_BOUND_SCALE,
            view_format: None,
            http_query: None,
        }
    }
}

impl Link {
    pub fn with_href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }
}

/// Screen-space point given as attributes, e.g. `<hotSpot x="0.5" y="0" xunits="fraction" .../>`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
    pub x_units: Units,
    pub y_units: Units,
}

impl Default for Vec2 {
    fn default() -> Self {
        Self {
            x: defaults::DEF_VEC2_X,
            y: defaults::DEF_VEC2_Y,
            x_units: Units::default(),
            y_units: Units::default(),
        }
    }
}

impl Vec2 {
    pub fn new(x: f64, y: f64, x_units: Units, y_units: Units) -> Self {
        Self {
            x,
            y,
            x_units,
            y_units,
        }
    }
}

/// `atom:author`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Author {
    pub names: Vec<String>,
    pub uris: Vec<String>,
    pub emails: Vec<String>,
}

/// `atom:link`; all fields are attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtomLink {
    pub href: Option<String>,
    pub rel: Option<String>,
    pub media_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    pub length: Option<String>,
}

/// `<Snippet maxLines="2">` short description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snippet {
    pub text: String,
    pub max_lines: i32,
}

impl Default for Snippet {
    fn default() -> Self {
        Self {
            text: String::new(),
            max_lines: defaults::DEF_SNIPPET_MAX_LINES,
        }
    }
}

impl Snippet {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
