//! Enumerated field values.
//!
//! Each enum knows its KML spelling and takes its `Default` from the
//! [defaults table](crate::schema::defaults).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::schema::defaults;

/// Common surface of the enumerated field types, used by the generic
/// read/write helpers.
pub trait KmlEnum: Copy + PartialEq + Default + 'static {
    /// Type name used in conversion errors.
    const NAME: &'static str;

    fn from_kml(text: &str) -> Option<Self>;

    fn as_kml(self) -> &'static str;
}

macro_rules! kml_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident default $default:expr; {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        impl KmlEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_kml(text: &str) -> Option<Self> {
                match text.trim() {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_kml(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_kml())
            }
        }
    };
}

kml_enum! {
    /// How altitudes in coordinates and views are interpreted.
    pub enum AltitudeMode default defaults::DEF_ALTITUDE_MODE; {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
    }
}

kml_enum! {
    pub enum ColorMode default defaults::DEF_COLOR_MODE; {
        Normal => "normal",
        Random => "random",
    }
}

kml_enum! {
    /// Time-based refresh behaviour of a [`Link`](super::Link).
    pub enum RefreshMode default defaults::DEF_REFRESH_MODE; {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }
}

kml_enum! {
    /// View-based refresh behaviour of a [`Link`](super::Link).
    pub enum ViewRefreshMode default defaults::DEF_VIEW_REFRESH_MODE; {
        Never => "never",
        OnStop => "onStop",
        OnRequest => "onRequest",
        OnRegion => "onRegion",
    }
}

kml_enum! {
    /// Units of a [`Vec2`](super::Vec2) component.
    pub enum Units default defaults::DEF_UNITS; {
        Fraction => "fraction",
        Pixels => "pixels",
        InsetPixels => "insetPixels",
    }
}

kml_enum! {
    pub enum DisplayMode default defaults::DEF_DISPLAY_MODE; {
        Default => "default",
        Hide => "hide",
    }
}

kml_enum! {
    pub enum ListItemType default defaults::DEF_LIST_ITEM_TYPE; {
        Check => "check",
        CheckOffOnly => "checkOffOnly",
        CheckHideChildren => "checkHideChildren",
        RadioFolder => "radioFolder",
    }
}

kml_enum! {
    pub enum ItemIconState default defaults::DEF_ITEM_ICON_STATE; {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }
}

kml_enum! {
    pub enum GridOrigin default defaults::DEF_GRID_ORIGIN; {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }
}

kml_enum! {
    /// Projection surface of a [`PhotoOverlay`](super::PhotoOverlay).
    pub enum Shape default defaults::DEF_SHAPE; {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }
}

kml_enum! {
    /// Key of a [`Pair`](super::Pair) inside a StyleMap.
    pub enum StyleState default defaults::DEF_STYLE_STATE; {
        Normal => "normal",
        Highlight => "highlight",
    }
}
