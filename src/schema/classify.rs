//! Tag classifier.
//!
//! [`ConcreteKind`] is the single table mapping each concrete element type to
//! its tag name and to the abstract categories it belongs to. The reader
//! classifies tag names through it; the writer reaches the same kinds through
//! the `kind()` method of each closed model enum. Adding a concrete type means
//! one row here plus one arm in each side's `match`, and the compiler flags
//! the missing arms.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Abstract schema categories: positions where several concrete types may
/// appear interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Feature,
    Container,
    Overlay,
    Geometry,
    View,
    TimePrimitive,
    StyleSelector,
    SubStyle,
    ColorStyle,
    LatLonBox,
}

impl Category {
    pub const ALL: &'static [Self] = &[
        Self::Feature,
        Self::Container,
        Self::Overlay,
        Self::Geometry,
        Self::View,
        Self::TimePrimitive,
        Self::StyleSelector,
        Self::SubStyle,
        Self::ColorStyle,
        Self::LatLonBox,
    ];

    /// Does `tag` name a concrete type of this category?
    pub fn contains(self, tag: &str) -> bool {
        self.classify(tag).is_some()
    }

    /// The concrete type `tag` names, if it belongs to this category.
    pub fn classify(self, tag: &str) -> Option<ConcreteKind> {
        ConcreteKind::from_tag(tag).filter(|kind| kind.is_a(self))
    }

    /// Concrete types of this category, in table order.
    pub fn members(self) -> impl Iterator<Item = ConcreteKind> {
        ConcreteKind::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.is_a(self))
    }

    /// The schema's abstract element name for this category.
    pub fn abstract_name(self) -> &'static str {
        match self {
            Self::Feature => "AbstractFeatureGroup",
            Self::Container => "AbstractContainerGroup",
            Self::Overlay => "AbstractOverlayGroup",
            Self::Geometry => "AbstractGeometryGroup",
            Self::View => "AbstractViewGroup",
            Self::TimePrimitive => "AbstractTimePrimitiveGroup",
            Self::StyleSelector => "AbstractStyleSelectorGroup",
            Self::SubStyle => "AbstractSubStyleGroup",
            Self::ColorStyle => "AbstractColorStyleGroup",
            Self::LatLonBox => "AbstractLatLonBoxGroup",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abstract_name())
    }
}

macro_rules! concrete_kinds {
    ($($variant:ident => $tag:literal [$($category:ident),*],)+) => {
        /// Every concrete element type the reader and writer know.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum ConcreteKind {
            $($variant,)+
        }

        impl ConcreteKind {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Tag name the writer emits for this type.
            pub fn tag_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }

            /// Abstract categories this type belongs to, most general first.
            pub fn categories(self) -> &'static [Category] {
                match self {
                    $(Self::$variant => &[$(Category::$category),*],)+
                }
            }

            fn from_canonical_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

concrete_kinds! {
    Kml => "kml" [],
    Placemark => "Placemark" [Feature],
    NetworkLink => "NetworkLink" [Feature],
    Folder => "Folder" [Feature, Container],
    Document => "Document" [Feature, Container],
    GroundOverlay => "GroundOverlay" [Feature, Overlay],
    ScreenOverlay => "ScreenOverlay" [Feature, Overlay],
    PhotoOverlay => "PhotoOverlay" [Feature, Overlay],
    Point => "Point" [Geometry],
    LineString => "LineString" [Geometry],
    LinearRing => "LinearRing" [Geometry],
    Polygon => "Polygon" [Geometry],
    MultiGeometry => "MultiGeometry" [Geometry],
    Model => "Model" [Geometry],
    LookAt => "LookAt" [View],
    Camera => "Camera" [View],
    TimeSpan => "TimeSpan" [TimePrimitive],
    TimeStamp => "TimeStamp" [TimePrimitive],
    Style => "Style" [StyleSelector],
    StyleMap => "StyleMap" [StyleSelector],
    Pair => "Pair" [],
    IconStyle => "IconStyle" [SubStyle, ColorStyle],
    LabelStyle => "LabelStyle" [SubStyle, ColorStyle],
    LineStyle => "LineStyle" [SubStyle, ColorStyle],
    PolyStyle => "PolyStyle" [SubStyle, ColorStyle],
    BalloonStyle => "BalloonStyle" [SubStyle],
    ListStyle => "ListStyle" [SubStyle],
    ItemIcon => "ItemIcon" [],
    LatLonBox => "LatLonBox" [LatLonBox],
    LatLonAltBox => "LatLonAltBox" [LatLonBox],
    Region => "Region" [],
    Lod => "Lod" [],
    Link => "Link" [],
    Icon => "Icon" [],
    Location => "Location" [],
    Orientation => "Orientation" [],
    Scale => "Scale" [],
    ResourceMap => "ResourceMap" [],
    Alias => "Alias" [],
    ViewVolume => "ViewVolume" [],
    ImagePyramid => "ImagePyramid" [],
    ExtendedData => "ExtendedData" [],
    Data => "Data" [],
    SchemaData => "SchemaData" [],
    Schema => "Schema" [],
}

impl ConcreteKind {
    /// Classify a core-namespace local name. Accepts the legacy `Url` spelling
    /// of `Link`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::from_canonical_tag(tag).or(match tag {
            "Url" => Some(Self::Link),
            _ => None,
        })
    }

    pub fn is_a(self, category: Category) -> bool {
        self.categories().contains(&category)
    }
}

impl fmt::Display for ConcreteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

pub fn is_feature(tag: &str) -> bool {
    Category::Feature.contains(tag)
}

pub fn is_container(tag: &str) -> bool {
    Category::Container.contains(tag)
}

pub fn is_overlay(tag: &str) -> bool {
    Category::Overlay.contains(tag)
}

pub fn is_geometry(tag: &str) -> bool {
    Category::Geometry.contains(tag)
}

pub fn is_view(tag: &str) -> bool {
    Category::View.contains(tag)
}

pub fn is_time_primitive(tag: &str) -> bool {
    Category::TimePrimitive.contains(tag)
}

pub fn is_style_selector(tag: &str) -> bool {
    Category::StyleSelector.contains(tag)
}

pub fn is_sub_style(tag: &str) -> bool {
    Category::SubStyle.contains(tag)
}

pub fn is_color_style(tag: &str) -> bool {
    Category::ColorStyle.contains(tag)
}

pub fn is_lat_lon_box(tag: &str) -> bool {
    Category::LatLonBox.contains(tag)
}
