//! Style selectors and sub-styles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::enums::{ColorMode, DisplayMode, ItemIconState, ListItemType, StyleState};
use super::{Link, ObjectData, Vec2};
use crate::base::Color;
use crate::schema::{ConcreteKind, defaults};

/// Any style selector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StyleSelector {
    Style(Style),
    StyleMap(StyleMap),
}

impl StyleSelector {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Style(_) => ConcreteKind::Style,
            Self::StyleMap(_) => ConcreteKind::StyleMap,
        }
    }

    pub fn object(&self) -> &ObjectData {
        match self {
            Self::Style(s) => &s.object,
            Self::StyleMap(s) => &s.object,
        }
    }
}

/// One slot per sub-style kind; each is written only when present.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Style {
    pub object: ObjectData,
    pub icon_style: Option<IconStyle>,
    pub label_style: Option<LabelStyle>,
    pub line_style: Option<LineStyle>,
    pub poly_style: Option<PolyStyle>,
    pub balloon_style: Option<BalloonStyle>,
    pub list_style: Option<ListStyle>,
}

impl Style {
    /// Put `sub_style` into its slot, replacing any previous one.
    pub fn set(&mut self, sub_style: SubStyle) {
        match sub_style {
            SubStyle::Color(ColorStyle::Icon(s)) => self.icon_style = Some(s),
            SubStyle::Color(ColorStyle::Label(s)) => self.label_style = Some(s),
            SubStyle::Color(ColorStyle::Line(s)) => self.line_style = Some(s),
            SubStyle::Color(ColorStyle::Poly(s)) => self.poly_style = Some(s),
            SubStyle::Balloon(s) => self.balloon_style = Some(s),
            SubStyle::List(s) => self.list_style = Some(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleMap {
    pub object: ObjectData,
    pub pairs: Vec<Pair>,
}

/// A StyleMap entry: a state key and a style given by URL, inline, or both.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair {
    pub object: ObjectData,
    pub key: StyleState,
    pub style_url: Option<String>,
    pub style_selector: Option<StyleSelector>,
}

/// Any sub-style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubStyle {
    Color(ColorStyle),
    Balloon(BalloonStyle),
    List(ListStyle),
}

impl SubStyle {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Color(s) => s.kind(),
            Self::Balloon(_) => ConcreteKind::BalloonStyle,
            Self::List(_) => ConcreteKind::ListStyle,
        }
    }
}

/// Sub-styles that carry a color and color mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorStyle {
    Icon(IconStyle),
    Label(LabelStyle),
    Line(LineStyle),
    Poly(PolyStyle),
}

impl ColorStyle {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Icon(_) => ConcreteKind::IconStyle,
            Self::Label(_) => ConcreteKind::LabelStyle,
            Self::Line(_) => ConcreteKind::LineStyle,
            Self::Poly(_) => ConcreteKind::PolyStyle,
        }
    }

    pub fn color_style(&self) -> &ColorStyleData {
        match self {
            Self::Icon(s) => &s.color_style,
            Self::Label(s) => &s.color_style,
            Self::Line(s) => &s.color_style,
            Self::Poly(s) => &s.color_style,
        }
    }
}

/// Fields shared by every color style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorStyleData {
    pub object: ObjectData,
    pub color: Color,
    pub color_mode: ColorMode,
}

impl Default for ColorStyleData {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            color: defaults::DEF_COLOR,
            color_mode: ColorMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IconStyle {
    pub color_style: ColorStyleData,
    pub scale: f64,
    pub heading: f64,
    pub icon: Option<Link>,
    pub hot_spot: Option<Vec2>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            color_style: ColorStyleData::default(),
            scale: defaults::DEF_SCALE,
            heading: defaults::DEF_HEADING,
            icon: None,
            hot_spot: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelStyle {
    pub color_style: ColorStyleData,
    pub scale: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color_style: ColorStyleData::default(),
            scale: defaults::DEF_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineStyle {
    pub color_style: ColorStyleData,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color_style: ColorStyleData::default(),
            width: defaults::DEF_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyStyle {
    pub color_style: ColorStyleData,
    pub fill: bool,
    pub outline: bool,
}

impl Default for PolyStyle {
    fn default() -> Self {
        Self {
            color_style: ColorStyleData::default(),
            fill: defaults::DEF_FILL,
            outline: defaults::DEF_OUTLINE,
        }
    }
}

/// How a feature's description balloon is drawn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalloonStyle {
    pub object: ObjectData,
    pub bg_color: Color,
    pub text_color: Color,
    pub text: Option<String>,
    pub display_mode: DisplayMode,
}

impl Default for BalloonStyle {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            bg_color: defaults::DEF_BG_COLOR,
            text_color: defaults::DEF_TEXT_COLOR,
            text: None,
            display_mode: DisplayMode::default(),
        }
    }
}

/// How a feature appears in the places list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListStyle {
    pub object: ObjectData,
    pub list_item_type: ListItemType,
    pub bg_color: Color,
    pub item_icons: Vec<ItemIcon>,
    pub max_snippet_lines: i32,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            list_item_type: ListItemType::default(),
            bg_color: defaults::DEF_BG_COLOR,
            item_icons: Vec::new(),
            max_snippet_lines: defaults::DEF_MAX_SNIPPET_LINES,
        }
    }
}

/// List icon for a set of states, written as `<state>open closed</state>`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemIcon {
    pub object: ObjectData,
    pub states: Vec<ItemIconState>,
    pub href: Option<String>,
}

impl From<Style> for StyleSelector {
    fn from(value: Style) -> Self {
        Self::Style(value)
    }
}

impl From<StyleMap> for StyleSelector {
    fn from(value: StyleMap) -> Self {
        Self::StyleMap(value)
    }
}

impl From<ColorStyle> for SubStyle {
    fn from(value: ColorStyle) -> Self {
        Self::Color(value)
    }
}

impl From<BalloonStyle> for SubStyle {
    fn from(value: BalloonStyle) -> Self {
        Self::Balloon(value)
    }
}

impl From<ListStyle> for SubStyle {
    fn from(value: ListStyle) -> Self {
        Self::List(value)
    }
}

macro_rules! color_style_from {
    ($($variant:ident($ty:ident)),+ $(,)?) => {
        $(
            impl From<$ty> for ColorStyle {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for SubStyle {
                fn from(value: $ty) -> Self {
                    Self::Color(ColorStyle::$variant(value))
                }
            }
        )+
    };
}

color_style_from!(Icon(IconStyle), Label(LabelStyle), Line(LineStyle), Poly(PolyStyle));
