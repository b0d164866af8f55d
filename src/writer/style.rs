//! Style selectors, sub-styles, links and screen vectors.

use super::KmlWriter;
use crate::base::AngleRange;
use crate::base::scalar::format_double;
use crate::error::KmlError;
use crate::model::{
    BalloonStyle, ColorStyle, ColorStyleData, IconStyle, ItemIcon, KmlEnum, LabelStyle,
    LineStyle, Link, ListStyle, Pair, PolyStyle, Style, StyleMap, StyleSelector, SubStyle, Vec2,
};
use crate::schema::ConcreteKind;
use crate::schema::defaults::*;
use crate::tokens::TokenSink;

impl<S: TokenSink> KmlWriter<S> {
    pub(super) fn style_selector(&mut self, selector: &StyleSelector) -> Result<(), KmlError> {
        match selector {
            StyleSelector::Style(style) => self.style(style),
            StyleSelector::StyleMap(map) => self.style_map(map),
        }
    }

    pub(super) fn sub_style(&mut self, sub_style: &SubStyle) -> Result<(), KmlError> {
        match sub_style {
            SubStyle::Color(ColorStyle::Icon(style)) => self.icon_style(style),
            SubStyle::Color(ColorStyle::Label(style)) => self.label_style(style),
            SubStyle::Color(ColorStyle::Line(style)) => self.line_style(style),
            SubStyle::Color(ColorStyle::Poly(style)) => self.poly_style(style),
            SubStyle::Balloon(style) => self.balloon_style(style),
            SubStyle::List(style) => self.list_style(style),
        }
    }

    fn style(&mut self, style: &Style) -> Result<(), KmlError> {
        self.element(ConcreteKind::Style, &style.object, |w| {
            if let Some(icon) = &style.icon_style {
                w.icon_style(icon)?;
            }
            if let Some(label) = &style.label_style {
                w.label_style(label)?;
            }
            if let Some(line) = &style.line_style {
                w.line_style(line)?;
            }
            if let Some(poly) = &style.poly_style {
                w.poly_style(poly)?;
            }
            if let Some(balloon) = &style.balloon_style {
                w.balloon_style(balloon)?;
            }
            if let Some(list) = &style.list_style {
                w.list_style(list)?;
            }
            Ok(())
        })
    }

    fn style_map(&mut self, map: &StyleMap) -> Result<(), KmlError> {
        self.element(ConcreteKind::StyleMap, &map.object, |w| {
            for pair in &map.pairs {
                w.pair(pair)?;
            }
            Ok(())
        })
    }

    fn pair(&mut self, pair: &Pair) -> Result<(), KmlError> {
        self.element(ConcreteKind::Pair, &pair.object, |w| {
            w.enum_field("key", pair.key, DEF_STYLE_STATE)?;
            w.optional_text("styleUrl", pair.style_url.as_deref())?;
            if let Some(selector) = &pair.style_selector {
                w.style_selector(selector)?;
            }
            Ok(())
        })
    }

    fn color_style_fields(&mut self, data: &ColorStyleData) -> Result<(), KmlError> {
        self.color_field("color", data.color, DEF_COLOR)?;
        self.enum_field("colorMode", data.color_mode, DEF_COLOR_MODE)
    }

    fn icon_style(&mut self, style: &IconStyle) -> Result<(), KmlError> {
        self.element(ConcreteKind::IconStyle, &style.color_style.object, |w| {
            w.color_style_fields(&style.color_style)?;
            w.double_field("scale", style.scale, DEF_SCALE)?;
            w.angle_field("heading", style.heading, AngleRange::Full360, DEF_HEADING)?;
            if let Some(icon) = &style.icon {
                w.link(ConcreteKind::Icon, icon)?;
            }
            if let Some(hot_spot) = &style.hot_spot {
                w.vec2("hotSpot", hot_spot)?;
            }
            Ok(())
        })
    }

    fn label_style(&mut self, style: &LabelStyle) -> Result<(), KmlError> {
        self.element(ConcreteKind::LabelStyle, &style.color_style.object, |w| {
            w.color_style_fields(&style.color_style)?;
            w.double_field("scale", style.scale, DEF_SCALE)
        })
    }

    fn line_style(&mut self, style: &LineStyle) -> Result<(), KmlError> {
        self.element(ConcreteKind::LineStyle, &style.color_style.object, |w| {
            w.color_style_fields(&style.color_style)?;
            w.double_field("width", style.width, DEF_WIDTH)
        })
    }

    fn poly_style(&mut self, style: &PolyStyle) -> Result<(), KmlError> {
        self.element(ConcreteKind::PolyStyle, &style.color_style.object, |w| {
            w.color_style_fields(&style.color_style)?;
            w.bool_field("fill", style.fill, DEF_FILL)?;
            w.bool_field("outline", style.outline, DEF_OUTLINE)
        })
    }

    fn balloon_style(&mut self, style: &BalloonStyle) -> Result<(), KmlError> {
        self.element(ConcreteKind::BalloonStyle, &style.object, |w| {
            w.color_field("bgColor", style.bg_color, DEF_BG_COLOR)?;
            w.color_field("textColor", style.text_color, DEF_TEXT_COLOR)?;
            w.optional_text("text", style.text.as_deref())?;
            w.enum_field("displayMode", style.display_mode, DEF_DISPLAY_MODE)
        })
    }

    fn list_style(&mut self, style: &ListStyle) -> Result<(), KmlError> {
        self.element(ConcreteKind::ListStyle, &style.object, |w| {
            w.enum_field("listItemType", style.list_item_type, DEF_LIST_ITEM_TYPE)?;
            w.color_field("bgColor", style.bg_color, DEF_BG_COLOR)?;
            for icon in &style.item_icons {
                w.item_icon(icon)?;
            }
            w.int_field("maxSnippetLines", style.max_snippet_lines, DEF_MAX_SNIPPET_LINES)
        })
    }

    fn item_icon(&mut self, icon: &ItemIcon) -> Result<(), KmlError> {
        self.element(ConcreteKind::ItemIcon, &icon.object, |w| {
            if !icon.states.is_empty() {
                let states: Vec<&str> = icon.states.iter().map(|state| state.as_kml()).collect();
                w.text_field("state", &states.join(" "))?;
            }
            w.optional_text("href", icon.href.as_deref())
        })
    }

    /// A link written as `<Link>` or `<Icon>`, depending on `kind`.
    pub(super) fn link(&mut self, kind: ConcreteKind, link: &Link) -> Result<(), KmlError> {
        self.element(kind, &link.object, |w| {
            w.optional_text("href", link.href.as_deref())?;
            w.enum_field("refreshMode", link.refresh_mode, DEF_REFRESH_MODE)?;
            w.double_field("refreshInterval", link.refresh_interval, DEF_REFRESH_INTERVAL)?;
            w.enum_field("viewRefreshMode", link.view_refresh_mode, DEF_VIEW_REFRESH_MODE)?;
            w.double_field("viewRefreshTime", link.view_refresh_time, DEF_VIEW_REFRESH_TIME)?;
            w.double_field("viewBoundScale", link.view_bound_scale, DEF_VIEW_BOUND_SCALE)?;
            w.optional_text("viewFormat", link.view_format.as_deref())?;
            w.optional_text("httpQuery", link.http_query.as_deref())
        })
    }

    pub(super) fn vec2(&mut self, tag: &str, vec2: &Vec2) -> Result<(), KmlError> {
        let x = format_double(vec2.x);
        let y = format_double(vec2.y);
        let mut attributes = Vec::new();
        if vec2.x != DEF_VEC2_X {
            attributes.push(("x", x.as_str()));
        }
        if vec2.y != DEF_VEC2_Y {
            attributes.push(("y", y.as_str()));
        }
        if vec2.x_units != DEF_UNITS {
            attributes.push(("xunits", vec2.x_units.as_kml()));
        }
        if vec2.y_units != DEF_UNITS {
            attributes.push(("yunits", vec2.y_units.as_kml()));
        }
        self.sink.start_tag(tag, &attributes)?;
        self.sink.end_tag(tag)
    }
}
