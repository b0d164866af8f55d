//! Style selectors, sub-styles, links and screen vectors.

use super::{KmlReader, object_data};
use crate::base::AngleRange;
use crate::base::scalar::parse_double;
use crate::error::{KmlError, ScalarError};
use crate::model::{
    BalloonStyle, ColorStyle, ColorStyleData, IconStyle, ItemIcon, ItemIconState, KmlEnum,
    LabelStyle, LineStyle, Link, ListStyle, Pair, PolyStyle, Style, StyleMap, StyleSelector,
    SubStyle, Units, Vec2,
};
use crate::schema::{ConcreteKind, is_style_selector, is_sub_style};
use crate::tokens::{StartTag, TokenSource};

impl<S: TokenSource> KmlReader<S> {
    /// Any style selector, resolved from the tag name.
    pub(super) fn style_selector(&mut self, start: &StartTag) -> Result<StyleSelector, KmlError> {
        match self.core_name(start).and_then(ConcreteKind::from_tag) {
            Some(ConcreteKind::Style) => self.style(start).map(StyleSelector::from),
            Some(ConcreteKind::StyleMap) => self.style_map(start).map(StyleSelector::from),
            _ => Err(self.structure(format!("<{}> is not a style selector", start.local_name))),
        }
    }

    /// Any sub-style, resolved from the tag name.
    pub(super) fn sub_style(&mut self, start: &StartTag) -> Result<SubStyle, KmlError> {
        match self.core_name(start).and_then(ConcreteKind::from_tag) {
            Some(ConcreteKind::IconStyle) => self
                .icon_style(start)
                .map(|s| SubStyle::Color(ColorStyle::Icon(s))),
            Some(ConcreteKind::LabelStyle) => self
                .label_style(start)
                .map(|s| SubStyle::Color(ColorStyle::Label(s))),
            Some(ConcreteKind::LineStyle) => self
                .line_style(start)
                .map(|s| SubStyle::Color(ColorStyle::Line(s))),
            Some(ConcreteKind::PolyStyle) => self
                .poly_style(start)
                .map(|s| SubStyle::Color(ColorStyle::Poly(s))),
            Some(ConcreteKind::BalloonStyle) => self.balloon_style(start).map(SubStyle::from),
            Some(ConcreteKind::ListStyle) => self.list_style(start).map(SubStyle::from),
            _ => Err(self.structure(format!("<{}> is not a sub-style", start.local_name))),
        }
    }

    fn style(&mut self, start: &StartTag) -> Result<Style, KmlError> {
        self.nested(start, |r| {
            let mut style = Style {
                object: object_data(start),
                ..Style::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some(tag) if is_sub_style(tag) => {
                        let sub_style = r.sub_style(&child)?;
                        style.set(sub_style);
                    }
                    _ => r.unknown(ConcreteKind::Style, &child, &mut style.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_style(style))
        })
    }

    fn style_map(&mut self, start: &StartTag) -> Result<StyleMap, KmlError> {
        self.nested(start, |r| {
            let mut map = StyleMap {
                object: object_data(start),
                pairs: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("Pair") => {
                        let pair = r.pair(&child)?;
                        map.pairs.push(pair);
                    }
                    _ => r.unknown(ConcreteKind::StyleMap, &child, &mut map.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_style_map(map))
        })
    }

    fn pair(&mut self, start: &StartTag) -> Result<Pair, KmlError> {
        self.nested(start, |r| {
            let mut pair = Pair {
                object: object_data(start),
                ..Pair::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("key") => pair.key = r.read_enum(&child)?,
                    Some("styleUrl") => pair.style_url = Some(r.read_token(&child)?),
                    Some(tag) if is_style_selector(tag) => {
                        pair.style_selector = Some(r.style_selector(&child)?);
                    }
                    _ => r.unknown(ConcreteKind::Pair, &child, &mut pair.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_pair(pair))
        })
    }

    /// `color` and `colorMode`, shared by the four color styles.
    fn color_style_field(
        &mut self,
        data: &mut ColorStyleData,
        child: &StartTag,
    ) -> Result<bool, KmlError> {
        match self.core_name(child) {
            Some("color") => data.color = self.read_color(child)?,
            Some("colorMode") => data.color_mode = self.read_enum(child)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn color_style_data(start: &StartTag) -> ColorStyleData {
        ColorStyleData {
            object: object_data(start),
            ..ColorStyleData::default()
        }
    }

    fn icon_style(&mut self, start: &StartTag) -> Result<IconStyle, KmlError> {
        self.nested(start, |r| {
            let mut style = IconStyle {
                color_style: Self::color_style_data(start),
                ..IconStyle::default()
            };
            while let Some(child) = r.next_child()? {
                if r.color_style_field(&mut style.color_style, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("scale") => style.scale = r.read_double(&child)?,
                    Some("heading") => style.heading = r.read_angle(&child, AngleRange::Full360)?,
                    Some("Icon") => style.icon = Some(r.link(&child)?),
                    Some("hotSpot") => style.hot_spot = Some(r.vec2(&child)?),
                    _ => r.unknown(
                        ConcreteKind::IconStyle,
                        &child,
                        &mut style.color_style.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_icon_style(style))
        })
    }

    fn label_style(&mut self, start: &StartTag) -> Result<LabelStyle, KmlError> {
        self.nested(start, |r| {
            let mut style = LabelStyle {
                color_style: Self::color_style_data(start),
                ..LabelStyle::default()
            };
            while let Some(child) = r.next_child()? {
                if r.color_style_field(&mut style.color_style, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("scale") => style.scale = r.read_double(&child)?,
                    _ => r.unknown(
                        ConcreteKind::LabelStyle,
                        &child,
                        &mut style.color_style.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_label_style(style))
        })
    }

    fn line_style(&mut self, start: &StartTag) -> Result<LineStyle, KmlError> {
        self.nested(start, |r| {
            let mut style = LineStyle {
                color_style: Self::color_style_data(start),
                ..LineStyle::default()
            };
            while let Some(child) = r.next_child()? {
                if r.color_style_field(&mut style.color_style, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("width") => style.width = r.read_double(&child)?,
                    _ => r.unknown(
                        ConcreteKind::LineStyle,
                        &child,
                        &mut style.color_style.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_line_style(style))
        })
    }

    fn poly_style(&mut self, start: &StartTag) -> Result<PolyStyle, KmlError> {
        self.nested(start, |r| {
            let mut style = PolyStyle {
                color_style: Self::color_style_data(start),
                ..PolyStyle::default()
            };
            while let Some(child) = r.next_child()? {
                if r.color_style_field(&mut style.color_style, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("fill") => style.fill = r.read_bool(&child)?,
                    Some("outline") => style.outline = r.read_bool(&child)?,
                    _ => r.unknown(
                        ConcreteKind::PolyStyle,
                        &child,
                        &mut style.color_style.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_poly_style(style))
        })
    }

    fn balloon_style(&mut self, start: &StartTag) -> Result<BalloonStyle, KmlError> {
        self.nested(start, |r| {
            let mut style = BalloonStyle {
                object: object_data(start),
                ..BalloonStyle::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    // `color` is the pre-2.1 spelling of `bgColor`.
                    Some("bgColor" | "color") => style.bg_color = r.read_color(&child)?,
                    Some("textColor") => style.text_color = r.read_color(&child)?,
                    Some("text") => style.text = Some(r.read_text(&child)?),
                    Some("displayMode") => style.display_mode = r.read_enum(&child)?,
                    _ => r.unknown(ConcreteKind::BalloonStyle, &child, &mut style.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_balloon_style(style))
        })
    }

    fn list_style(&mut self, start: &StartTag) -> Result<ListStyle, KmlError> {
        self.nested(start, |r| {
            let mut style = ListStyle {
                object: object_data(start),
                ..ListStyle::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("listItemType") => style.list_item_type = r.read_enum(&child)?,
                    Some("bgColor") => style.bg_color = r.read_color(&child)?,
                    Some("ItemIcon") => {
                        let icon = r.item_icon(&child)?;
                        style.item_icons.push(icon);
                    }
                    Some("maxSnippetLines") => style.max_snippet_lines = r.read_int(&child)?,
                    _ => r.unknown(ConcreteKind::ListStyle, &child, &mut style.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_list_style(style))
        })
    }

    fn item_icon(&mut self, start: &StartTag) -> Result<ItemIcon, KmlError> {
        self.nested(start, |r| {
            let mut icon = ItemIcon {
                object: object_data(start),
                ..ItemIcon::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("state") => icon.states = r.read_item_icon_states(&child)?,
                    Some("href") => icon.href = Some(r.read_token(&child)?),
                    _ => r.unknown(ConcreteKind::ItemIcon, &child, &mut icon.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_item_icon(icon))
        })
    }

    /// Whitespace-separated list of item icon states.
    fn read_item_icon_states(&mut self, field: &StartTag) -> Result<Vec<ItemIconState>, KmlError> {
        let text = self.read_text(field)?;
        text.split_whitespace()
            .map(|state| {
                ItemIconState::from_kml(state)
                    .ok_or_else(|| self.scalar(field, ScalarError::new(ItemIconState::NAME, state)))
            })
            .collect()
    }

    /// `<Link>`, `<Icon>` and the legacy `<Url>`: all share one shape.
    pub(super) fn link(&mut self, start: &StartTag) -> Result<Link, KmlError> {
        self.nested(start, |r| {
            let mut link = Link {
                object: object_data(start),
                ..Link::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("href") => link.href = Some(r.read_token(&child)?),
                    Some("refreshMode") => link.refresh_mode = r.read_enum(&child)?,
                    Some("refreshInterval") => link.refresh_interval = r.read_double(&child)?,
                    Some("viewRefreshMode") => link.view_refresh_mode = r.read_enum(&child)?,
                    Some("viewRefreshTime") => link.view_refresh_time = r.read_double(&child)?,
                    Some("viewBoundScale") => link.view_bound_scale = r.read_double(&child)?,
                    Some("viewFormat") => link.view_format = Some(r.read_text(&child)?),
                    Some("httpQuery") => link.http_query = Some(r.read_text(&child)?),
                    _ => r.unknown(ConcreteKind::Link, &child, &mut link.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_link(link))
        })
    }

    /// `hotSpot`, `overlayXY` and friends: attributes only.
    pub(super) fn vec2(&mut self, start: &StartTag) -> Result<Vec2, KmlError> {
        let mut vec2 = Vec2::default();
        if let Some(x) = self.attribute(start, "x", parse_double)? {
            vec2.x = x;
        }
        if let Some(y) = self.attribute(start, "y", parse_double)? {
            vec2.y = y;
        }
        if let Some(units) = self.attribute(start, "xunits", parse_units)? {
            vec2.x_units = units;
        }
        if let Some(units) = self.attribute(start, "yunits", parse_units)? {
            vec2.y_units = units;
        }
        self.skip_rest(start)?;
        Ok(vec2)
    }
}

fn parse_units(text: &str) -> Result<Units, ScalarError> {
    Units::from_kml(text).ok_or_else(|| ScalarError::new(Units::NAME, text))
}
