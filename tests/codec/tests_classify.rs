//! The tag classifier and the writer's runtime dispatch agree on every
//! concrete type.

use std::collections::BTreeSet;

use keyhole::model::*;
use keyhole::schema::{Category, ConcreteKind};

use crate::helpers::kml_assertions::*;

fn features() -> Vec<Feature> {
    vec![
        Feature::Placemark(Placemark::default()),
        Feature::NetworkLink(NetworkLink::default()),
        Feature::from(Folder::default()),
        Feature::from(Document::default()),
        Feature::from(GroundOverlay::default()),
        Feature::from(ScreenOverlay::default()),
        Feature::from(PhotoOverlay::default()),
    ]
}

fn geometries() -> Vec<Geometry> {
    vec![
        Geometry::Point(Point::default()),
        Geometry::LineString(LineString::default()),
        Geometry::LinearRing(LinearRing::default()),
        Geometry::Polygon(Polygon::default()),
        Geometry::MultiGeometry(MultiGeometry::default()),
        Geometry::Model(Model::default()),
    ]
}

fn color_styles() -> Vec<ColorStyle> {
    vec![
        ColorStyle::from(IconStyle::default()),
        ColorStyle::from(LabelStyle::default()),
        ColorStyle::from(LineStyle::default()),
        ColorStyle::from(PolyStyle::default()),
    ]
}

fn sub_styles() -> Vec<SubStyle> {
    let mut all: Vec<SubStyle> = color_styles().into_iter().map(SubStyle::from).collect();
    all.push(SubStyle::Balloon(BalloonStyle::default()));
    all.push(SubStyle::List(ListStyle::default()));
    all
}

/// Render a kind set as tag names so failures are readable.
fn tags(kinds: impl IntoIterator<Item = ConcreteKind>) -> BTreeSet<&'static str> {
    kinds.into_iter().map(ConcreteKind::tag_name).collect()
}

fn members(category: Category) -> BTreeSet<&'static str> {
    tags(category.members())
}

#[test]
fn test_model_enums_cover_each_category() {
    assert_eq!(tags(features().iter().map(Feature::kind)), members(Category::Feature));
    assert_eq!(tags(geometries().iter().map(Geometry::kind)), members(Category::Geometry));
    assert_eq!(tags(color_styles().iter().map(ColorStyle::kind)), members(Category::ColorStyle));
    assert_eq!(tags(sub_styles().iter().map(SubStyle::kind)), members(Category::SubStyle));

    let containers = features()
        .into_iter()
        .filter_map(|f| match f {
            Feature::Container(c) => Some(c.kind()),
            _ => None,
        });
    assert_eq!(tags(containers), members(Category::Container));

    let overlays = features().into_iter().filter_map(|f| match f {
        Feature::Overlay(o) => Some(o.kind()),
        _ => None,
    });
    assert_eq!(tags(overlays), members(Category::Overlay));

    let views = [
        AbstractView::LookAt(LookAt::default()),
        AbstractView::Camera(Camera::default()),
    ];
    assert_eq!(tags(views.iter().map(AbstractView::kind)), members(Category::View));

    let times = [
        TimePrimitive::TimeSpan(TimeSpan::default()),
        TimePrimitive::TimeStamp(TimeStamp::default()),
    ];
    assert_eq!(
        tags(times.iter().map(TimePrimitive::kind)),
        members(Category::TimePrimitive)
    );

    let selectors = [
        StyleSelector::Style(Style::default()),
        StyleSelector::StyleMap(StyleMap::default()),
    ];
    assert_eq!(
        tags(selectors.iter().map(StyleSelector::kind)),
        members(Category::StyleSelector)
    );

    let boxes = [
        AbstractLatLonBox::LatLonBox(LatLonBox::default()),
        AbstractLatLonBox::LatLonAltBox(LatLonAltBox::default()),
    ];
    assert_eq!(
        tags(boxes.iter().map(AbstractLatLonBox::kind)),
        members(Category::LatLonBox)
    );
}

#[test]
fn test_written_tags_classify_back_to_the_same_kind() {
    for feature in features() {
        let xml = write_compact(|w| w.write_feature(&feature));
        let tag = xml.trim_start_matches('<').trim_end_matches("/>");
        assert_eq!(Category::Feature.classify(tag), Some(feature.kind()));
        let back = read_element(&xml, |r| r.read_feature()).unwrap();
        assert_eq!(back.kind(), feature.kind());
    }
    for geometry in geometries() {
        let xml = write_compact(|w| w.write_geometry(&geometry));
        let back = read_element(&xml, |r| r.read_geometry()).unwrap();
        assert_eq!(back.kind(), geometry.kind());
    }
    for sub_style in sub_styles() {
        let xml = write_compact(|w| w.write_sub_style(&sub_style));
        let back = read_element(&xml, |r| r.read_sub_style()).unwrap();
        assert_eq!(back.kind(), sub_style.kind());
    }
}

#[test]
fn test_every_category_has_members_and_every_member_its_tag() {
    for &category in Category::ALL {
        assert!(category.members().next().is_some(), "{category} is empty");
        for kind in category.members() {
            assert!(category.contains(kind.tag_name()));
            assert_eq!(ConcreteKind::from_tag(kind.tag_name()), Some(kind));
        }
    }
}

#[test]
fn test_categories_reject_foreign_members() {
    assert!(!Category::Geometry.contains("Placemark"));
    assert!(!Category::Feature.contains("Point"));
    assert!(!Category::ColorStyle.contains("BalloonStyle"));
    assert!(Category::SubStyle.contains("BalloonStyle"));
    assert!(!Category::Feature.contains("Bogus"));
}
