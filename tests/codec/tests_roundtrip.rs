//! Write/read cycles for every concrete type.

use keyhole::base::Coordinate;
use keyhole::model::*;
use keyhole::{ExtensionRegistry, KmlCodec};
use rstest::rstest;

use crate::helpers::document_fixtures::*;
use crate::helpers::kml_assertions::*;

#[test]
fn test_full_document_roundtrips() {
    assert_roundtrips(&full_document());
}

#[test]
fn test_full_document_roundtrips_on_one_line() {
    let codec = KmlCodec::new().with_write_options(keyhole::WriteOptions {
        indent: None,
        ..keyhole::WriteOptions::default()
    });
    let kml = full_document();
    assert_eq!(roundtrip_with(&codec, &kml), kml);
}

#[test]
fn test_full_document_roundtrips_without_root_declarations() {
    let kml = full_document();
    assert_eq!(roundtrip_with(&compact_codec(), &kml), kml);
}

/// Placemark carrying Atom metadata and a captured `gx` element with an
/// unqualified child.
fn annotated_placemark() -> Kml {
    let mut feature = FeatureData::named("p");
    feature.author = Some(Author {
        names: vec!["a".to_string()],
        ..Author::default()
    });
    feature.link = Some(AtomLink {
        href: Some("http://example.com".to_string()),
        ..AtomLink::default()
    });
    feature.object.extensions.push(
        ForeignElement::new(keyhole::schema::namespace::GX, "Track").with_child(
            ForeignElement {
                local_name: "when".to_string(),
                ..ForeignElement::default()
            }
            .with_text("2020"),
        ),
    );
    Kml::new(Feature::Placemark(Placemark {
        feature,
        geometry: None,
    }))
}

#[rstest]
#[case::declared_on_root(KmlCodec::new())]
#[case::declared_in_place(compact_codec())]
fn test_prefixed_elements_roundtrip(#[case] codec: KmlCodec) {
    let codec = codec.with_extensions(ExtensionRegistry::with_google_extensions());
    let kml = annotated_placemark();
    assert_eq!(roundtrip_with(&codec, &kml), kml);
}

#[test]
fn test_written_output_is_stable() {
    let codec = KmlCodec::new();
    let first = codec.write(&full_document()).unwrap();
    let second = codec.write(&codec.read(&first).unwrap()).unwrap();
    assert_eq!(
        String::from_utf8(first).unwrap(),
        String::from_utf8(second).unwrap()
    );
}

#[test]
fn test_empty_document_roundtrips() {
    assert_roundtrips(&Kml::default());
}

#[test]
fn test_simple_placemark_reads_back_identically() {
    let kml = read(SIMPLE_PLACEMARK);
    assert_eq!(roundtrip(&kml), kml);
}

#[rstest]
#[case::point(Geometry::Point(Point::new(Coordinate::new(1.5, -2.25, 0.0))))]
#[case::line_string(Geometry::LineString(LineString {
    extrude: true,
    altitude_mode: AltitudeMode::RelativeToGround,
    coordinates: vec![Coordinate::flat(0.0, 0.0), Coordinate::new(1.0, 1.0, 100.0)],
    ..LineString::default()
}))]
#[case::linear_ring(Geometry::LinearRing(ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)])))]
#[case::polygon_without_holes(Geometry::Polygon(Polygon {
    outer_boundary: Some(ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)])),
    ..Polygon::default()
}))]
#[case::empty_multi_geometry(Geometry::MultiGeometry(MultiGeometry::default()))]
#[case::bare_model(Geometry::Model(Model {
    link: Some(Link::with_href("tree.dae")),
    ..Model::default()
}))]
fn test_geometry_roundtrips(#[case] geometry: Geometry) {
    let xml = write_compact(|w| w.write_geometry(&geometry));
    let back = read_element(&xml, |r| r.read_geometry()).unwrap();
    assert_eq!(back, geometry, "via {xml}");
}

#[rstest]
#[case::look_at(AbstractView::LookAt(LookAt {
    longitude: -179.5,
    latitude: -89.0,
    range: 5.0,
    ..LookAt::default()
}))]
#[case::camera(AbstractView::Camera(Camera {
    roll: 180.0,
    tilt: 90.0,
    altitude_mode: AltitudeMode::Absolute,
    ..Camera::default()
}))]
fn test_view_roundtrips(#[case] view: AbstractView) {
    let xml = write_compact(|w| w.write_view(&view));
    assert_eq!(read_element(&xml, |r| r.read_view()).unwrap(), view);
}

#[rstest]
#[case::year("1999")]
#[case::year_month("2001-02")]
#[case::date("2010-12-31")]
#[case::utc("2010-12-31T23:59:59Z")]
#[case::offset("2010-12-31T23:59:59+02:00")]
fn test_time_stamp_roundtrips(#[case] text: &str) {
    let stamp = TimePrimitive::TimeStamp(TimeStamp {
        when: Some(when(text)),
        ..TimeStamp::default()
    });
    let xml = write_compact(|w| w.write_time_primitive(&stamp));
    assert_eq!(xml, format!("<TimeStamp><when>{text}</when></TimeStamp>"));
    assert_eq!(read_element(&xml, |r| r.read_time_primitive()).unwrap(), stamp);
}

#[test]
fn test_style_selectors_roundtrip() {
    for selector in [
        StyleSelector::Style(full_style()),
        StyleSelector::StyleMap(StyleMap {
            pairs: vec![Pair {
                key: StyleState::Highlight,
                style_url: Some("#hot".to_string()),
                ..Pair::default()
            }],
            ..StyleMap::default()
        }),
    ] {
        let xml = write_compact(|w| w.write_style_selector(&selector));
        let back = read_element(&xml, |r| r.read_style_selector()).unwrap();
        assert_eq!(back, selector, "via {xml}");
    }
}

#[rstest]
#[case::icon(SubStyle::from(IconStyle {
    hot_spot: Some(Vec2::new(16.0, 16.0, Units::Pixels, Units::Pixels)),
    ..IconStyle::default()
}))]
#[case::label(SubStyle::from(LabelStyle { scale: 0.5, ..LabelStyle::default() }))]
#[case::line(SubStyle::from(LineStyle { width: 4.0, ..LineStyle::default() }))]
#[case::poly(SubStyle::from(PolyStyle { outline: false, ..PolyStyle::default() }))]
#[case::balloon(SubStyle::Balloon(BalloonStyle {
    text_color: color("ff0000ff"),
    ..BalloonStyle::default()
}))]
#[case::list(SubStyle::List(ListStyle {
    bg_color: color("00ffffff"),
    ..ListStyle::default()
}))]
fn test_sub_style_roundtrips(#[case] sub_style: SubStyle) {
    let xml = write_compact(|w| w.write_sub_style(&sub_style));
    assert_eq!(read_element(&xml, |r| r.read_sub_style()).unwrap(), sub_style);
}

#[test]
fn test_lat_lon_boxes_roundtrip() {
    for lat_lon_box in [
        AbstractLatLonBox::LatLonBox(LatLonBox {
            bounds: LatLonBounds::new(1.0, -1.0, 2.0, -2.0),
            rotation: -90.0,
            ..LatLonBox::default()
        }),
        AbstractLatLonBox::LatLonAltBox(LatLonAltBox {
            min_altitude: 10.0,
            max_altitude: 20.0,
            ..LatLonAltBox::default()
        }),
    ] {
        let xml = write_compact(|w| w.write_lat_lon_box(&lat_lon_box));
        let back = read_element(&xml, |r| r.read_lat_lon_box()).unwrap();
        assert_eq!(back, lat_lon_box);
    }
}

#[test]
fn test_captured_extensions_roundtrip() {
    let gx = keyhole::schema::namespace::GX;
    let mut kml = Kml::new(Placemark {
        feature: FeatureData::named("tour"),
        geometry: None,
    });
    if let Some(Feature::Placemark(placemark)) = kml.feature.as_mut() {
        placemark.feature.object.extensions = vec![
            ForeignElement::new(gx, "balloonVisibility").with_text("1"),
            ForeignElement::new(gx, "Track")
                .with_attribute("id", "t1")
                .with_child(ForeignElement::new(gx, "coord").with_text("1 2 3")),
        ];
    }
    let codec = KmlCodec::new().with_extensions(ExtensionRegistry::with_google_extensions());
    assert_eq!(roundtrip_with(&codec, &kml), kml);
}
