//! Reference cases for the reader and writer.

use keyhole::base::Coordinate;
use keyhole::model::*;
use rstest::rstest;

use crate::helpers::document_fixtures::*;
use crate::helpers::kml_assertions::*;

#[test]
fn test_point_reads_with_defaults_and_roundtrips() {
    let point = read_element("<Point><coordinates>10,20,5</coordinates></Point>", |r| {
        r.read_geometry()
    })
    .unwrap();

    let Geometry::Point(ref p) = point else {
        panic!("expected a Point, got {point:?}");
    };
    assert!(!p.extrude);
    assert_eq!(p.altitude_mode, AltitudeMode::ClampToGround);
    assert_eq!(p.coordinates, vec![Coordinate::new(10.0, 20.0, 5.0)]);

    let xml = write_compact(|w| w.write_geometry(&point));
    assert_eq!(xml, "<Point><coordinates>10.0,20.0,5.0</coordinates></Point>");
    assert_eq!(read_element(&xml, |r| r.read_geometry()).unwrap(), point);
}

#[test]
fn test_folder_keeps_placemark_order() {
    let kml = read(FOLDER_OF_TWO);
    assert_eq!(
        child_names(root_children(&kml)),
        vec![Some("first"), Some("second")]
    );

    let back = roundtrip(&kml);
    assert_eq!(back, kml);
    assert_eq!(
        child_names(root_children(&back)),
        vec![Some("first"), Some("second")]
    );
}

#[test]
fn test_style_with_only_line_width_writes_exact_tree() {
    let style = StyleSelector::Style(Style {
        line_style: Some(LineStyle {
            width: 3.0,
            ..LineStyle::default()
        }),
        ..Style::default()
    });
    let xml = write_compact(|w| w.write_style_selector(&style));
    assert_eq!(xml, "<Style><LineStyle><width>3.0</width></LineStyle></Style>");

    let codec = compact_codec();
    let doc = codec
        .write_string(&Kml::new(Document {
            feature: FeatureData {
                style_selectors: vec![style],
                ..FeatureData::default()
            },
            ..Document::default()
        }))
        .unwrap();
    assert_eq!(
        doc,
        "<kml><Document><Style><LineStyle><width>3.0</width></LineStyle></Style></Document></kml>"
    );
}

#[rstest]
#[case::inside_range(95.0, 95.0)]
#[case::upper_boundary(180.0, 180.0)]
#[case::lower_boundary(-180.0, -180.0)]
#[case::wraps_past_half_turn(200.0, -160.0)]
#[case::wraps_below(-190.0, 170.0)]
fn test_lat_lon_box_north_is_normalized(#[case] north: f64, #[case] expected: f64) {
    let xml = format!("<LatLonBox><north>{north}</north></LatLonBox>");
    let read_back = read_element(&xml, |r| r.read_lat_lon_box()).unwrap();
    assert_eq!(read_back.bounds().north, expected);
    assert!((-180.0..=180.0).contains(&read_back.bounds().north));

    let unnormalized = AbstractLatLonBox::LatLonBox(LatLonBox {
        bounds: LatLonBounds {
            north,
            ..LatLonBounds::default()
        },
        ..LatLonBox::default()
    });
    let written = write_compact(|w| w.write_lat_lon_box(&unnormalized));
    let reread = read_element(&written, |r| r.read_lat_lon_box()).unwrap();
    assert_eq!(reread.bounds().north, expected);
}

#[test]
fn test_legacy_namespace_and_spellings_are_read_as_core() {
    let kml = read(LEGACY_DOCUMENT);
    let children = root_children(&kml);

    let Feature::NetworkLink(link) = &children[0] else {
        panic!("expected a NetworkLink, got {:?}", children[0]);
    };
    assert_eq!(
        link.link.as_ref().and_then(|l| l.href.as_deref()),
        Some("http://example.com/feed.kml")
    );

    let snippet = children[1].data().snippet.as_ref().unwrap();
    assert_eq!(snippet.text, "short");
    assert_eq!(snippet.max_lines, 3);
}

#[test]
fn test_bare_feature_root_is_wrapped() {
    let kml = read(r#"<Placemark><name>alone</name></Placemark>"#);
    assert_eq!(root_feature(&kml).name(), Some("alone"));
}

#[test]
fn test_free_functions_use_default_codec() {
    let kml = keyhole::from_str(SIMPLE_PLACEMARK).unwrap();
    let text = keyhole::to_string(&kml).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains(r#"<Placemark id="pm1">"#));
    assert_eq!(keyhole::from_slice(text.as_bytes()).unwrap(), kml);
}
