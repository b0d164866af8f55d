//! Default-valued fields are left out of the output.

use keyhole::base::{AngleRange, normalize};
use keyhole::model::*;
use keyhole::schema::defaults;
use rstest::rstest;

use crate::helpers::kml_assertions::*;

#[rstest]
#[case::placemark(Feature::Placemark(Placemark::default()), "<Placemark/>")]
#[case::network_link(Feature::NetworkLink(NetworkLink::default()), "<NetworkLink/>")]
#[case::folder(Feature::from(Folder::default()), "<Folder/>")]
#[case::document(Feature::from(Document::default()), "<Document/>")]
#[case::ground_overlay(Feature::from(GroundOverlay::default()), "<GroundOverlay/>")]
#[case::screen_overlay(Feature::from(ScreenOverlay::default()), "<ScreenOverlay/>")]
#[case::photo_overlay(Feature::from(PhotoOverlay::default()), "<PhotoOverlay/>")]
fn test_default_feature_has_no_fields(#[case] feature: Feature, #[case] expected: &str) {
    assert_eq!(write_compact(|w| w.write_feature(&feature)), expected);
}

#[rstest]
#[case::point(Geometry::Point(Point::default()), "<Point/>")]
#[case::line_string(Geometry::LineString(LineString::default()), "<LineString/>")]
#[case::linear_ring(Geometry::LinearRing(LinearRing::default()), "<LinearRing/>")]
#[case::polygon(Geometry::Polygon(Polygon::default()), "<Polygon/>")]
#[case::multi_geometry(Geometry::MultiGeometry(MultiGeometry::default()), "<MultiGeometry/>")]
#[case::model(Geometry::Model(Model::default()), "<Model/>")]
fn test_default_geometry_has_no_fields(#[case] geometry: Geometry, #[case] expected: &str) {
    assert_eq!(write_compact(|w| w.write_geometry(&geometry)), expected);
}

#[rstest]
#[case::icon(SubStyle::from(IconStyle::default()), "<IconStyle/>")]
#[case::label(SubStyle::from(LabelStyle::default()), "<LabelStyle/>")]
#[case::line(SubStyle::from(LineStyle::default()), "<LineStyle/>")]
#[case::poly(SubStyle::from(PolyStyle::default()), "<PolyStyle/>")]
#[case::balloon(SubStyle::Balloon(BalloonStyle::default()), "<BalloonStyle/>")]
#[case::list(SubStyle::List(ListStyle::default()), "<ListStyle/>")]
fn test_default_sub_style_has_no_fields(#[case] sub_style: SubStyle, #[case] expected: &str) {
    assert_eq!(write_compact(|w| w.write_sub_style(&sub_style)), expected);
}

#[test]
fn test_default_views_and_boxes_have_no_fields() {
    let look_at = AbstractView::LookAt(LookAt::default());
    let camera = AbstractView::Camera(Camera::default());
    assert_eq!(write_compact(|w| w.write_view(&look_at)), "<LookAt/>");
    assert_eq!(write_compact(|w| w.write_view(&camera)), "<Camera/>");

    let span = TimePrimitive::TimeSpan(TimeSpan::default());
    assert_eq!(write_compact(|w| w.write_time_primitive(&span)), "<TimeSpan/>");

    let plain = AbstractLatLonBox::LatLonBox(LatLonBox::default());
    let alt = AbstractLatLonBox::LatLonAltBox(LatLonAltBox::default());
    assert_eq!(write_compact(|w| w.write_lat_lon_box(&plain)), "<LatLonBox/>");
    assert_eq!(write_compact(|w| w.write_lat_lon_box(&alt)), "<LatLonAltBox/>");
}

#[test]
fn test_identifier_attributes_survive_default_omission() {
    let point = Geometry::Point(Point {
        object: ObjectData {
            id: Some("p".to_string()),
            target_id: Some("q".to_string()),
            extensions: Vec::new(),
        },
        ..Point::default()
    });
    assert_eq!(
        write_compact(|w| w.write_geometry(&point)),
        r#"<Point id="p" targetId="q"/>"#
    );
}

#[test]
fn test_default_colors_compare_by_value() {
    let balloon = SubStyle::Balloon(BalloonStyle {
        bg_color: defaults::DEF_BG_COLOR,
        text_color: defaults::DEF_TEXT_COLOR,
        ..BalloonStyle::default()
    });
    assert_eq!(write_compact(|w| w.write_sub_style(&balloon)), "<BalloonStyle/>");

    let line = SubStyle::from(LineStyle {
        color_style: ColorStyleData {
            color: keyhole::base::Color::new(0xff, 0xff, 0xff, 0xff),
            ..ColorStyleData::default()
        },
        ..LineStyle::default()
    });
    assert_eq!(write_compact(|w| w.write_sub_style(&line)), "<LineStyle/>");
}

#[rstest]
#[case::full_turn_back(-360.0)]
#[case::full_turn_forward(720.0)]
fn test_angles_equal_to_default_after_normalizing_are_omitted(#[case] heading: f64) {
    let view = AbstractView::LookAt(LookAt {
        heading,
        ..LookAt::default()
    });
    assert_eq!(write_compact(|w| w.write_view(&view)), "<LookAt/>");
}

#[test]
fn test_out_of_range_angles_are_written_normalized() {
    let view = AbstractView::Camera(Camera {
        longitude: 190.0,
        tilt: 200.0,
        ..Camera::default()
    });
    assert_eq!(
        write_compact(|w| w.write_view(&view)),
        "<Camera><longitude>-170.0</longitude><tilt>180.0</tilt></Camera>"
    );
}

#[rstest]
#[case(AngleRange::Signed180)]
#[case(AngleRange::Signed90)]
#[case(AngleRange::Positive90)]
#[case(AngleRange::Positive180)]
#[case(AngleRange::Full360)]
fn test_normalization_is_idempotent(#[case] range: AngleRange) {
    for value in [-725.5, -360.0, -180.0, -90.0, -0.5, 0.0, 45.0, 90.0, 180.0, 359.0, 360.0, 1000.0] {
        let once = normalize(value, range);
        assert_eq!(normalize(once, range), once, "{value} in {range:?}");
        let (min, max) = range.bounds();
        assert!((min..=max).contains(&once), "{value} -> {once} in {range:?}");
    }
}
