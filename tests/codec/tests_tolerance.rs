//! Unrecognized content is skipped without changing the result.

use rstest::rstest;

use crate::helpers::document_fixtures::*;
use crate::helpers::kml_assertions::*;

const BASELINE: &str = "<Placemark><name>a</name><Point><coordinates>1,2</coordinates></Point></Placemark>";

#[rstest]
#[case::unknown_core_leaf(
    "<Placemark><name>a</name><Bogus>x</Bogus><Point><coordinates>1,2</coordinates></Point></Placemark>"
)]
#[case::unknown_core_subtree(
    "<Placemark><Bogus><name>shadow</name><Point/></Bogus><name>a</name><Point><coordinates>1,2</coordinates></Point></Placemark>"
)]
#[case::unknown_inside_geometry(
    "<Placemark><name>a</name><Point><gridRef>7</gridRef><coordinates>1,2</coordinates></Point></Placemark>"
)]
#[case::foreign_without_handler(
    r#"<Placemark><name>a</name><x:meta xmlns:x="urn:example"><x:k>v</x:k></x:meta><Point><coordinates>1,2</coordinates></Point></Placemark>"#
)]
#[case::gx_without_handler(
    r#"<Placemark xmlns:gx="http://www.google.com/kml/ext/2.2"><name>a</name><gx:balloonVisibility>1</gx:balloonVisibility><Point><coordinates>1,2</coordinates></Point></Placemark>"#
)]
#[case::comments_and_processing_instructions(
    "<Placemark><!-- note --><name>a</name><?pi data?><Point><coordinates>1,2</coordinates></Point></Placemark>"
)]
fn test_extra_content_is_ignored(#[case] noisy: &str) {
    assert_eq!(read(&kml_doc(noisy)), read(&kml_doc(BASELINE)));
}

#[test]
fn test_network_link_control_is_skipped() {
    let xml = kml_doc(
        "<NetworkLinkControl><minRefreshPeriod>5</minRefreshPeriod></NetworkLinkControl><Folder/>",
    );
    let kml = read(&xml);
    assert_eq!(root_feature(&kml).kind(), keyhole::ConcreteKind::Folder);
}

#[test]
fn test_second_root_feature_is_dropped() {
    let kml = read(&kml_doc("<Folder><name>kept</name></Folder><Folder><name>dropped</name></Folder>"));
    assert_eq!(root_feature(&kml).name(), Some("kept"));
}

#[test]
fn test_mismatched_lat_lon_box_variants_are_dropped() {
    let kml = read(&kml_doc(
        "<Folder>\
           <GroundOverlay><LatLonAltBox><north>1</north></LatLonAltBox></GroundOverlay>\
           <Placemark><Region><LatLonBox><north>1</north></LatLonBox></Region></Placemark>\
         </Folder>",
    ));
    let children = root_children(&kml);

    let keyhole::Feature::Overlay(keyhole::model::Overlay::Ground(ground)) = &children[0] else {
        panic!("expected a GroundOverlay, got {:?}", children[0]);
    };
    assert_eq!(ground.lat_lon_box, None);

    let region = children[1].data().region.as_ref().unwrap();
    assert_eq!(region.lat_lon_alt_box, None);
}

#[test]
fn test_unqualified_elements_can_be_refused() {
    let codec = keyhole::KmlCodec::new().with_read_options(keyhole::ReadOptions {
        accept_unqualified: false,
        ..keyhole::ReadOptions::default()
    });
    assert!(codec.read_str("<kml><Folder/></kml>").is_err());
    assert!(codec.read_str(&kml_doc("<Folder/>")).is_ok());
}
