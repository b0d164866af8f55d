//! Failures carry their kind, the offending tag and the nesting path.

use keyhole::KmlError;
use keyhole::codec::KmlCodec;
use keyhole::model::PermissiveFactory;
use rstest::rstest;

use crate::helpers::document_fixtures::*;
use crate::helpers::kml_assertions::*;

#[test]
fn test_truncated_document_is_a_structure_error() {
    let err = read_err(&format!(r#"<kml xmlns="{KML_NS}"><Folder><Placemark>"#));
    let KmlError::Structure { path, .. } = err else {
        panic!("expected a structure error, got {err:?}");
    };
    assert_eq!(path, "kml/Folder/Placemark");
}

#[rstest]
#[case::container_closed_by_parent("<kml><Folder></kml>", "kml/Folder", "</Folder>")]
#[case::field_closed_by_owner("<Folder><name>x</Folder>", "Folder/name", "</name>")]
#[case::inside_skipped_element(
    "<kml><Folder><unknown><a></b></unknown></Folder></kml>",
    "kml/Folder/unknown",
    "</a>"
)]
fn test_mismatched_end_tag_is_a_structure_error(
    #[case] xml: &str,
    #[case] expected_path: &str,
    #[case] expected_tag: &str,
) {
    let err = read_err(xml);
    let KmlError::Structure { message, path } = err else {
        panic!("expected a structure error, got {err:?}");
    };
    assert_eq!(path, expected_path);
    assert!(message.contains(expected_tag), "{message}");
}

#[test]
fn test_stray_end_tag_after_root_is_a_structure_error() {
    assert!(matches!(
        read_err("<kml><Folder/></kml></Folder>"),
        KmlError::Structure { .. }
    ));
}

#[test]
fn test_wrong_root_is_a_structure_error() {
    let err = read_err("<Point><coordinates>1,2</coordinates></Point>");
    let KmlError::Structure { message, .. } = err else {
        panic!("expected a structure error, got {err:?}");
    };
    assert!(message.contains("Point"), "{message}");
}

#[test]
fn test_empty_input_is_a_structure_error() {
    assert!(matches!(read_err(""), KmlError::Structure { .. }));
}

#[test]
fn test_bad_number_is_a_scalar_error_with_path() {
    let err = read_err(&kml_doc(
        "<Document><Style><LineStyle><width>wide</width></LineStyle></Style></Document>",
    ));
    let KmlError::Scalar {
        tag,
        value,
        expected,
        path,
        ..
    } = err
    else {
        panic!("expected a scalar error, got {err:?}");
    };
    assert_eq!(tag, "width");
    assert_eq!(value, "wide");
    assert_eq!(expected, "double");
    assert!(path.ends_with("Document/Style/LineStyle/width"), "{path}");
}

#[test]
fn test_bad_scalars_are_not_defaulted() {
    for body in [
        "<Placemark><visibility>maybe</visibility></Placemark>",
        "<Placemark><Point><altitudeMode>sideways</altitudeMode></Point></Placemark>",
        "<Placemark><Point><coordinates>1,north</coordinates></Point></Placemark>",
        "<GroundOverlay><color>not-a-color</color></GroundOverlay>",
        "<GroundOverlay><drawOrder>1.5</drawOrder></GroundOverlay>",
        "<Placemark><TimeStamp><when>yesterday</when></TimeStamp></Placemark>",
        r#"<ScreenOverlay><overlayXY x="left"/></ScreenOverlay>"#,
    ] {
        let err = read_err(&kml_doc(body));
        assert!(matches!(err, KmlError::Scalar { .. }), "{body}: {err:?}");
    }
}

#[test]
fn test_factory_rejection_is_a_domain_error() {
    let xml = kml_doc(
        "<Placemark><Region>\
           <LatLonAltBox><minAltitude>100</minAltitude><maxAltitude>10</maxAltitude></LatLonAltBox>\
         </Region></Placemark>",
    );
    let err = read_err(&xml);
    let KmlError::Domain { tag, path, .. } = &err else {
        panic!("expected a domain error, got {err:?}");
    };
    assert_eq!(tag, "LatLonAltBox");
    assert!(path.ends_with("Region/LatLonAltBox"), "{path}");

    let permissive = KmlCodec::new().with_factory(PermissiveFactory);
    assert!(permissive.read_str(&xml).is_ok());
}

#[test]
fn test_invalid_lod_is_a_domain_error() {
    let err = read_err(&kml_doc(
        "<Placemark><Region><Lod><minLodPixels>256</minLodPixels><maxLodPixels>64</maxLodPixels></Lod></Region></Placemark>",
    ));
    assert!(matches!(err, KmlError::Domain { .. }), "{err:?}");
    assert!(err.path().is_some_and(|p| p.ends_with("Lod")));
}

#[test]
fn test_unbound_prefix_is_an_xml_error() {
    assert!(matches!(
        read_err(r#"<kml><p:Folder/></kml>"#),
        KmlError::Xml(_)
    ));
}
