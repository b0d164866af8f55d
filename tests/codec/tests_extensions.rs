//! Foreign elements go to the first registered handler that accepts them.

use std::sync::{Arc, Mutex};

use keyhole::extension::{CaptureHandler, ExtensionHandler, ExtensionRegistry, ExtensionSite};
use keyhole::model::{Feature, ForeignElement, ForeignNode};
use keyhole::schema::ConcreteKind;
use keyhole::schema::namespace::{GX, GX_PREFIX};
use keyhole::tokens::{StartTag, TokenSource, read_foreign};
use keyhole::{KmlCodec, KmlError};

use crate::helpers::kml_assertions::*;

const TOUR: &str = r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Placemark>
    <name>tour</name>
    <gx:balloonVisibility>1</gx:balloonVisibility>
    <Point>
      <gx:altitudeMode>clampToSeaFloor</gx:altitudeMode>
      <coordinates>1,2</coordinates>
    </Point>
  </Placemark>
</kml>"#;

/// Tags every element it reads and records each read in `seen`.
struct Recording {
    label: &'static str,
    owners: Option<Vec<ConcreteKind>>,
    seen: Arc<Mutex<Vec<&'static str>>>,
}

impl ExtensionHandler for Recording {
    fn namespace(&self) -> &str {
        GX
    }

    fn prefix(&self) -> &str {
        GX_PREFIX
    }

    fn can_handle(&self, site: &ExtensionSite<'_>, _element: Option<&ForeignElement>) -> bool {
        site.namespace == GX
            && self
                .owners
                .as_ref()
                .is_none_or(|owners| owners.contains(&site.owner))
    }

    fn read(
        &self,
        source: &mut dyn TokenSource,
        start: &StartTag,
    ) -> Result<ForeignElement, KmlError> {
        self.seen.lock().unwrap().push(self.label);
        let element = read_foreign(source, start)?;
        Ok(element.with_attribute("handler", self.label))
    }
}

fn placemark_extensions(kml: &keyhole::Kml) -> &[ForeignElement] {
    &root_feature(kml).data().object.extensions
}

#[test]
fn test_capture_handler_keeps_elements_on_their_owner() {
    let kml = read_with_extensions(TOUR, ExtensionRegistry::with_google_extensions());

    let on_placemark = placemark_extensions(&kml);
    assert_eq!(on_placemark.len(), 1);
    assert_eq!(on_placemark[0].namespace.as_deref(), Some(GX));
    assert_eq!(on_placemark[0].local_name, "balloonVisibility");
    assert_eq!(on_placemark[0].text(), "1");

    let Feature::Placemark(placemark) = root_feature(&kml) else {
        panic!("expected a Placemark");
    };
    let point = placemark.geometry.as_ref().unwrap();
    assert_eq!(
        point.object().extensions[0].children,
        vec![ForeignNode::Text("clampToSeaFloor".to_string())]
    );
}

#[test]
fn test_without_handlers_foreign_elements_are_dropped() {
    let kml = read(TOUR);
    assert!(placemark_extensions(&kml).is_empty());
}

#[test]
fn test_first_accepting_handler_wins() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let registry = ExtensionRegistry::new()
        .with(Recording {
            label: "point-only",
            owners: Some(vec![ConcreteKind::Point]),
            seen: Arc::clone(&seen),
        })
        .with(Recording {
            label: "any",
            owners: None,
            seen: Arc::clone(&seen),
        })
        .with(CaptureHandler::new(GX, GX_PREFIX));

    let kml = read_with_extensions(TOUR, registry);

    assert_eq!(
        placemark_extensions(&kml)[0].attributes,
        vec![("handler".to_string(), "any".to_string())]
    );
    let Feature::Placemark(placemark) = root_feature(&kml) else {
        panic!("expected a Placemark");
    };
    let point_extension = &placemark.geometry.as_ref().unwrap().object().extensions[0];
    assert_eq!(
        point_extension.attributes,
        vec![("handler".to_string(), "point-only".to_string())]
    );

    assert_eq!(*seen.lock().unwrap(), vec!["any", "point-only"]);
}

#[test]
fn test_captured_elements_are_written_last_with_prefix() {
    let codec = compact_codec().with_extensions(ExtensionRegistry::with_google_extensions());
    let kml = codec.read_str(TOUR).unwrap();
    let out = codec.write_string(&kml).unwrap();
    assert_eq!(
        out,
        "<kml><Placemark><name>tour</name><Point><coordinates>1.0,2.0</coordinates>\
         <gx:altitudeMode xmlns:gx=\"http://www.google.com/kml/ext/2.2\">clampToSeaFloor</gx:altitudeMode></Point>\
         <gx:balloonVisibility xmlns:gx=\"http://www.google.com/kml/ext/2.2\">1</gx:balloonVisibility></Placemark></kml>"
    );
    assert_eq!(codec.read_str(&out).unwrap(), kml);
}

#[test]
fn test_handler_prefixes_are_declared_on_the_root() {
    let codec = KmlCodec::new().with_extensions(ExtensionRegistry::with_google_extensions());
    let out = codec
        .write_string(&codec.read_str(TOUR).unwrap())
        .unwrap();
    assert!(
        out.contains(r#"xmlns:gx="http://www.google.com/kml/ext/2.2""#),
        "{out}"
    );
    assert_eq!(codec.read_str(&out).unwrap(), codec.read_str(TOUR).unwrap());
}

#[test]
fn test_unwritable_extensions_are_dropped_on_output() {
    let codec = compact_codec().with_extensions(ExtensionRegistry::with_google_extensions());
    let kml = codec.read_str(TOUR).unwrap();
    let out = compact_codec().write_string(&kml).unwrap();
    assert!(!out.contains("gx:"), "{out}");
}

#[test]
fn test_registered_prefix_is_used_for_its_namespace() {
    let registry = ExtensionRegistry::new().with(CaptureHandler::new("urn:example", "ex"));
    let codec = compact_codec().with_extensions(registry);
    let kml = codec
        .read_str(r#"<kml><Folder><ex:tag xmlns:ex="urn:example">v</ex:tag></Folder></kml>"#)
        .unwrap();
    let out = codec.write_string(&kml).unwrap();
    assert_eq!(out, "<kml><Folder><ex:tag>v</ex:tag></Folder></kml>");
}
