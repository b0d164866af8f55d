//! Codec shortcuts and assertion helpers.

use keyhole::codec::{KmlCodec, WriteOptions};
use keyhole::model::{Feature, Kml};
use keyhole::reader::KmlReader;
use keyhole::tokens::{XmlTokenSink, XmlTokenSource};
use keyhole::writer::KmlWriter;
use keyhole::{ExtensionRegistry, KmlError};

/// Codec that writes one line with no declaration and no root namespace
/// attributes.
pub fn compact_codec() -> KmlCodec {
    KmlCodec::new().with_write_options(WriteOptions::compact())
}

/// Write with the default options and read the result back.
pub fn roundtrip(kml: &Kml) -> Kml {
    roundtrip_with(&KmlCodec::new(), kml)
}

pub fn roundtrip_with(codec: &KmlCodec, kml: &Kml) -> Kml {
    let bytes = codec.write(kml).unwrap();
    codec.read(&bytes).unwrap_or_else(|e| {
        panic!(
            "written document failed to read back: {e}\n{}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Assert `kml` survives a write/read cycle unchanged.
pub fn assert_roundtrips(kml: &Kml) {
    let back = roundtrip(kml);
    assert_eq!(&back, kml, "document changed across write/read");
}

pub fn read(xml: &str) -> Kml {
    KmlCodec::new()
        .read_str(xml)
        .unwrap_or_else(|e| panic!("failed to read document: {e}\n{xml}"))
}

pub fn read_err(xml: &str) -> KmlError {
    match KmlCodec::new().read_str(xml) {
        Ok(kml) => panic!("expected an error, read {kml:?}"),
        Err(e) => e,
    }
}

pub fn read_with_extensions(xml: &str, extensions: ExtensionRegistry) -> Kml {
    KmlCodec::new()
        .with_extensions(extensions)
        .read_str(xml)
        .unwrap()
}

/// Run `write` against a compact writer and return the produced text.
pub fn write_compact(
    write: impl FnOnce(&mut KmlWriter<XmlTokenSink<Vec<u8>>>) -> Result<(), KmlError>,
) -> String {
    let mut writer = KmlWriter::new(XmlTokenSink::new(Vec::new(), None))
        .with_options(WriteOptions::compact());
    write(&mut writer).unwrap();
    String::from_utf8(writer.into_sink().into_inner().unwrap()).unwrap()
}

/// Run `read` against a reader over `xml`.
pub fn read_element<'a, T>(
    xml: &'a str,
    read: impl FnOnce(&mut KmlReader<XmlTokenSource<&'a [u8]>>) -> Result<T, KmlError>,
) -> Result<T, KmlError> {
    let mut reader = KmlReader::new(XmlTokenSource::new(xml.as_bytes()));
    read(&mut reader)
}

pub fn root_feature(kml: &Kml) -> &Feature {
    kml.feature.as_ref().expect("document has no root feature")
}

/// Children of the root container.
pub fn root_children(kml: &Kml) -> &[Feature] {
    root_feature(kml)
        .children()
        .expect("root feature is not a container")
}

pub fn child_names(features: &[Feature]) -> Vec<Option<&str>> {
    features.iter().map(Feature::name).collect()
}
