//! Documents and object graphs reused across the codec tests.

use keyhole::base::{Color, Coordinate, KmlDateTime};
use keyhole::model::*;

pub const KML_NS: &str = "http://www.opengis.net/kml/2.2";

pub const SIMPLE_PLACEMARK: &str = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark id="pm1">
    <name>Pin</name>
    <Point><coordinates>10,20,5</coordinates></Point>
  </Placemark>
</kml>"#;

pub const FOLDER_OF_TWO: &str = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Folder>
    <Placemark><name>first</name></Placemark>
    <Placemark><name>second</name></Placemark>
  </Folder>
</kml>"#;

pub const LEGACY_DOCUMENT: &str = r#"<kml xmlns="http://earth.google.com/kml/2.1">
  <Document>
    <NetworkLink>
      <Url><href>http://example.com/feed.kml</href></Url>
    </NetworkLink>
    <Placemark>
      <snippet maxLines="3">short</snippet>
    </Placemark>
  </Document>
</kml>"#;

/// Wrap `body` in a namespaced `<kml>` root.
pub fn kml_doc(body: &str) -> String {
    format!(r#"<kml xmlns="{KML_NS}">{body}</kml>"#)
}

pub fn color(hex: &str) -> Color {
    Color::parse(hex).unwrap()
}

pub fn when(text: &str) -> KmlDateTime {
    KmlDateTime::parse(text).unwrap()
}

pub fn placemark(name: &str, geometry: Option<Geometry>) -> Feature {
    Feature::Placemark(Placemark {
        feature: FeatureData::named(name),
        geometry,
    })
}

pub fn ring(coordinates: &[(f64, f64)]) -> LinearRing {
    LinearRing {
        coordinates: coordinates
            .iter()
            .map(|&(lon, lat)| Coordinate::flat(lon, lat))
            .collect(),
        ..LinearRing::default()
    }
}

pub fn full_style() -> Style {
    Style {
        object: ObjectData::with_id("full"),
        icon_style: Some(IconStyle {
            color_style: ColorStyleData {
                color: color("ff00ff00"),
                color_mode: ColorMode::Random,
                ..ColorStyleData::default()
            },
            scale: 1.5,
            heading: 45.0,
            icon: Some(Link::with_href("icon.png")),
            hot_spot: Some(Vec2::new(0.5, 2.0, Units::Fraction, Units::Pixels)),
        }),
        label_style: Some(LabelStyle {
            scale: 0.75,
            ..LabelStyle::default()
        }),
        line_style: Some(LineStyle {
            color_style: ColorStyleData {
                color: color("7f0000ff"),
                ..ColorStyleData::default()
            },
            width: 3.0,
        }),
        poly_style: Some(PolyStyle {
            fill: false,
            outline: true,
            ..PolyStyle::default()
        }),
        balloon_style: Some(BalloonStyle {
            bg_color: color("ffcccccc"),
            text: Some("<b>$[name]</b>".to_string()),
            display_mode: DisplayMode::Hide,
            ..BalloonStyle::default()
        }),
        list_style: Some(ListStyle {
            list_item_type: ListItemType::RadioFolder,
            item_icons: vec![ItemIcon {
                states: vec![ItemIconState::Open, ItemIconState::Fetching0],
                href: Some("open.png".to_string()),
                ..ItemIcon::default()
            }],
            max_snippet_lines: 4,
            ..ListStyle::default()
        }),
    }
}

fn model_geometry() -> Geometry {
    Geometry::Model(Model {
        altitude_mode: AltitudeMode::RelativeToGround,
        location: Some(Location {
            longitude: -122.5,
            latitude: 37.75,
            altitude: 10.0,
            ..Location::default()
        }),
        orientation: Some(Orientation {
            heading: 90.0,
            tilt: 15.0,
            roll: -10.0,
            ..Orientation::default()
        }),
        scale: Some(Scale {
            x: 2.0,
            y: 2.0,
            z: 0.5,
            ..Scale::default()
        }),
        link: Some(Link::with_href("house.dae")),
        resource_map: Some(ResourceMap {
            aliases: vec![Alias {
                target_href: Some("textures/wall.jpg".to_string()),
                source_href: Some("wall.jpg".to_string()),
                ..Alias::default()
            }],
            ..ResourceMap::default()
        }),
        ..Model::default()
    })
}

fn all_geometries() -> Geometry {
    Geometry::MultiGeometry(MultiGeometry {
        object: ObjectData::with_id("multi"),
        geometries: vec![
            Geometry::Point(Point {
                extrude: true,
                altitude_mode: AltitudeMode::Absolute,
                ..Point::new(Coordinate::new(1.0, 2.0, 3.0))
            }),
            Geometry::LineString(LineString {
                tessellate: true,
                coordinates: vec![Coordinate::flat(0.0, 0.0), Coordinate::flat(1.0, 1.0)],
                ..LineString::default()
            }),
            Geometry::LinearRing(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)])),
            Geometry::Polygon(Polygon {
                extrude: true,
                outer_boundary: Some(ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)])),
                inner_boundaries: vec![ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])],
                ..Polygon::default()
            }),
            model_geometry(),
        ],
    })
}

fn rich_placemark() -> Feature {
    Feature::Placemark(Placemark {
        feature: FeatureData {
            object: ObjectData::with_id("rich"),
            name: Some("Everything".to_string()),
            visibility: false,
            open: true,
            author: Some(Author {
                names: vec!["A. Cartographer".to_string()],
                uris: vec!["http://example.com/~a".to_string()],
                emails: vec![],
            }),
            link: Some(AtomLink {
                href: Some("http://example.com".to_string()),
                rel: Some("related".to_string()),
                ..AtomLink::default()
            }),
            address: Some("1 Main St".to_string()),
            phone_number: Some("+1 555 0100".to_string()),
            snippet: Some(Snippet {
                text: "short".to_string(),
                max_lines: 1,
            }),
            description: Some("<p>long</p>".to_string()),
            view: Some(AbstractView::LookAt(LookAt {
                longitude: 10.0,
                latitude: 20.0,
                heading: 350.0,
                tilt: 45.0,
                range: 1000.0,
                altitude_mode: AltitudeMode::RelativeToGround,
                ..LookAt::default()
            })),
            time_primitive: Some(TimePrimitive::TimeSpan(TimeSpan {
                begin: Some(when("2024-05")),
                end: Some(when("2024-06-01T12:00:00Z")),
                ..TimeSpan::default()
            })),
            style_url: Some("#full".to_string()),
            style_selectors: vec![StyleSelector::Style(Style {
                line_style: Some(LineStyle {
                    width: 2.0,
                    ..LineStyle::default()
                }),
                ..Style::default()
            })],
            region: Some(Region {
                lat_lon_alt_box: Some(LatLonAltBox {
                    bounds: LatLonBounds::new(45.0, 40.0, -100.0, -110.0),
                    min_altitude: 0.0,
                    max_altitude: 500.0,
                    altitude_mode: AltitudeMode::Absolute,
                    ..LatLonAltBox::default()
                }),
                lod: Some(Lod {
                    min_lod_pixels: 128.0,
                    max_lod_pixels: 1024.0,
                    min_fade_extent: 8.0,
                    ..Lod::default()
                }),
                ..Region::default()
            }),
            extended_data: Some(ExtendedData {
                data: vec![Data {
                    display_name: Some("Height".to_string()),
                    ..Data::new("height", "12")
                }],
                schema_data: vec![SchemaData {
                    schema_url: Some("#trail".to_string()),
                    simple_data: vec![SimpleData {
                        name: "length".to_string(),
                        value: "4.5".to_string(),
                    }],
                    ..SchemaData::default()
                }],
                extensions: vec![],
            }),
        },
        geometry: Some(all_geometries()),
    })
}

fn overlays() -> Vec<Feature> {
    vec![
        Feature::from(GroundOverlay {
            overlay: OverlayData {
                feature: FeatureData::named("ground"),
                color: color("80ffffff"),
                draw_order: 2,
                icon: Some(Link::with_href("map.png")),
            },
            altitude: 12.0,
            altitude_mode: AltitudeMode::Absolute,
            lat_lon_box: Some(LatLonBox {
                bounds: LatLonBounds::new(10.0, -10.0, 20.0, -20.0),
                rotation: 30.0,
                ..LatLonBox::default()
            }),
        }),
        Feature::from(ScreenOverlay {
            overlay: OverlayData {
                feature: FeatureData::named("screen"),
                ..OverlayData::default()
            },
            overlay_xy: Some(Vec2::new(0.0, 1.0, Units::Fraction, Units::Fraction)),
            screen_xy: Some(Vec2::new(10.0, 10.0, Units::Pixels, Units::InsetPixels)),
            size: Some(Vec2::new(0.0, 0.0, Units::Fraction, Units::Fraction)),
            rotation: -45.0,
            ..ScreenOverlay::default()
        }),
        Feature::from(PhotoOverlay {
            overlay: OverlayData {
                feature: FeatureData::named("photo"),
                icon: Some(Link {
                    refresh_mode: RefreshMode::OnInterval,
                    refresh_interval: 30.0,
                    ..Link::with_href("tiles/$[level]/$[x]_$[y].jpg")
                }),
                ..OverlayData::default()
            },
            rotation: 5.0,
            view_volume: Some(ViewVolume {
                left_fov: -30.0,
                right_fov: 30.0,
                bottom_fov: -20.0,
                top_fov: 20.0,
                near: 100.0,
                ..ViewVolume::default()
            }),
            image_pyramid: Some(ImagePyramid {
                tile_size: 512,
                max_width: 8192,
                max_height: 4096,
                grid_origin: GridOrigin::UpperLeft,
                ..ImagePyramid::default()
            }),
            point: Some(Point::new(Coordinate::new(5.0, 6.0, 7.0))),
            shape: Shape::Cylinder,
        }),
    ]
}

/// A document that exercises every concrete type at least once.
pub fn full_document() -> Kml {
    let network_link = Feature::NetworkLink(NetworkLink {
        feature: FeatureData {
            view: Some(AbstractView::Camera(Camera {
                longitude: -71.0,
                latitude: 42.0,
                altitude: 300.0,
                heading: 10.0,
                tilt: 170.0,
                roll: -5.0,
                ..Camera::default()
            })),
            time_primitive: Some(TimePrimitive::TimeStamp(TimeStamp {
                when: Some(when("2023-01-15")),
                ..TimeStamp::default()
            })),
            ..FeatureData::named("feed")
        },
        refresh_visibility: true,
        fly_to_view: true,
        link: Some(Link {
            view_refresh_mode: ViewRefreshMode::OnStop,
            view_refresh_time: 2.0,
            view_bound_scale: 0.5,
            view_format: Some("BBOX=[bboxWest]".to_string()),
            http_query: Some("client=test".to_string()),
            ..Link::with_href("http://example.com/feed.kml")
        }),
    });

    let mut folder_children = vec![rich_placemark(), network_link];
    folder_children.extend(overlays());

    let document = Document {
        feature: FeatureData {
            style_selectors: vec![
                StyleSelector::Style(full_style()),
                StyleSelector::StyleMap(StyleMap {
                    object: ObjectData::with_id("map"),
                    pairs: vec![
                        Pair {
                            style_url: Some("#full".to_string()),
                            ..Pair::default()
                        },
                        Pair {
                            key: StyleState::Highlight,
                            style_selector: Some(StyleSelector::Style(Style {
                                label_style: Some(LabelStyle {
                                    scale: 2.0,
                                    ..LabelStyle::default()
                                }),
                                ..Style::default()
                            })),
                            ..Pair::default()
                        },
                    ],
                }),
            ],
            ..FeatureData::named("root")
        },
        schemas: vec![Schema {
            object: ObjectData::with_id("trail"),
            name: Some("Trail".to_string()),
            simple_fields: vec![SimpleField {
                field_type: Some("double".to_string()),
                name: Some("length".to_string()),
                display_name: Some("Length (km)".to_string()),
            }],
        }],
        features: vec![Feature::Container(Container::Folder(Folder {
            feature: FeatureData::named("all"),
            features: folder_children,
        }))],
    };

    Kml {
        hint: Some("target=earth".to_string()),
        ..Kml::new(document)
    }
}
