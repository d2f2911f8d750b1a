use tmx_ast::{parse, Orientation, TmxMap};

#[test]
fn parses_minimal_map() {
    let src = r#"<map version="1.2" orientation="isometric" width="4" height="3" tilewidth="32" tileheight="16"/>"#;
    let map = parse(src).unwrap();
    let expected = TmxMap {
        version: "1.2".to_owned(),
        orientation: Orientation::Isometric,
        width: 4,
        height: 3,
        tile_width: 32,
        tile_height: 16,
        ..TmxMap::default()
    };
    assert_eq!(map, expected);
}

#[test]
fn omitted_attributes_take_defaults() {
    let map = parse("<map/>").unwrap();
    assert_eq!(map.version, "1.0");
    assert_eq!(map.orientation, Orientation::Orthogonal);
    assert_eq!(map.width, 0);
    assert_eq!(map.tile_height, 0);
}

#[test]
fn orientation_is_case_insensitive() {
    let map = parse(r#"<map orientation="Orthogonal"/>"#).unwrap();
    assert_eq!(map.orientation, Orientation::Orthogonal);
}

#[test]
fn map_level_properties() {
    let src = r#"
        <map>
          <properties>
            <property name="music" value="overworld"/>
            <property name="weather" value="rain"/>
          </properties>
        </map>"#;
    let map = parse(src).unwrap();
    assert_eq!(map.properties.get("music"), Some("overworld"));
    assert_eq!(map.properties.get("weather"), Some("rain"));
}

#[test]
fn repeated_property_name_keeps_last_value() {
    let src = r#"
        <map>
          <properties>
            <property name="music" value="overworld"/>
            <property name="music" value="dungeon"/>
          </properties>
        </map>"#;
    let map = parse(src).unwrap();
    assert_eq!(map.properties.get("music"), Some("dungeon"));
}

#[test]
fn attribute_order_does_not_matter_for_equality() {
    let a = parse(r#"<map width="8" height="8" orientation="orthogonal"/>"#).unwrap();
    let b = parse(r#"<map orientation="orthogonal" height="8" width="8"/>"#).unwrap();
    assert_eq!(a, b);
}
