use tmx_ast::{parse, TmxImage, TmxLayer, TmxObject, TmxProperties, TmxTileset, TmxVisitor};

#[derive(Default)]
struct Census {
    tilesets: Vec<String>,
    images: usize,
    objects: Vec<String>,
    property_sets: usize,
}

impl TmxVisitor for Census {
    fn visit_tileset(&mut self, tileset: &TmxTileset) {
        self.tilesets.push(tileset.name.clone());
    }
    fn visit_image(&mut self, _image: &TmxImage) {
        self.images += 1;
    }
    fn visit_object(&mut self, object: &TmxObject) {
        self.objects.push(object.name.clone());
    }
    fn visit_properties(&mut self, _properties: &TmxProperties) {
        self.property_sets += 1;
    }
}

#[test]
fn tilesets_forward_to_their_parts() {
    let src = r#"
        <map>
          <tileset firstgid="1" name="terrain">
            <image source="terrain.png" width="64" height="64"/>
          </tileset>
          <tileset firstgid="65" name="decor"/>
        </map>"#;
    let map = parse(src).unwrap();

    let mut census = Census::default();
    for tileset in map.tilesets.values() {
        tileset.accept(&mut census);
    }

    assert_eq!(census.tilesets, vec!["terrain", "decor"]);
    assert_eq!(census.images, 1);
    assert_eq!(census.property_sets, 2);
}

#[test]
fn object_groups_forward_objects_in_document_order() {
    let src = r#"
        <map>
          <objectgroup name="spawns">
            <object name="player" x="0" y="0"/>
            <object name="enemy" x="8" y="8"/>
          </objectgroup>
        </map>"#;
    let map = parse(src).unwrap();

    let mut census = Census::default();
    for layer in &map.layers {
        layer.accept(&mut census);
    }

    assert_eq!(census.objects, vec!["player", "enemy"]);
}

#[test]
fn tile_layers_visit_only_themselves() {
    struct Names(Vec<String>);
    impl TmxVisitor for Names {
        fn visit_tile_layer(&mut self, layer: &tmx_ast::TmxTileLayer) {
            self.0.push(layer.name.clone());
        }
        fn visit_data(&mut self, _data: &tmx_ast::TmxData) {
            panic!("layer data is reached through the layer, not the visitor");
        }
    }

    let src = r#"
        <map>
          <layer name="ground">
            <data><tile gid="1"/></data>
          </layer>
        </map>"#;
    let map = parse(src).unwrap();

    let mut names = Names(Vec::new());
    for layer in &map.layers {
        layer.accept(&mut names);
    }
    assert_eq!(names.0, vec!["ground"]);
}

#[test]
fn default_methods_make_an_empty_visitor_valid() {
    struct Indifferent;
    impl TmxVisitor for Indifferent {}

    let map = parse(r#"<map><tileset firstgid="1"/></map>"#).unwrap();
    map.tileset(1).unwrap().accept(&mut Indifferent);
}

#[test]
fn layer_enum_dispatches_by_variant() {
    struct Kinds(Vec<&'static str>);
    impl TmxVisitor for Kinds {
        fn visit_tile_layer(&mut self, _: &tmx_ast::TmxTileLayer) {
            self.0.push("tiles");
        }
        fn visit_object_group(&mut self, _: &tmx_ast::TmxObjectGroup) {
            self.0.push("objects");
        }
    }

    let map = parse(r#"<map><layer name="a"/><objectgroup name="b"/></map>"#).unwrap();
    let mut kinds = Kinds(Vec::new());
    for layer in &map.layers {
        layer.accept(&mut kinds);
    }
    assert_eq!(kinds.0, vec!["tiles", "objects"]);

    assert!(matches!(map.layers[0], TmxLayer::Tile(_)));
    assert!(matches!(map.layers[1], TmxLayer::ObjectGroup(_)));
}
