use image_slideshow::events::ImageListReady;

#[test]
fn response_payload_uses_camel_case_field_names() {
    let ready = ImageListReady {
        identifier: "module_1".into(),
        image_list: vec!["/images/a.png".into()],
    };
    let json = serde_json::to_value(&ready).unwrap();
    assert_eq!(json["identifier"], "module_1");
    assert_eq!(json["imageList"][0], "/images/a.png");
}
