//! Integration tests for the case conversion helpers.

use rn_appgen::generator::names::{class_name, constant_name, file_name, names, property_name};

#[test]
fn kebab_and_camel_inputs_agree() {
    assert_eq!(file_name("my-app"), file_name("myApp"));
    assert_eq!(class_name("my-app"), class_name("myApp"));
}

#[test]
fn file_name_is_idempotent() {
    for input in ["myApp", "My App", "shop_front", "directory/myApp", "_internal_tool"] {
        let once = file_name(input);
        assert_eq!(file_name(&once), once, "input {:?}", input);
    }
}

#[test]
fn class_name_drops_separators() {
    assert_eq!(class_name("my app"), "MyApp");
    assert_eq!(class_name("my_app"), "MyApp");
    assert_eq!(class_name("a/b-c"), "ABC");
}

#[test]
fn property_name_lowers_first_letter() {
    assert_eq!(property_name("Directory/my-app"), "directoryMyApp");
}

#[test]
fn constant_name_from_camel() {
    assert_eq!(constant_name("shopFront"), "SHOP_FRONT");
}

#[test]
fn names_record() {
    let n = names("directory/my-app");
    assert_eq!(n.file_name, "directory/my-app");
    assert_eq!(n.class_name, "DirectoryMyApp");
    assert_eq!(n.property_name, "directoryMyApp");
    assert_eq!(n.constant_name, "DIRECTORY_MY_APP");
}
