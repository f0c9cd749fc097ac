use super::*;

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Location::new(3, 14).to_string(), "3:14");
    assert_eq!(format!("{:?}", Location::START), "1:1");
}

#[test]
fn ordering_is_line_major() {
    assert!(Location::new(1, 80) < Location::new(2, 1));
    assert!(Location::new(2, 1) < Location::new(2, 2));
}
