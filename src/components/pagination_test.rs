use super::*;

#[test]
fn page_label_formats_position() {
    assert_eq!(page_label(1, 1), "Page 1 of 1");
    assert_eq!(page_label(3, 12), "Page 3 of 12");
}
