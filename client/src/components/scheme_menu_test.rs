use super::*;

#[test]
fn choice_class_marks_only_the_active_choice() {
    assert_eq!(
        choice_class(true),
        "scheme-menu__choice scheme-menu__choice--active"
    );
    assert_eq!(choice_class(false), "scheme-menu__choice");
}
