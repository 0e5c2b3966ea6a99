use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeLevel::Info, NoticePosition::TopRight, "a");
    let b = notices.push(NoticeLevel::Success, NoticePosition::TopRight, "b");
    assert!(b > a);
    assert_eq!(notices.items.len(), 2);
}

#[test]
fn error_shorthand_is_top_center() {
    let mut notices = Notices::default();
    notices.error("nope");
    let notice = &notices.items[0];
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.position, NoticePosition::TopCenter);
    assert_eq!(notice.text, "nope");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut notices = Notices::default();
    let keep = notices.error("keep");
    let drop = notices.error("drop");
    notices.dismiss(drop);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut notices = Notices::default();
    notices.error("x");
    notices.dismiss(99);
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn dismissed_ids_are_not_reused() {
    let mut notices = Notices::default();
    let first = notices.error("x");
    notices.dismiss(first);
    let second = notices.error("y");
    assert_ne!(first, second);
}

#[test]
fn at_filters_by_position() {
    let mut notices = Notices::default();
    notices.error("center");
    notices.push(NoticeLevel::Info, NoticePosition::TopRight, "right");
    let center: Vec<_> = notices.at(NoticePosition::TopCenter).map(|n| n.text.as_str()).collect();
    assert_eq!(center, vec!["center"]);
}
