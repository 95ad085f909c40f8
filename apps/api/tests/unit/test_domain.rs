use mediashowcase::{
    application::browse_content::dto::ContentFilter,
    domain::{
        content::{
            entity::MediaType,
            value_objects::{ContentDescription, ContentTitle, TagList},
        },
        identity::user::{NewUser, Role},
        shared::pagination::{PageRequest, total_pages},
    },
};
use validator::Validate;

#[test]
fn page_request_clamps_out_of_range_input() {
    let p = PageRequest::new(0, 10);
    assert_eq!(p.page, 1);
    assert_eq!(p.offset(), 0);

    let p = PageRequest::new(-3, 500);
    assert_eq!(p.page, 1);
    assert_eq!(p.limit(), 100);

    let p = PageRequest::new(3, 0);
    assert_eq!(p.limit(), 1);
    assert_eq!(p.offset(), 2);
}

#[test]
fn offset_follows_page_and_size() {
    assert_eq!(PageRequest::new(4, 9).offset(), 27);
}

#[test]
fn page_far_past_the_end_does_not_overflow() {
    let p = PageRequest::new(i64::MAX, 100);
    assert_eq!(p.limit(), 100);
    assert_eq!(p.offset(), i64::MAX);
}

#[test]
fn total_pages_rounds_up_and_is_zero_when_empty() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
}

#[test]
fn tags_are_trimmed_and_deduplicated() {
    let tags = TagList::parse("Cats; dogs, cats ,,DOGS").unwrap();
    assert_eq!(tags.to_column(), "Cats,dogs");
}

#[test]
fn media_type_follows_declared_content_type() {
    assert_eq!(MediaType::from_content_type(Some("video/mp4")), MediaType::Video);
    assert_eq!(MediaType::from_content_type(Some("IMAGE/PNG")), MediaType::Image);
    assert_eq!(MediaType::from_content_type(Some("application/pdf")), MediaType::Other);
    assert_eq!(MediaType::from_content_type(None), MediaType::Unknown);
    assert_eq!(MediaType::parse(MediaType::Video.as_str()), MediaType::Video);
}

#[test]
fn title_and_description_bounds() {
    assert!(ContentTitle::new("   ".to_string()).is_err());
    assert!(ContentTitle::new("a".repeat(255)).is_ok());
    assert!(ContentTitle::new("a".repeat(256)).is_err());

    assert!(ContentDescription::new(Some("  ".into())).unwrap().is_none());
    assert!(ContentDescription::new(Some("a".repeat(501))).is_err());
}

#[test]
fn usernames_and_passwords_are_validated() {
    let valid = NewUser {
        username: "jane.doe-1".into(),
        email: Some("jane@example.com".into()),
        name: None,
        password: "longenough".into(),
    };
    assert!(valid.validate().is_ok());

    let bad_name = NewUser {
        username: "no spaces".into(),
        ..valid.clone()
    };
    assert!(bad_name.validate().is_err());

    let bad_email = NewUser {
        email: Some("not-an-email".into()),
        ..valid.clone()
    };
    assert!(bad_email.validate().is_err());

    let short_password = NewUser {
        password: "short".into(),
        ..valid
    };
    assert!(short_password.validate().is_err());
}

#[test]
fn role_parsing_defaults_to_user() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("USER"), Role::User);
    assert_eq!(Role::parse("anything"), Role::User);
}

#[test]
fn dashboard_filter_aliases() {
    assert_eq!(ContentFilter::parse("best_videos"), Some(ContentFilter::MostLiked));
    assert_eq!(ContentFilter::parse(" MOST_VIEWED "), Some(ContentFilter::MostViewed));
    assert_eq!(ContentFilter::parse("latest"), None);
}
