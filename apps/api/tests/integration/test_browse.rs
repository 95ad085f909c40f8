use super::helpers::{
    admin_token, content_id, expect_status, get, post_json, read_json, register_and_login, send,
    spawn_app, unique_name, upload_png,
};
use axum::{Router, http::StatusCode};
use serde_json::{Value, json};

async fn dashboard(app: &Router, query: &str, token: Option<&str>) -> Value {
    let res = send(app, get(&format!("/dashboard?{}", query), token)).await;
    read_json(expect_status(res, StatusCode::OK).await).await
}

fn ids(view: &Value) -> Vec<i64> {
    view["page"]["items"]
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

fn assert_non_increasing(view: &Value, field: &str) {
    let values: Vec<i64> = view["page"]["items"]
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item[field].as_i64().expect("counter"))
        .collect();
    assert!(
        values.windows(2).all(|w| w[0] >= w[1]),
        "{} not in descending order: {:?}",
        field,
        values
    );
}

#[tokio::test]
async fn tag_listing_pages_newest_first() {
    let Some(test_app) = spawn_app().await else {
        return;
    };
    let app = &test_app.app;
    let admin = admin_token(&test_app).await;
    let tag = unique_name("tag");

    let mut uploaded = Vec::new();
    for n in 0..3 {
        let item = upload_png(app, &admin, &format!("Tagged {}", n), &format!("misc, {}", tag)).await;
        uploaded.push(content_id(&item));
    }

    let first = dashboard(app, &format!("tag={}&pageSize=2&page=1", tag), None).await;
    assert_eq!(first["filterTitle"], format!("Tag: {}", tag));
    assert_eq!(first["page"]["totalItems"], 3);
    assert_eq!(first["page"]["totalPages"], 2);
    assert_eq!(ids(&first), vec![uploaded[2], uploaded[1]]);

    let second = dashboard(app, &format!("tag={}&pageSize=2&page=2", tag), None).await;
    assert_eq!(ids(&second), vec![uploaded[0]]);

    let beyond = dashboard(app, &format!("tag={}&pageSize=2&page=5", tag), None).await;
    assert!(ids(&beyond).is_empty());
    assert_eq!(beyond["page"]["totalItems"], 3);

    let far = dashboard(app, &format!("tag={}&pageSize=2&page={}", tag, i64::MAX), None).await;
    assert!(ids(&far).is_empty());
    assert_eq!(far["page"]["totalItems"], 3);
}

#[tokio::test]
async fn keyword_search_matches_title_or_tags_case_insensitively() {
    let Some(test_app) = spawn_app().await else {
        return;
    };
    let app = &test_app.app;
    let admin = admin_token(&test_app).await;
    let word = unique_name("kw");

    let by_title = content_id(&upload_png(app, &admin, &format!("About {}", word.to_uppercase()), "misc").await);
    let by_tag = content_id(&upload_png(app, &admin, "Untitled", &word).await);

    let view = dashboard(app, &format!("keyword={}", word), None).await;
    assert_eq!(view["filterTitle"], format!("Search: {}", word));
    assert_eq!(ids(&view), vec![by_tag, by_title]);
}

#[tokio::test]
async fn wildcards_in_keyword_are_matched_literally() {
    let Some(test_app) = spawn_app().await else {
        return;
    };
    let app = &test_app.app;
    let admin = admin_token(&test_app).await;
    let word = unique_name("lit");
    upload_png(app, &admin, &format!("{} plain", word), "misc").await;

    // `%` would match the title above if it were passed through as a wildcard.
    let view = dashboard(app, &format!("keyword={}%25plain", word), None).await;
    assert!(ids(&view).is_empty());
}

#[tokio::test]
async fn most_liked_and_most_viewed_are_ordered_by_counter() {
    let Some(test_app) = spawn_app().await else {
        return;
    };
    let app = &test_app.app;
    let admin = admin_token(&test_app).await;
    let id = content_id(&upload_png(app, &admin, "Ranked", "misc").await);
    let (_, token) = register_and_login(app, "ranker").await;
    let res = send(app, post_json(&format!("/like/{}", id), Some(&token), json!({}))).await;
    expect_status(res, StatusCode::OK).await;

    let liked = dashboard(app, "filter=most_liked&pageSize=100", None).await;
    assert_eq!(liked["filterTitle"], "Most Liked");
    assert_non_increasing(&liked, "likeCount");

    let legacy = dashboard(app, "filter=best_videos&pageSize=100", None).await;
    assert_eq!(legacy["filter"], "most_liked");

    let viewed = dashboard(app, "filter=most_viewed&pageSize=100", None).await;
    assert_eq!(viewed["filterTitle"], "Most Viewed");
    assert_non_increasing(&viewed, "viewCount");
}

#[tokio::test]
async fn latest_listing_clamps_page_and_reports_likes() {
    let Some(test_app) = spawn_app().await else {
        return;
    };
    let app = &test_app.app;
    let admin = admin_token(&test_app).await;
    let id = content_id(&upload_png(app, &admin, "Fresh", "misc").await);
    let (_, token) = register_and_login(app, "reader").await;
    let res = send(app, post_json(&format!("/like/{}", id), Some(&token), json!({}))).await;
    expect_status(res, StatusCode::OK).await;

    let view = dashboard(app, "page=0", Some(&token)).await;
    assert_eq!(view["filterTitle"], "Latest Content");
    assert_eq!(view["page"]["page"], 1);
    assert_eq!(view["page"]["pageSize"], 9);
    assert_eq!(view["likedContentIds"], json!([id]));

    let uploaded_at: Vec<String> = view["page"]["items"]
        .as_array()
        .expect("items")
        .iter()
        .map(|item| item["uploadedAt"].as_str().expect("uploadedAt").to_string())
        .collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> = uploaded_at
        .iter()
        .map(|s| s.parse().expect("timestamp"))
        .collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]));

    let anonymous = dashboard(app, "", None).await;
    assert_eq!(anonymous["likedContentIds"], json!([]));

    let res = send(app, get("/", None)).await;
    expect_status(res, StatusCode::OK).await;
}
