//! Contact API Tests

use axum::http::StatusCode;
use chrono::{Datelike, Days, Local, NaiveDate};
use serde_json::{json, Value};

use contact_book::application::dto::ContactResponse;
use contact_book::config::Settings;

use crate::common::{contact_body, fake_contact_body, TestApp};

fn first_error_field(body: &Value) -> &str {
    body["errors"][0]["field"].as_str().unwrap_or_default()
}

/// `dd.mm.1992` for a date `offset` days from today. 1992 is a leap year so
/// a 29 February birthday stays valid.
fn birthday_in(offset: u64) -> String {
    let day = Local::now().date_naive() + Days::new(offset);
    format!("{:02}.{:02}.1992", day.day(), day.month())
}

mod create {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_create_contact_returns_stored_projection() {
        let app = TestApp::new();

        let response = app
            .server
            .post("/contacts/")
            .json(&json!({
                "first_name": "Taras",
                "last_name": "Shevchenko",
                "email": "taras@example.com",
                "phone_number": "+380441234567",
                "birthdate": "25.12.1990",
                "additional_info": "Poet"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 1);
        assert_eq!(body["first_name"], "Taras");
        assert_eq!(body["birthdate"], "1990-12-25");
        assert_eq!(body["additional_info"], "Poet");
        assert_eq!(app.contacts.len(), 1);
    }

    #[tokio::test]
    async fn test_create_contact_ids_increase() {
        let app = TestApp::new();

        let first = app.create_contact(&fake_contact_body()).await;
        let second = app.create_contact(&fake_contact_body()).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_contact_keeps_null_and_empty_additional_info_apart() {
        let app = TestApp::new();

        let mut without = contact_body("A", "B", "a@b.c", "01.01.2000");
        without.as_object_mut().unwrap().remove("additional_info");
        let mut empty = contact_body("C", "D", "c@d.e", "01.01.2000");
        empty["additional_info"] = json!("");

        let without = app.create_contact(&without).await;
        let empty = app.create_contact(&empty).await;

        assert_eq!(without.additional_info, None);
        assert_eq!(empty.additional_info, Some(String::new()));
    }

    #[tokio::test]
    async fn test_create_contact_rejects_impossible_date() {
        let app = TestApp::new();

        let response = app
            .server
            .post("/contacts/")
            .json(&contact_body("A", "B", "a@b.c", "31.02.2020"))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(first_error_field(&body), "birthdate");
        assert!(app.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_create_contact_rejects_iso_date() {
        let app = TestApp::new();

        let response = app
            .server
            .post("/contacts/")
            .json(&contact_body("A", "B", "a@b.c", "1990-12-25"))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&response.json()), "birthdate");
    }

    #[tokio::test]
    async fn test_create_contact_rejects_missing_field() {
        let app = TestApp::new();

        let mut body = contact_body("A", "B", "a@b.c", "01.01.2000");
        body.as_object_mut().unwrap().remove("email");

        let response = app.server.post("/contacts/").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&response.json()), "email");
    }

    #[tokio::test]
    async fn test_create_contact_rejects_empty_first_name() {
        let app = TestApp::new();

        let response = app
            .server
            .post("/contacts/")
            .json(&contact_body("", "B", "a@b.c", "01.01.2000"))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&response.json()), "first_name");
    }

    #[tokio::test]
    async fn test_create_contact_rejects_malformed_json() {
        let app = TestApp::new();

        let response = app
            .server
            .post("/contacts/")
            .text("{\"first_name\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], 10002);
    }
}

mod read {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_get_contact_returns_created_fields() {
        let app = TestApp::new();
        let created = app
            .create_contact(&contact_body("Lesya", "Ukrainka", "lesya@example.com", "25.02.1871"))
            .await;

        let response = app.server.get(&format!("/contacts/{}", created.id)).await;

        response.assert_status_ok();
        let fetched: ContactResponse = response.json();
        assert_eq!(fetched, created);
        assert_eq!(fetched.birthdate, NaiveDate::from_ymd_opt(1871, 2, 25).unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_contact_is_not_found() {
        let app = TestApp::new();

        let response = app.server.get("/contacts/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["code"], 10001);
        assert_eq!(body["message"], "Contact not found");
    }

    #[tokio::test]
    async fn test_get_contact_rejects_non_integer_id() {
        let app = TestApp::new();

        let response = app.server.get("/contacts/abc").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&response.json()), "contact_id");
    }

    #[tokio::test]
    async fn test_list_contacts_pages() {
        let app = TestApp::new();
        for _ in 0..5 {
            app.create_contact(&fake_contact_body()).await;
        }

        let all: Vec<ContactResponse> = app.server.get("/contacts/").await.json();
        assert_eq!(all.len(), 5);
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

        let limited: Vec<ContactResponse> = app
            .server
            .get("/contacts/")
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(limited.len(), 2);

        let skipped: Vec<ContactResponse> = app
            .server
            .get("/contacts/")
            .add_query_param("skip", 3)
            .await
            .json();
        assert_eq!(skipped.iter().map(|c| c.id).collect::<Vec<_>>(), vec![4, 5]);

        let zero: Vec<ContactResponse> = app
            .server
            .get("/contacts/")
            .add_query_param("limit", 0)
            .await
            .json();
        assert!(zero.is_empty());
    }

    #[tokio::test]
    async fn test_list_contacts_on_empty_storage() {
        let app = TestApp::new();

        let response = app.server.get("/contacts/").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<ContactResponse>>(), Vec::new());
    }

    #[tokio::test]
    async fn test_list_contacts_rejects_out_of_range_paging() {
        let app = TestApp::new();

        let over = app.server.get("/contacts/").add_query_param("limit", 101).await;
        over.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&over.json()), "limit");

        let negative = app.server.get("/contacts/").add_query_param("skip", -1).await;
        negative.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&negative.json()), "skip");

        let text = app.server.get("/contacts/").add_query_param("limit", "ten").await;
        text.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

mod update {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let app = TestApp::new();
        let created = app
            .create_contact(&contact_body("Ivan", "Franko", "ivan@example.com", "27.08.1856"))
            .await;

        let response = app
            .server
            .put(&format!("/contacts/{}", created.id))
            .json(&json!({
                "first_name": "Ivan",
                "last_name": "Franko",
                "email": "franko@example.com",
                "phone_number": "+380321234567",
                "birthdate": "28.08.1856",
                "additional_info": "Writer"
            }))
            .await;

        response.assert_status_ok();
        let updated: ContactResponse = response.json();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "franko@example.com");
        assert_eq!(updated.birthdate, NaiveDate::from_ymd_opt(1856, 8, 28).unwrap());

        let fetched: ContactResponse = app
            .server
            .get(&format!("/contacts/{}", created.id))
            .await
            .json();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_contact_leaves_storage_unchanged() {
        let app = TestApp::new();
        app.create_contact(&fake_contact_body()).await;
        let before: Vec<ContactResponse> = app.server.get("/contacts/").await.json();

        let response = app
            .server
            .put("/contacts/42")
            .json(&contact_body("X", "Y", "x@y.z", "01.01.2000"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let after: Vec<ContactResponse> = app.server.get("/contacts/").await.json();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let app = TestApp::new();

        let response = app
            .server
            .put("/contacts/42")
            .json(&contact_body("X", "Y", "x@y.z", "32.01.2000"))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

mod delete {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_delete_returns_removed_contact() {
        let app = TestApp::new();
        let created = app.create_contact(&fake_contact_body()).await;
        let path = format!("/contacts/{}", created.id);

        let response = app.server.delete(&path).await;

        response.assert_status_ok();
        assert_eq!(response.json::<ContactResponse>(), created);
        app.server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
        assert!(app.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_contact_is_not_found() {
        let app = TestApp::new();
        app.create_contact(&fake_contact_body()).await;

        let response = app.server.delete("/contacts/7").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(app.contacts.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let app = TestApp::new();
        let created = app.create_contact(&fake_contact_body()).await;
        let path = format!("/contacts/{}", created.id);

        app.server.delete(&path).await.assert_status_ok();
        app.server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    }
}

mod search {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_search_matches_names_and_email() {
        let app = TestApp::new();
        app.create_contact(&contact_body("Anna", "Smith", "anna@x.com", "01.01.1990"))
            .await;
        app.create_contact(&contact_body("John", "Doe", "jsmith@x.com", "01.01.1990"))
            .await;
        app.create_contact(&contact_body("Olha", "Bondar", "olha@x.com", "01.01.1990"))
            .await;

        let found: Vec<ContactResponse> = app
            .server
            .get("/contacts/search/")
            .add_query_param("query", "smith")
            .await
            .json();

        let ids: Vec<i64> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let app = TestApp::new();
        app.create_contact(&contact_body("Mykola", "Lysenko", "m@x.com", "01.01.1990"))
            .await;

        let found: Vec<ContactResponse> = app
            .server
            .get("/contacts/search/")
            .add_query_param("query", "MYKO")
            .await
            .json();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let app = TestApp::new();
        app.create_contact(&fake_contact_body()).await;

        let response = app
            .server
            .get("/contacts/search/")
            .add_query_param("query", "zzz-no-such-contact")
            .await;

        response.assert_status_ok();
        assert!(response.json::<Vec<ContactResponse>>().is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let app = TestApp::new();

        let response = app.server.get("/contacts/search/").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(first_error_field(&response.json()), "query");
    }
}

mod birthdays {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_upcoming_birthdays_use_window() {
        let app = TestApp::new();
        let soon = app
            .create_contact(&contact_body("Soon", "Party", "soon@x.com", &birthday_in(2)))
            .await;
        app.create_contact(&contact_body("Later", "Party", "later@x.com", &birthday_in(30)))
            .await;

        let response = app.server.get("/contacts/birthday/").await;

        response.assert_status_ok();
        let found: Vec<ContactResponse> = response.json();
        assert_eq!(found, vec![soon]);
    }

    #[tokio::test]
    async fn test_upcoming_birthdays_include_today_and_last_day() {
        let app = TestApp::new();
        app.create_contact(&contact_body("Today", "Party", "t@x.com", &birthday_in(0)))
            .await;
        app.create_contact(&contact_body("Edge", "Party", "e@x.com", &birthday_in(7)))
            .await;

        let found: Vec<ContactResponse> = app.server.get("/contacts/birthday/").await.json();

        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_upcoming_birthdays_respect_configured_window() {
        let mut settings = Settings::default();
        settings.contacts.birthday_window_days = 0;
        let app = TestApp::with_settings(settings);
        let today = app
            .create_contact(&contact_body("Today", "Party", "t@x.com", &birthday_in(0)))
            .await;
        app.create_contact(&contact_body("Tomorrow", "Party", "m@x.com", &birthday_in(1)))
            .await;

        let found: Vec<ContactResponse> = app.server.get("/contacts/birthday/").await.json();

        assert_eq!(found, vec![today]);
    }

    #[tokio::test]
    async fn test_upcoming_birthdays_on_empty_storage() {
        let app = TestApp::new();

        let response = app.server.get("/contacts/birthday/").await;

        response.assert_status_ok();
        assert!(response.json::<Vec<ContactResponse>>().is_empty());
    }
}
