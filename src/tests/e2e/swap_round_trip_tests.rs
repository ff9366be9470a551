// Full-stack scenarios through the HTTP router: propose, approve, list, and swap back.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::shift_swaps::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::shift_swaps::core::schedule::{
    DEFAULT_ABSENCE_PAYLOAD, ScheduleEntry, SchedulePayload, ScheduleStatus,
};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::roster::{
    A_SCHEDULE, B_SCHEDULE, DAY_1, DAY_2, EMPLOYEE_A, EMPLOYEE_B, MALAM, PAGI, STERILISASI,
    entry_by_id, entry_on, seeded_store,
};

#[fixture]
fn before_each(seeded_store: InMemoryRosterStore) -> (Arc<InMemoryRosterStore>, Router) {
    let store = Arc::new(seeded_store);
    let app = router(AppState::new(store.clone()));
    (store, app)
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    (user_id, role): (i64, &str),
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-id", user_id.to_string())
        .header("x-user-role", role)
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn propose_and_approve(
    app: &Router,
    requester: i64,
    target: i64,
    my_schedule: i64,
    target_schedule: i64,
) -> Value {
    let (status, proposed) = call(
        app,
        "POST",
        "/api/swaps",
        (requester, "staff"),
        Some(json!({
            "targetUserId": target,
            "myScheduleId": my_schedule,
            "targetScheduleId": target_schedule,
            "reason": "swap"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{proposed}");
    let id = proposed["data"]["id"].as_i64().unwrap();

    let (status, approved) = call(
        app,
        "PUT",
        &format!("/api/swaps/{id}/approve"),
        (90, "supervisor"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{approved}");
    approved
}

#[rstest]
#[tokio::test]
async fn it_should_settle_the_two_day_scenario_end_to_end(
    before_each: (Arc<InMemoryRosterStore>, Router),
) {
    let (store, app) = before_each;

    let approved = propose_and_approve(&app, EMPLOYEE_A, EMPLOYEE_B, A_SCHEDULE, B_SCHEDULE).await;
    assert_eq!(approved["data"]["status"], "approved");

    let rows = store.schedules().await;
    let ra1 = entry_by_id(&rows, A_SCHEDULE);
    assert_eq!(
        (ra1.payload.shift_id, ra1.payload.unit_id, ra1.payload.status),
        (None, None, ScheduleStatus::Leave)
    );
    let rb2 = entry_by_id(&rows, B_SCHEDULE);
    assert_eq!(
        (rb2.payload.shift_id, rb2.payload.unit_id, rb2.payload.status),
        (None, None, ScheduleStatus::Leave)
    );
    let b_day_1 = entry_on(&rows, EMPLOYEE_B, DAY_1).unwrap();
    assert_eq!((b_day_1.payload.shift_id, b_day_1.payload.unit_id), (Some(MALAM), None));
    let a_day_2 = entry_on(&rows, EMPLOYEE_A, DAY_2).unwrap();
    assert_eq!(
        (a_day_2.payload.shift_id, a_day_2.payload.unit_id),
        (Some(PAGI), Some(STERILISASI))
    );

    let (status, listed) = call(&app, "GET", "/api/swaps", (EMPLOYEE_B, "staff"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"][0]["status"], "approved");
    assert_eq!(listed["data"][0]["requesterDate"], "2026-01-05");
    assert_eq!(listed["data"][0]["targetShiftId"], Value::Null);
}

fn payload_on(rows: &[ScheduleEntry], employee_id: i64, date: NaiveDate) -> SchedulePayload {
    SchedulePayload::of_or_absent(entry_on(rows, employee_id, date))
}

#[rstest]
#[tokio::test]
async fn it_should_restore_every_payload_when_swapping_back(
    before_each: (Arc<InMemoryRosterStore>, Router),
) {
    let (store, app) = before_each;
    let original = store.schedules().await;
    let expected = [
        payload_on(&original, EMPLOYEE_A, DAY_1),
        payload_on(&original, EMPLOYEE_B, DAY_1),
        payload_on(&original, EMPLOYEE_A, DAY_2),
        payload_on(&original, EMPLOYEE_B, DAY_2),
    ];

    propose_and_approve(&app, EMPLOYEE_A, EMPLOYEE_B, A_SCHEDULE, B_SCHEDULE).await;
    let swapped = store.schedules().await;
    let b_day_1 = entry_on(&swapped, EMPLOYEE_B, DAY_1).unwrap().id;
    let a_day_2 = entry_on(&swapped, EMPLOYEE_A, DAY_2).unwrap().id;

    propose_and_approve(&app, EMPLOYEE_B, EMPLOYEE_A, b_day_1, a_day_2).await;

    let restored = store.schedules().await;
    let actual = [
        payload_on(&restored, EMPLOYEE_A, DAY_1),
        payload_on(&restored, EMPLOYEE_B, DAY_1),
        payload_on(&restored, EMPLOYEE_A, DAY_2),
        payload_on(&restored, EMPLOYEE_B, DAY_2),
    ];
    assert_eq!(actual, expected);
    assert_eq!(actual[1], DEFAULT_ABSENCE_PAYLOAD);
    assert_eq!(entry_by_id(&restored, A_SCHEDULE).payload, expected[0]);
    assert_eq!(entry_by_id(&restored, B_SCHEDULE).payload, expected[3]);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_a_rejected_request_out_of_the_roster(
    before_each: (Arc<InMemoryRosterStore>, Router),
) {
    let (store, app) = before_each;
    let before = store.schedules().await;
    let (_, proposed) = call(
        &app,
        "POST",
        "/api/swaps",
        (EMPLOYEE_A, "staff"),
        Some(json!({"targetUserId": EMPLOYEE_B, "myScheduleId": A_SCHEDULE, "targetScheduleId": B_SCHEDULE})),
    )
    .await;
    let id = proposed["data"]["id"].as_i64().unwrap();

    let (status, _) = call(&app, "PUT", &format!("/api/swaps/{id}/reject"), (90, "admin"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, again) = call(&app, "PUT", &format!("/api/swaps/{id}/approve"), (90, "admin"), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(again["message"], "swap request has already been processed");
    assert_eq!(store.schedules().await, before);
}
