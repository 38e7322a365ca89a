mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn plans_require_authentication(pool: PgPool) {
    let list = common::get(common::build_test_app(pool.clone()), "/api/v1/plans").await;
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);

    let create = common::post_json(
        common::build_test_app(pool),
        "/api/v1/plans",
        json!({ "name": "Leg Day", "description": "" }),
    )
    .await;
    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_fetch_plan(pool: PgPool) {
    let (token, user_id) = common::register_user(&pool, "ada@example.com").await;
    let id = common::create_plan(&pool, &token, "Leg Day").await;

    let response = common::get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["name"], "Leg Day");
    assert_eq!(json["user_id"].as_i64(), Some(user_id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_name_is_per_owner(pool: PgPool) {
    let (ada, _) = common::register_user(&pool, "ada@example.com").await;
    let (bob, _) = common::register_user(&pool, "bob@example.com").await;
    common::create_plan(&pool, &ada, "Leg Day").await;

    // Same owner, same name: conflict.
    let dup = common::post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/plans",
        &ada,
        json!({ "name": "Leg Day", "description": "" }),
    )
    .await;
    assert_eq!(dup.status(), StatusCode::CONFLICT);

    // Different owner, same name: fine.
    common::create_plan(&pool, &bob, "Leg Day").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_scoped_to_the_token_owner(pool: PgPool) {
    let (ada, _) = common::register_user(&pool, "ada@example.com").await;
    let (bob, _) = common::register_user(&pool, "bob@example.com").await;
    common::create_plan(&pool, &ada, "Leg Day").await;
    common::create_plan(&pool, &ada, "Push Day").await;
    common::create_plan(&pool, &bob, "Full Body").await;

    let response = common::get_auth(common::build_test_app(pool), "/api/v1/plans", &ada).await;
    let json = common::body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Leg Day"));
    assert!(!names.contains(&"Full Body"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_initial_exercises_assigns_positional_order(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let lunge = common::create_exercise(&pool, "Lunge").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;

    let created = common::post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/plans",
        &token,
        json!({
            "name": "Leg Day",
            "description": "squats first",
            "exercises": [
                { "exercise_id": squat, "sets": 5, "reps": 5, "weight": 100.0 },
                { "exercise_id": lunge },
            ],
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let plan_id = common::body_json(created).await["id"].as_i64().unwrap();

    let entries = common::get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
    )
    .await;
    let json = common::body_json(entries).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["exercise_id"].as_i64(), Some(squat));
    assert_eq!(entries[0]["order_number"], 1);
    assert_eq!(entries[0]["sets"], 5);

    // Omitted targets take the defaults.
    assert_eq!(entries[1]["exercise_id"].as_i64(), Some(lunge));
    assert_eq!(entries[1]["order_number"], 2);
    assert_eq!(entries[1]["sets"], 3);
    assert_eq!(entries[1]["reps"], 12);
    assert_eq!(entries[1]["weight"], 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_exercise_creates_nothing(pool: PgPool) {
    let (token, _) = common::register_user(&pool, "ada@example.com").await;

    let response = common::post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/plans",
        &token,
        json!({
            "name": "Leg Day",
            "description": "",
            "exercises": [{ "exercise_id": 9999 }],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Exercise"));

    // No half-seeded plan was left behind.
    let list = common::get_auth(common::build_test_app(pool), "/api/v1/plans", &token).await;
    assert!(common::body_json(list).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn append_computes_next_order_and_defaults(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let lunge = common::create_exercise(&pool, "Lunge").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    let first = common::post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
        json!({ "exercise_id": squat, "sets": 5, "reps": 3, "weight": 120.0 }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(common::body_json(first).await["order_number"], 1);

    let second = common::post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
        json!({ "exercise_id": lunge }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let json = common::body_json(second).await;
    assert_eq!(json["order_number"], 2);
    assert_eq!(json["sets"], 3);
    assert_eq!(json["reps"], 12);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn append_distinguishes_missing_plan_from_missing_exercise(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    let no_plan = common::post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/plans/9999/exercises",
        &token,
        json!({ "exercise_id": squat }),
    )
    .await;
    assert_eq!(no_plan.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(no_plan).await;
    assert!(json["error"].as_str().unwrap().contains("WorkoutPlan"));

    let no_exercise = common::post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
        json!({ "exercise_id": 9999 }),
    )
    .await;
    assert_eq!(no_exercise.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(no_exercise).await;
    assert!(json["error"].as_str().unwrap().contains("Exercise"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn entry_targets_are_validated(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    for bad in [
        json!({ "exercise_id": squat, "sets": 0 }),
        json!({ "exercise_id": squat, "reps": -1 }),
        json!({ "exercise_id": squat, "weight": -10.0 }),
    ] {
        let response = common::post_json_auth(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/plans/{plan_id}/exercises"),
            &token,
            bad,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn entry_can_be_updated_and_removed(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    let created = common::post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
        json!({ "exercise_id": squat }),
    )
    .await;
    let entry_id = common::body_json(created).await["id"].as_i64().unwrap();

    let updated = common::put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/workout-exercises/{entry_id}"),
        &token,
        json!({ "sets": 8, "reps": 8, "weight": 60.0, "order_number": 1 }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(common::body_json(updated).await["sets"], 8);

    let removed = common::delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/workout-exercises/{entry_id}"),
        &token,
    )
    .await;
    assert_eq!(removed.status(), StatusCode::OK);

    let entries = common::get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
    )
    .await;
    assert!(common::body_json(entries).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn explicit_order_create_and_flat_listing(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let lunge = common::create_exercise(&pool, "Lunge").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    // The flat surface takes an explicit order number instead of appending.
    for (exercise_id, order) in [(lunge, 2), (squat, 1)] {
        let response = common::post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/workout-exercises",
            &token,
            json!({
                "workout_plan_id": plan_id,
                "exercise_id": exercise_id,
                "sets": 4,
                "reps": 10,
                "order_number": order,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Listing by plan id returns execution order, not insertion order.
    let entries = common::get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/workout-exercises/{plan_id}"),
        &token,
    )
    .await;
    assert_eq!(entries.status(), StatusCode::OK);
    let json = common::body_json(entries).await;
    assert_eq!(json[0]["exercise_id"].as_i64(), Some(squat));
    assert_eq!(json[1]["exercise_id"].as_i64(), Some(lunge));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_and_describe_plan(pool: PgPool) {
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let id = common::create_plan(&pool, &token, "Leg Day").await;

    let response = common::put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{id}"),
        &token,
        json!({ "name": "Lower Body", "description": "quads and hamstrings" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["name"], "Lower Body");
    assert_eq!(json["description"], "quads and hamstrings");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_plan_and_entries(pool: PgPool) {
    let squat = common::create_exercise(&pool, "Squat").await;
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    common::post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/plans/{plan_id}/exercises"),
        &token,
        json!({ "exercise_id": squat }),
    )
    .await;

    let response = common::delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/plans/{plan_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await["message"],
        "Workout plan deleted"
    );

    let gone = common::get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/plans/{plan_id}"),
        &token,
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    // The exercise itself is unaffected and deletable again.
    let free = common::delete(
        common::build_test_app(pool),
        &format!("/api/v1/exercises/{squat}"),
    )
    .await;
    assert_eq!(free.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_blocked_while_completions_reference_the_plan(pool: PgPool) {
    let (token, _) = common::register_user(&pool, "ada@example.com").await;
    let plan_id = common::create_plan(&pool, &token, "Leg Day").await;

    let logged = common::post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/workout-logs",
        &token,
        json!({ "workout_plan_id": plan_id }),
    )
    .await;
    assert_eq!(logged.status(), StatusCode::CREATED);

    let blocked = common::delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/plans/{plan_id}"),
        &token,
    )
    .await;
    assert_eq!(blocked.status(), StatusCode::CONFLICT);

    let still_there = common::get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/plans/{plan_id}"),
        &token,
    )
    .await;
    assert_eq!(still_there.status(), StatusCode::OK);
}
