mod common;

use campus_food::db::{DbConnection, RepositoryError, UserOperations};
use campus_food::test_utils::{insert_user, TEST_USER_CAMPUS_ID, TEST_USER_EMAIL, TEST_USER_NAME};

#[test]
fn get_user_by_credentials_success() {
    let (pool, fixtures, _guard) = common::setup_pool_with_fixtures();
    let user_ops = UserOperations::new(pool);

    let user = user_ops
        .get_user_by_credentials(TEST_USER_EMAIL, TEST_USER_CAMPUS_ID)
        .expect("user should be found");
    assert_eq!(user.id, fixtures.user_id);
    assert_eq!(user.name, TEST_USER_NAME);
}

#[test]
fn get_user_by_credentials_normalizes_email() {
    let (pool, fixtures, _guard) = common::setup_pool_with_fixtures();
    let user_ops = UserOperations::new(pool);

    let user = user_ops
        .get_user_by_credentials(" User1@Campus.EDU ", TEST_USER_CAMPUS_ID)
        .expect("user should be found");
    assert_eq!(user.id, fixtures.user_id);
}

#[test]
fn get_user_by_credentials_requires_both_to_match() {
    let (pool, _fixtures, _guard) = common::setup_pool_with_fixtures();
    let user_ops = UserOperations::new(pool);

    let wrong_id = user_ops.get_user_by_credentials(TEST_USER_EMAIL, "0000000000");
    assert!(matches!(wrong_id, Err(RepositoryError::NotFound(_))));

    let wrong_email = user_ops.get_user_by_credentials("nobody@campus.edu", TEST_USER_CAMPUS_ID);
    assert!(matches!(wrong_email, Err(RepositoryError::NotFound(_))));
}

#[test]
fn seeded_mixed_case_email_matches_login() {
    let (pool, _guard) = common::setup_pool();
    let user_id = {
        let mut conn = DbConnection::new(&pool).expect("db connection");
        insert_user(conn.connection(), "Jordan Patel", "JPatel@Campus.edu", "1000000002")
            .expect("insert user")
    };
    let user_ops = UserOperations::new(pool);

    let user = user_ops
        .get_user_by_credentials("jpatel@campus.edu", "1000000002")
        .expect("user should be found");
    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "jpatel@campus.edu");
}

#[test]
fn duplicate_email_is_rejected() {
    let (pool, _guard) = common::setup_pool();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    insert_user(conn.connection(), "User One", "dup@campus.edu", "1")
        .expect("first insert should succeed");
    let result = insert_user(conn.connection(), "User Two", "dup@campus.edu", "2");
    assert!(result.is_err(), "inserting duplicate email should fail with DB error");
}
