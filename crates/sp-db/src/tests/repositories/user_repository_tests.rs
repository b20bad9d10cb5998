use super::setup_db;
use crate::UserRepository;

#[tokio::test]
async fn given_created_user_when_found_by_id_then_fields_round_trip() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    let created = repo
        .create("Ana", "ana@x.com", "phc-string")
        .await
        .unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.role, "user");
    assert!(!found.is_blocked);
}

#[tokio::test]
async fn given_duplicate_email_when_created_then_unique_violation() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    repo.create("Ana", "ana@x.com", "phc").await.unwrap();
    let result = repo.create("Other Ana", "ana@x.com", "phc2").await;

    let err = result.unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn given_unknown_email_when_found_then_none() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    let found = repo.find_by_email("nobody@x.com").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_multiple_users_when_listed_then_ordered_by_id() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    repo.create("Ana", "ana@x.com", "p1").await.unwrap();
    repo.create("Bo", "bo@x.com", "p2").await.unwrap();

    let users = repo.find_all().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "ana@x.com");
    assert_eq!(users[1].email, "bo@x.com");
}

#[tokio::test]
async fn given_updated_user_when_found_then_changes_persisted() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    let mut user = repo.create("Ana", "ana@x.com", "p1").await.unwrap();
    user.role = "admin".to_string();
    user.is_blocked = true;

    assert!(repo.update(&user).await.unwrap());

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.role, "admin");
    assert!(found.is_blocked);
}

#[tokio::test]
async fn given_unknown_id_when_updated_then_returns_false() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    let mut user = repo.create("Ana", "ana@x.com", "p1").await.unwrap();
    user.id = 999;

    assert!(!repo.update(&user).await.unwrap());
}

#[tokio::test]
async fn given_deleted_user_when_found_then_none() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    let user = repo.create("Ana", "ana@x.com", "p1").await.unwrap();

    assert!(repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    assert!(!repo.delete(user.id).await.unwrap());
}
