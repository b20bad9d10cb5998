use super::setup_db;
use crate::RoleRepository;

use sp_core::Role;

#[tokio::test]
async fn given_created_role_when_found_by_id_then_round_trips() {
    let pool = setup_db().await;
    let repo = RoleRepository::new(pool);

    let created = repo.create("manager").await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
}

#[tokio::test]
async fn given_duplicate_name_when_created_then_unique_violation() {
    let pool = setup_db().await;
    let repo = RoleRepository::new(pool);

    repo.create("manager").await.unwrap();
    let result = repo.create("manager").await;

    assert!(result.unwrap_err().is_unique_violation());
}

#[tokio::test]
async fn given_roles_when_listed_then_ordered_by_id() {
    let pool = setup_db().await;
    let repo = RoleRepository::new(pool);

    repo.create("manager").await.unwrap();
    repo.create("analyst").await.unwrap();

    let roles = repo.find_all().await.unwrap();

    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].name, "manager");
    assert_eq!(roles[1].name, "analyst");
}

#[tokio::test]
async fn given_renamed_role_when_found_then_new_name() {
    let pool = setup_db().await;
    let repo = RoleRepository::new(pool);

    let role = repo.create("manager").await.unwrap();
    let renamed = Role {
        id: role.id,
        name: "lead".to_string(),
    };

    assert!(repo.update(&renamed).await.unwrap());
    assert_eq!(
        repo.find_by_id(role.id).await.unwrap().unwrap().name,
        "lead"
    );
}

#[tokio::test]
async fn given_unknown_id_when_updated_or_deleted_then_returns_false() {
    let pool = setup_db().await;
    let repo = RoleRepository::new(pool);

    let ghost = Role {
        id: 999,
        name: "ghost".to_string(),
    };

    assert!(!repo.update(&ghost).await.unwrap());
    assert!(!repo.delete(999).await.unwrap());
}

#[tokio::test]
async fn given_deleted_role_when_found_then_none() {
    let pool = setup_db().await;
    let repo = RoleRepository::new(pool);

    let role = repo.create("manager").await.unwrap();

    assert!(repo.delete(role.id).await.unwrap());
    assert!(repo.find_by_id(role.id).await.unwrap().is_none());
}
