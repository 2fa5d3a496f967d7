//! Integration tests for membership listing and active-workspace
//! resolution.

use sqlx::PgPool;

use kaizen_db::models::user::CreateUser;
use kaizen_db::models::workspace::CreateWorkspace;
use kaizen_db::repositories::{MembershipRepo, UserRepo, WorkspaceRepo};

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            display_name: email.split('@').next().unwrap().to_string(),
            password_hash: "$argon2id$test-hash".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_workspace(pool: &PgPool, owner_id: i64, name: &str) -> i64 {
    WorkspaceRepo::create_with_owner(pool, &CreateWorkspace { name: name.to_string() }, owner_id)
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_ordered_by_join_date(pool: PgPool) {
    let user = seed_user(&pool, "ada@example.com").await;
    let ws_a = seed_workspace(&pool, user, "First").await;
    let ws_b = seed_workspace(&pool, user, "Second").await;

    let memberships = MembershipRepo::list_for_user(&pool, user).await.unwrap();
    let ids: Vec<i64> = memberships.iter().map(|m| m.workspace_id).collect();
    assert_eq!(ids, vec![ws_a, ws_b]);
    assert_eq!(memberships[0].workspace_name, "First");
    assert_eq!(memberships[0].role, "owner");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resolve_active_defaults_to_earliest_joined(pool: PgPool) {
    let user = seed_user(&pool, "ada@example.com").await;
    let ws_a = seed_workspace(&pool, user, "First").await;
    let _ws_b = seed_workspace(&pool, user, "Second").await;

    // No stored preference yet.
    let active = MembershipRepo::resolve_active(&pool, user).await.unwrap().unwrap();
    assert_eq!(active.workspace_id, ws_a);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_active_switches_resolution(pool: PgPool) {
    let user = seed_user(&pool, "ada@example.com").await;
    let _ws_a = seed_workspace(&pool, user, "First").await;
    let ws_b = seed_workspace(&pool, user, "Second").await;

    assert!(UserRepo::set_active_workspace(&pool, user, ws_b).await.unwrap());

    let active = MembershipRepo::resolve_active(&pool, user).await.unwrap().unwrap();
    assert_eq!(active.workspace_id, ws_b);
    assert_eq!(active.workspace_name, "Second");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stale_preference_falls_back(pool: PgPool) {
    let user = seed_user(&pool, "ada@example.com").await;
    let other = seed_user(&pool, "grace@example.com").await;
    let ws_mine = seed_workspace(&pool, user, "Mine").await;
    let ws_theirs = seed_workspace(&pool, other, "Theirs").await;

    // Preference points at a workspace the user has no membership in
    // (e.g. removed after switching). The resolver must not leak it.
    sqlx::query("UPDATE users SET active_workspace_id = $2 WHERE id = $1")
        .bind(user)
        .bind(ws_theirs)
        .execute(&pool)
        .await
        .unwrap();

    let active = MembershipRepo::resolve_active(&pool, user).await.unwrap().unwrap();
    assert_eq!(active.workspace_id, ws_mine);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_no_memberships_resolves_to_none(pool: PgPool) {
    let user = seed_user(&pool, "ada@example.com").await;
    let active = MembershipRepo::resolve_active(&pool, user).await.unwrap();
    assert!(active.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_member_role_update_and_removal(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com").await;
    let member = seed_user(&pool, "member@example.com").await;
    let ws = seed_workspace(&pool, owner, "Acme").await;

    let membership = MembershipRepo::create(&pool, ws, member, "member").await.unwrap();

    let updated = MembershipRepo::update_role(&pool, membership.id, ws, "admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.role, "admin");

    // Scoping: updating through the wrong workspace id touches nothing.
    let wrong = MembershipRepo::update_role(&pool, membership.id, ws + 1, "owner")
        .await
        .unwrap();
    assert!(wrong.is_none());

    assert!(MembershipRepo::delete(&pool, membership.id, ws).await.unwrap());
    let gone = MembershipRepo::find_for_user_in_workspace(&pool, member, ws)
        .await
        .unwrap();
    assert!(gone.is_none());
}
