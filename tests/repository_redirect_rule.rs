mod common;

use redirect_rules::domain::entities::{NewRedirectRule, RedirectRulePatch};
use redirect_rules::domain::repositories::{IDENTIFIER_CONSTRAINT, RedirectRuleRepository};
use redirect_rules::error::AppError;
use redirect_rules::infrastructure::persistence::PgRedirectRuleRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_rule(identifier: &str, owner_id: Option<i64>) -> NewRedirectRule {
    NewRedirectRule {
        id: Uuid::new_v4(),
        redirect_url: "https://example.com".to_string(),
        is_private: false,
        redirect_identifier: identifier.to_string(),
        owner_id,
    }
}

#[sqlx::test]
async fn test_create_rule(pool: PgPool) {
    let user_id = common::create_user(&pool, "alice", "pw").await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    let input = new_rule("createRule", Some(user_id));
    let id = input.id;
    let rule = repo.create(input).await.unwrap();

    assert_eq!(rule.id, id);
    assert_eq!(rule.redirect_identifier, "createRule");
    assert_eq!(rule.owner_id, Some(user_id));
    assert_eq!(rule.owner.unwrap().username, "alice");
    assert_eq!(rule.created_at, rule.modified_at);
}

#[sqlx::test]
async fn test_create_duplicate_identifier_is_conflict(pool: PgPool) {
    let user_id = common::create_user(&pool, "alice", "pw").await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    repo.create(new_rule("dupIdent01", Some(user_id)))
        .await
        .unwrap();

    let err = repo
        .create(new_rule("dupIdent01", Some(user_id)))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
    assert!(err.is_conflict_on(IDENTIFIER_CONSTRAINT));
}

#[sqlx::test]
async fn test_find_by_id_scoped_to_owner(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    let bob = common::create_user(&pool, "bob", "pw").await;
    let id = common::create_test_rule(&pool, "scopedRule", "https://a.com", false, Some(alice)).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(id, alice).await.unwrap().is_some());
    assert!(repo.find_by_id(id, bob).await.unwrap().is_none());
    assert!(repo.find_by_id(Uuid::new_v4(), alice).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_identifier_unscoped(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    common::create_test_rule(&pool, "privIdent1", "https://a.com", true, Some(alice)).await;
    common::create_test_rule(&pool, "noOwner001", "https://b.com", false, None).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    let private = repo.find_by_identifier("privIdent1").await.unwrap().unwrap();
    assert!(private.is_private);
    assert_eq!(private.owner.unwrap().username, "alice");

    let ownerless = repo.find_by_identifier("noOwner001").await.unwrap().unwrap();
    assert!(ownerless.owner_id.is_none());
    assert!(ownerless.owner.is_none());

    assert!(repo.find_by_identifier("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_by_owner(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    let bob = common::create_user(&pool, "bob", "pw").await;
    common::create_test_rule(&pool, "listRule01", "https://a.com", false, Some(alice)).await;
    common::create_test_rule(&pool, "listRule02", "https://a.com", true, Some(alice)).await;
    common::create_test_rule(&pool, "listRule03", "https://b.com", false, Some(bob)).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    let rules = repo.list_by_owner(alice).await.unwrap();

    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| r.owner_id == Some(alice)));
}

#[sqlx::test]
async fn test_update_partial(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    let id = common::create_test_rule(&pool, "updateRule", "https://old.com", false, Some(alice)).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    let patch = RedirectRulePatch {
        redirect_url: None,
        is_private: Some(true),
    };
    let rule = repo.update(id, alice, patch).await.unwrap().unwrap();

    assert!(rule.is_private);
    assert_eq!(rule.redirect_url, "https://old.com");
    assert_eq!(rule.redirect_identifier, "updateRule");
    assert!(rule.modified_at > rule.created_at);
}

#[sqlx::test]
async fn test_update_empty_patch_refreshes_modified_at(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    let id = common::create_test_rule(&pool, "touchRule1", "https://a.com", true, Some(alice)).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    let rule = repo
        .update(id, alice, RedirectRulePatch::default())
        .await
        .unwrap()
        .unwrap();

    assert!(rule.is_private);
    assert_eq!(rule.redirect_url, "https://a.com");
    assert!(rule.modified_at > rule.created_at);
}

#[sqlx::test]
async fn test_update_foreign_rule(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    let bob = common::create_user(&pool, "bob", "pw").await;
    let id = common::create_test_rule(&pool, "foreignUpd", "https://a.com", false, Some(alice)).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    let patch = RedirectRulePatch {
        redirect_url: Some("https://evil.com".to_string()),
        is_private: None,
    };

    assert!(repo.update(id, bob, patch).await.unwrap().is_none());

    let unchanged = repo.find_by_id(id, alice).await.unwrap().unwrap();
    assert_eq!(unchanged.redirect_url, "https://a.com");
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    let bob = common::create_user(&pool, "bob", "pw").await;
    let id = common::create_test_rule(&pool, "deleteRule", "https://a.com", false, Some(alice)).await;
    let repo = PgRedirectRuleRepository::new(Arc::new(pool));

    assert!(!repo.delete(id, bob).await.unwrap());
    assert!(repo.delete(id, alice).await.unwrap());
    assert!(!repo.delete(id, alice).await.unwrap());
    assert!(repo.find_by_identifier("deleteRule").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_deleting_user_cascades_to_rules(pool: PgPool) {
    let alice = common::create_user(&pool, "alice", "pw").await;
    common::create_test_rule(&pool, "cascadeR01", "https://a.com", false, Some(alice)).await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(alice)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(common::count_rules(&pool).await, 0);
}
