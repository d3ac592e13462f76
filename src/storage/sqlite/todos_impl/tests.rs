use super::*;

use crate::storage::test_util::TestStorageBuilder;

#[tokio::test]
async fn insert_assigns_ascending_ids_and_equal_timestamps() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let first = storage.insert("first", "").await.unwrap();
    let second = storage.insert("second", "with description").await.unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.created_at, first.updated_at);
    assert_eq!(second.subject, "second");
    assert_eq!(second.description, "with description");
}

#[tokio::test]
async fn insert_empty_subject_hits_check_constraint() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let result = storage.insert("", "description").await;
    assert!(matches!(result, Err(StorageError::Constraint(_))));

    let rows = storage.page(None, 10).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn page_orders_descending_without_overlap_or_gap() {
    let storage = TestStorageBuilder::new().with_todos(7).build_todo().await;

    let all = storage.page(None, 7).await.unwrap();
    assert_eq!(all.len(), 7);
    assert!(all.windows(2).all(|w| w[0].id > w[1].id));

    let first = storage.page(None, 3).await.unwrap();
    let second = storage
        .page(Some(first.last().unwrap().id), 3)
        .await
        .unwrap();
    let third = storage
        .page(Some(second.last().unwrap().id), 3)
        .await
        .unwrap();

    let walked: Vec<_> = first
        .iter()
        .chain(&second)
        .chain(&third)
        .map(|t| t.id)
        .collect();
    let expected: Vec<_> = all.iter().map(|t| t.id).collect();
    assert_eq!(walked, expected);
}

#[tokio::test]
async fn page_past_the_oldest_row_is_empty() {
    let storage = TestStorageBuilder::new().with_todos(2).build_todo().await;

    let all = storage.page(None, 10).await.unwrap();
    let oldest = all.last().unwrap().id;

    let rows = storage.page(Some(oldest), 10).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn update_refreshes_updated_at_only() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let todo = storage.insert("before", "old").await.unwrap();

    // updated_at has millisecond precision; make sure the clock moves
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let updated = storage.update(todo.id, "after", "new").await.unwrap();

    assert_eq!(updated.id, todo.id);
    assert_eq!(updated.subject, "after");
    assert_eq!(updated.description, "new");
    assert_eq!(updated.created_at, todo.created_at);
    assert!(updated.updated_at > todo.updated_at);

    let rows = storage.page(None, 10).await.unwrap();
    assert_eq!(rows, vec![updated]);
}

#[tokio::test]
async fn update_missing_row_is_not_found() {
    let storage = TestStorageBuilder::new().with_todos(1).build_todo().await;

    let result = storage.update(999_999, "subject", "").await;
    assert!(matches!(result, Err(StorageError::NotFound)));

    let rows = storage.page(None, 10).await.unwrap();
    assert_eq!(rows[0].subject, "todo 0");
}

#[tokio::test]
async fn delete_batch_tolerates_missing_and_duplicate_ids() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let keep = storage.insert("keep", "").await.unwrap();
    let gone_one = storage.insert("gone one", "").await.unwrap();
    let gone_two = storage.insert("gone two", "").await.unwrap();

    let ids = vec![gone_one.id, gone_two.id, gone_two.id, 999_999];
    storage.delete_batch(&ids).await.unwrap();

    let rows = storage.page(None, 10).await.unwrap();
    assert_eq!(rows, vec![keep]);

    // second pass over the same set removes nothing and still succeeds
    storage.delete_batch(&ids).await.unwrap();

    let rows = storage.page(None, 10).await.unwrap();
    assert_eq!(rows.len(), 1);
}
