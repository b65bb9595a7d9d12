use infographic_catalog::storage::models::NewInfographic;
use infographic_catalog::storage::{Catalog, MemoryCatalog};

fn sample_payload(title: &str) -> NewInfographic {
    NewInfographic {
        title: title.to_string(),
        thumbnail_url: format!("/uploads/{title}.png"),
        page_url: format!("/uploads/{title}.pdf"),
        description: Some("A chart".to_string()),
        category: None,
        category_color: Some("#ff8800".to_string()),
    }
}

#[tokio::test]
async fn test_insert_assigns_id_and_timestamp() {
    let catalog = MemoryCatalog::new();
    let before = chrono::Utc::now();

    let record = catalog.insert(sample_payload("energy")).await.unwrap();

    assert!(record.id > 0);
    assert!(record.created_at >= before);
    assert_eq!(record.title, "energy");
    assert_eq!(record.thumbnail_url, "/uploads/energy.png");
    assert_eq!(record.page_url, "/uploads/energy.pdf");
    assert_eq!(record.description, Some("A chart".to_string()));
    assert_eq!(record.category, None);
    assert_eq!(record.category_color, Some("#ff8800".to_string()));
}

#[tokio::test]
async fn test_list_empty() {
    let catalog = MemoryCatalog::new();
    assert!(catalog.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_newest_first() {
    let catalog = MemoryCatalog::new();
    let first = catalog.insert(sample_payload("first")).await.unwrap();
    let second = catalog.insert(sample_payload("second")).await.unwrap();

    let listed = catalog.list().await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_delete() {
    let catalog = MemoryCatalog::new();
    let record = catalog.insert(sample_payload("doomed")).await.unwrap();

    assert!(catalog.delete(record.id).await.unwrap());
    assert!(catalog.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_not_found() {
    let catalog = MemoryCatalog::new();
    assert!(!catalog.delete(42).await.unwrap());

    let record = catalog.insert(sample_payload("once")).await.unwrap();
    assert!(catalog.delete(record.id).await.unwrap());
    assert!(!catalog.delete(record.id).await.unwrap());
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let catalog = MemoryCatalog::new();
    let first = catalog.insert(sample_payload("a")).await.unwrap();
    catalog.delete(first.id).await.unwrap();

    let second = catalog.insert(sample_payload("b")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let catalog = std::sync::Arc::new(MemoryCatalog::new());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let catalog = std::sync::Arc::clone(&catalog);
            tokio::spawn(async move {
                catalog
                    .insert(sample_payload(&format!("item-{i}")))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
    assert_eq!(catalog.list().await.unwrap().len(), 10);
}
