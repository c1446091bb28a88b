use crate::*;
use std::sync::Arc;
use uuid::Uuid;

// ========== Validation ==========

#[test]
fn test_validate_word_trims() {
    assert_eq!(validate_word("  crane ").unwrap(), "crane");
}

#[test]
fn test_validate_word_empty() {
    assert!(matches!(validate_word("   "), Err(StoreError::InvalidWord(_))));
}

#[test]
fn test_validate_word_too_long() {
    let long = "a".repeat(MAX_WORD_CHARS + 1);
    let err = validate_word(&long).unwrap_err();
    assert!(err.to_string().contains("at most 20"));
    assert!(validate_word(&"a".repeat(MAX_WORD_CHARS)).is_ok());
}

#[test]
fn test_validate_word_counts_characters() {
    assert!(validate_word(&"é".repeat(MAX_WORD_CHARS)).is_ok());
}

// ========== Memory Store ==========

#[tokio::test]
async fn test_memory_create_and_get() {
    let store = MemoryGameStore::new();
    store.init().await.unwrap();
    let game = store.create("crane").await.unwrap();
    assert_eq!(game.word, "crane");
    assert_eq!(store.get(game.id).await.unwrap(), Some(game));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_memory_get_missing() {
    let store = MemoryGameStore::new();
    assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_memory_rejects_invalid_word() {
    let store = MemoryGameStore::new();
    assert!(store.create("").await.is_err());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_memory_distinct_ids() {
    let store = MemoryGameStore::new();
    let a = store.create("crane").await.unwrap();
    let b = store.create("crane").await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_store_behind_trait_object() {
    let store: Arc<dyn GameStore> = Arc::new(MemoryGameStore::new());
    assert_eq!(store.backend(), "memory");
    let game = store.create("slate").await.unwrap();
    let fetched = store.get(game.id).await.unwrap().unwrap();
    assert_eq!(fetched.word, "slate");
}

#[tokio::test]
async fn test_memory_concurrent_creates() {
    let store = Arc::new(MemoryGameStore::new());
    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create(&format!("word{i}")).await.unwrap()
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(store.len(), 32);
}
