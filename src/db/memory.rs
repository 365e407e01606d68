//! 메모리 기반 문서 저장소
//!
//! MongoDB 없이 리포지토리를 실행하기 위한 [`DocumentStore`] 구현체입니다.
//! `_id`가 없는 문서에는 MongoDB 드라이버와 같이 `ObjectId`를 부여하고,
//! 선택적으로 필드 단위 유니크 제약(중복 키 거부, 코드 11000)을 흉내냅니다.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use crate::db::DocumentStore;
use crate::errors::StoreError;

/// MongoDB 중복 키 에러 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 컬렉션별 문서를 메모리에 보관하는 [`DocumentStore`] 구현체
///
/// 저장된 문서는 프로세스 종료 시 사라집니다. 내부 `Mutex`로 보호되므로
/// `&self`로 여러 태스크에서 공유할 수 있습니다.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    /// (컬렉션, 필드) 유니크 제약 목록
    unique_fields: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬렉션의 필드에 유니크 제약을 추가합니다.
    pub fn with_unique_field(mut self, collection: &str, field: &str) -> Self {
        self.unique_fields.push((collection.to_string(), field.to_string()));
        self
    }

    /// 컬렉션에 저장된 문서의 복사본 (삽입 순서)
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .map(|collections| collections.get(collection).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.documents(collection).len()
    }

    fn check_unique(&self, collection: &str, existing: &[Document], document: &Document) -> Result<(), StoreError> {
        let fields = self
            .unique_fields
            .iter()
            .filter(|(name, _)| name == collection)
            .map(|(_, field)| field);

        for field in fields {
            let Some(value) = document.get(field) else { continue };

            if existing.iter().any(|stored| stored.get(field) == Some(value)) {
                return Err(StoreError::Rejected {
                    code: DUPLICATE_KEY_CODE,
                    message: format!(
                        "E11000 duplicate key error collection: {} index: {}_1 dup key: {{ {}: {} }}",
                        collection, field, field, value
                    ),
                });
            }
        }

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(&self, collection: &str, mut document: Document) -> Result<Bson, StoreError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;

        let stored = collections.entry(collection.to_string()).or_default();

        self.check_unique(collection, stored, &document)?;

        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };

        if stored.iter().any(|existing| existing.get("_id") == Some(&id)) {
            return Err(StoreError::Rejected {
                code: DUPLICATE_KEY_CODE,
                message: format!("E11000 duplicate key error collection: {} index: _id_", collection),
            });
        }

        stored.push(document);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_object_id() {
        let store = MemoryStore::new();

        let id = store.insert_document("items", doc! { "n": 1 }).await.unwrap();

        assert!(matches!(id, Bson::ObjectId(_)));
        let documents = store.documents("items");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].get("_id"), Some(&id));
    }

    #[tokio::test]
    async fn test_insert_keeps_given_id_and_rejects_duplicate_id() {
        let store = MemoryStore::new();
        let id = ObjectId::new();

        let returned = store.insert_document("items", doc! { "_id": id }).await.unwrap();
        assert_eq!(returned, Bson::ObjectId(id));

        let error = store.insert_document("items", doc! { "_id": id }).await.unwrap_err();
        assert!(matches!(error, StoreError::Rejected { code: DUPLICATE_KEY_CODE, .. }));
        assert_eq!(store.count("items"), 1);
    }

    #[tokio::test]
    async fn test_unique_field_is_scoped_to_collection() {
        let store = MemoryStore::new().with_unique_field("users", "email");

        store.insert_document("users", doc! { "email": "a@x" }).await.unwrap();
        store.insert_document("others", doc! { "email": "a@x" }).await.unwrap();

        let error = store.insert_document("users", doc! { "email": "a@x" }).await.unwrap_err();
        assert!(matches!(error, StoreError::Rejected { code: DUPLICATE_KEY_CODE, .. }));
        assert_eq!(store.count("users"), 1);
        assert_eq!(store.count("others"), 1);
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        assert!(MemoryStore::new().documents("nothing").is_empty());
    }
}
