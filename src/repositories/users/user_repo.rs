//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티를 검증하고 저장하는 데이터 액세스 계층입니다.
//! 연결은 전역 상태가 아니라 생성 시 전달받은 [`DocumentStore`] 참조를 사용합니다.
//!
//! ## 저장 단계
//!
//! 1. 상태 확인: `Unsaved` 인스턴스만 저장 가능
//! 2. 스키마 검증: 필수 필드/타입 확인, 선언되지 않은 필드 제외
//! 3. `created_at` 기록 후 문서 하나 추가 (upsert 없음)
//! 4. 저장소가 부여한 `_id`를 붙여 [`User`] 반환

use log::{error, info, warn};
use mongodb::bson::{self, DateTime, Document};
use crate::db::DocumentStore;
use crate::domain::entities::users::user::{NewUser, User, UserState};
use crate::errors::PersistError;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **ValidationFailed**: 필수 필드 누락, 잘못된 타입 (아무것도 기록되지 않음)
/// - **StoreRejected**: 저장소가 쓰기를 거부 (중복 키 등)
/// - **StoreUnavailable**: 쓰기 도중 연결 문제
/// - **InvalidState**: 이미 `Saved`/`Rejected`인 인스턴스
///
/// 재시도는 하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::users::user_repo::UserRepository;
/// use crate::domain::entities::users::user::NewUser;
///
/// let repo = UserRepository::new(&database);
/// let mut user = NewUser::new("Sanvika", "sanvika@example.com");
/// let saved = repo.persist(&mut user).await?;
/// println!("새 사용자 ID: {}", saved.id_string());
/// ```
pub struct UserRepository<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> UserRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// 연결된 컬렉션 이름
    pub fn collection_name(&self) -> &'static str {
        User::schema().collection
    }

    /// 사용자 인스턴스를 검증하고 새 문서로 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (`_id`, `created_at` 포함)
    /// * `Err(PersistError)` - 검증 실패, 저장소 거부 등
    ///
    /// 성공하면 `user`는 `Saved` 상태가 되고 `user.id()`로 ID를 확인할 수 있습니다.
    /// 실패하면 `Rejected` 상태가 되며, 재시도하려면 새 인스턴스를 만들어야 합니다.
    pub async fn persist(&self, user: &mut NewUser) -> Result<User, PersistError> {
        if user.state() != UserState::Unsaved {
            return Err(PersistError::InvalidState(user.state()));
        }

        user.begin_validation();

        match self.validate_and_insert(user.fields()).await {
            Ok(saved) => {
                user.mark_saved(saved.id);
                info!("💾 사용자 저장 완료: {} ({})", saved.id_string(), self.collection_name());
                Ok(saved)
            }
            Err(e) => {
                user.mark_rejected();
                match &e {
                    PersistError::ValidationFailed(failure) => warn!("⚠️ 사용자 검증 실패: {}", failure),
                    other => error!("❌ 사용자 저장 실패: {}", other),
                }
                Err(e)
            }
        }
    }

    async fn validate_and_insert(&self, fields: &Document) -> Result<User, PersistError> {
        let schema = User::schema();

        let mut document = schema.validate(fields)?;
        document.insert("created_at", DateTime::now());

        let inserted_id = self
            .store
            .insert_document(schema.collection, document.clone())
            .await?;

        let id = inserted_id.as_object_id().ok_or_else(|| {
            PersistError::Internal(format!("저장소가 ObjectId가 아닌 _id를 반환했습니다: {}", inserted_id))
        })?;
        document.insert("_id", id);

        bson::from_document(document).map_err(|e| PersistError::Internal(e.to_string()))
    }
}
