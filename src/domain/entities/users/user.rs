//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장 전 인스턴스([`NewUser`])와 저장된 문서([`User`])를 분리하여,
//! 스키마 검증을 저장 시점의 명시적인 단계로 다룹니다.

use std::fmt;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use serde::{Deserialize, Serialize};
use crate::domain::schema::{FieldSpec, FieldType, Schema};

/// `users` 컬렉션 스키마
///
/// - `name`: 필수 텍스트
/// - `email`: 필수 텍스트 (유일해야 하지만 이 계층에서 강제하지 않음)
const USER_SCHEMA: Schema = Schema::new(
    "users",
    &[
        FieldSpec::required("name", FieldType::Text),
        FieldSpec::required("email", FieldType::Text),
    ],
);

/// 저장된 사용자 문서
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다.
/// 저장소가 부여한 `_id`와 저장 시각을 포함합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// 저장 시각
    pub created_at: DateTime,
}

impl User {
    /// `users` 컬렉션의 스키마를 반환합니다.
    pub fn schema() -> &'static Schema {
        &USER_SCHEMA
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// 저장 전 인스턴스의 상태
///
/// `Unsaved → Validating → {Saved | Rejected}`
/// `Saved`와 `Rejected`는 종료 상태이며, 다시 저장하려면 새 인스턴스를 만들어야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserState {
    Unsaved,
    Validating,
    Saved,
    Rejected,
}

impl UserState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UserState::Saved | UserState::Rejected)
    }
}

impl fmt::Display for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserState::Unsaved => "unsaved",
            UserState::Validating => "validating",
            UserState::Saved => "saved",
            UserState::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// 아직 저장되지 않은 사용자 인스턴스
///
/// 필드 이름 → 리터럴 값 매핑을 그대로 보관하며, 생성 시점에는 검증하지 않습니다.
/// 검증과 저장은 `UserRepository::persist`에서 한 번에 수행됩니다.
///
/// ```rust,ignore
/// let mut user = NewUser::new("Sanvika", "sanvika@example.com");
/// let saved = repo.persist(&mut user).await?;
/// assert_eq!(user.state(), UserState::Saved);
/// assert_eq!(user.id(), Some(saved.id));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    fields: Document,
    state: UserState,
    id: Option<ObjectId>,
}

impl NewUser {
    /// 필드 매핑으로 인스턴스를 만듭니다. I/O도, 검증도 하지 않습니다.
    pub fn construct(fields: Document) -> Self {
        Self {
            fields,
            state: UserState::Unsaved,
            id: None,
        }
    }

    /// 텍스트 리터럴 `name`, `email`로 인스턴스를 만듭니다.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::construct(doc! {
            "name": name.into(),
            "email": email.into(),
        })
    }

    pub fn fields(&self) -> &Document {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Bson> {
        self.fields.get(name)
    }

    pub fn state(&self) -> UserState {
        self.state
    }

    /// 저장 성공 후 저장소가 부여한 ID
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    pub(crate) fn begin_validation(&mut self) {
        self.state = UserState::Validating;
    }

    pub(crate) fn mark_saved(&mut self, id: ObjectId) {
        self.id = Some(id);
        self.state = UserState::Saved;
    }

    pub(crate) fn mark_rejected(&mut self) {
        self.state = UserState::Rejected;
    }
}
