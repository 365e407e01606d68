//! # 문서 스키마
//!
//! 엔티티가 저장되기 전에 만족해야 하는 문서 형태(필드 이름, 타입)를
//! 선언하고, BSON 문서를 그 형태에 맞춰 검증합니다.
//!
//! 검증은 I/O 없이 동작하므로 저장소 없이 단위 테스트할 수 있습니다.
//!
//! ## 검증 규칙
//!
//! - 선언된 필드는 모두 필수이며, 선언 순서대로 검사해 첫 번째 실패를 반환합니다.
//! - 필드가 없거나 `null`이면 `Missing`
//! - 텍스트 필드가 빈 문자열(`""`)이면 `Missing`. 공백 문자열은 값으로 인정합니다.
//! - 선언된 타입과 다른 값이면 `WrongType`
//! - 선언되지 않은 필드는 결과 문서에서 제외됩니다 (strict 모드)
//!
//! ```rust,ignore
//! const POST_SCHEMA: Schema = Schema::new("posts", &[
//!     FieldSpec::required("title", FieldType::Text),
//! ]);
//!
//! let document = POST_SCHEMA.validate(&doc! { "title": "hello" })?;
//! ```

use log::debug;
use mongodb::bson::{Bson, Document};
use crate::errors::ValidationFailure;

/// 스키마가 허용하는 필드 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
}

impl FieldType {
    /// 값이 이 타입에 해당하는지 확인합니다. 타입 변환(cast)은 하지 않습니다.
    pub fn matches(&self, value: &Bson) -> bool {
        match self {
            FieldType::Text => matches!(value, Bson::String(_)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
        }
    }
}

/// 필수 필드 하나의 선언
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }
}

/// 컬렉션 하나에 저장되는 문서의 선언된 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(collection: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { collection, fields }
    }

    /// 필드가 스키마에 선언되어 있는지 확인합니다.
    pub fn declares(&self, field: &str) -> bool {
        self.fields.iter().any(|spec| spec.name == field)
    }

    /// 문서를 검증하고, 선언된 필드만 남긴 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Document)` - 선언 순서대로 정렬된, 선언된 필드만 포함한 문서
    /// * `Err(ValidationFailure)` - 첫 번째로 실패한 필드와 이유
    pub fn validate(&self, fields: &Document) -> Result<Document, ValidationFailure> {
        let mut projected = Document::new();

        for spec in self.fields {
            let value = match fields.get(spec.name) {
                None | Some(Bson::Null) | Some(Bson::Undefined) => {
                    return Err(ValidationFailure::missing(spec.name));
                }
                Some(value) => value,
            };

            if !spec.field_type.matches(value) {
                return Err(ValidationFailure::wrong_type(
                    spec.name,
                    spec.field_type.name(),
                    bson_type_name(value),
                ));
            }

            // 빈 문자열만 누락으로 본다. 공백은 그대로 저장
            if let Bson::String(text) = value {
                if text.is_empty() {
                    return Err(ValidationFailure::missing(spec.name));
                }
            }

            projected.insert(spec.name, value.clone());
        }

        for key in fields.keys().filter(|key| !self.declares(key)) {
            debug!("스키마에 없는 필드 제외: {}.{}", self.collection, key);
        }

        Ok(projected)
    }
}

/// 에러 메시지용 BSON 타입 이름 (예: `Int32`, `Boolean`)
fn bson_type_name(value: &Bson) -> String {
    format!("{:?}", value.element_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use crate::errors::ValidationKind;

    const SAMPLE: Schema = Schema::new(
        "samples",
        &[
            FieldSpec::required("title", FieldType::Text),
            FieldSpec::required("body", FieldType::Text),
        ],
    );

    #[test]
    fn test_field_type_matches_without_casting() {
        assert!(FieldType::Text.matches(&Bson::String("a".to_string())));
        assert!(!FieldType::Text.matches(&Bson::Int32(1)));
        assert!(!FieldType::Text.matches(&Bson::Boolean(true)));
        assert!(!FieldType::Text.matches(&Bson::Null));
    }

    #[test]
    fn test_validate_projects_declared_fields() {
        let validated = SAMPLE
            .validate(&doc! { "extra": 1, "body": "world", "title": "hello" })
            .unwrap();

        assert_eq!(validated, doc! { "title": "hello", "body": "world" });
    }

    #[test]
    fn test_required_field_missing() {
        let failure = SAMPLE.validate(&doc! { "body": "b" }).unwrap_err();
        assert_eq!(failure, ValidationFailure::missing("title"));

        let failure = SAMPLE.validate(&doc! { "title": Bson::Null, "body": "b" }).unwrap_err();
        assert_eq!(failure.kind, ValidationKind::Missing);
    }

    #[test]
    fn test_first_failure_in_declaration_order() {
        let failure = SAMPLE.validate(&doc! {}).unwrap_err();
        assert_eq!(failure.field, "title");

        let failure = SAMPLE.validate(&doc! { "title": "t" }).unwrap_err();
        assert_eq!(failure, ValidationFailure::missing("body"));
    }

    #[test]
    fn test_empty_text_is_missing_but_whitespace_is_kept() {
        let failure = SAMPLE.validate(&doc! { "title": "", "body": "b" }).unwrap_err();
        assert_eq!(failure, ValidationFailure::missing("title"));

        let validated = SAMPLE.validate(&doc! { "title": " \t", "body": "b" }).unwrap();
        assert_eq!(validated.get_str("title").unwrap(), " \t");
    }

    #[test]
    fn test_wrong_type_names_field_and_types() {
        let failure = SAMPLE.validate(&doc! { "title": "t", "body": 42 }).unwrap_err();

        assert_eq!(failure.field, "body");
        assert_eq!(
            failure.kind,
            ValidationKind::WrongType {
                expected: "text",
                found: "Int32".to_string(),
            }
        );
    }

    #[test]
    fn test_declares() {
        assert!(SAMPLE.declares("title"));
        assert!(!SAMPLE.declares("_id"));
    }
}
