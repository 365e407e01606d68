//! 터미널 출력 포맷팅 유틸리티
//!
//! 저장 결과를 사람이 읽을 수 있는 한 줄로 출력합니다.
//! 이 출력은 저장 계약의 일부가 아니며, 로그와 별개로 stdout에 씁니다.

use mongodb::bson::doc;
use crate::domain::entities::users::user::User;

/// 저장된 사용자를 한 줄로 포맷합니다
///
/// 문서는 BSON 표시 형식으로 출력됩니다.
///
/// Output:
/// ```text
/// 👤 User saved: { "_id": ObjectId("6523f0..."), "name": "Sanvika", "email": "sanvika@example.com", "created_at": DateTime("2026-10-19 ...") }
/// ```
pub fn format_saved_user(user: &User) -> String {
    let document = doc! {
        "_id": user.id,
        "name": user.name.clone(),
        "email": user.email.clone(),
        "created_at": user.created_at,
    };

    format!("👤 User saved: {}", document)
}

/// 저장된 사용자를 stdout에 한 줄로 출력합니다
pub fn print_saved_user(user: &User) {
    println!("{}", format_saved_user(user));
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};

    #[test]
    fn test_format_saved_user_is_single_line_with_fields() {
        let user = User {
            id: ObjectId::new(),
            name: "Sanvika".to_string(),
            email: "sanvika@example.com".to_string(),
            created_at: DateTime::now(),
        };

        let line = format_saved_user(&user);

        assert!(line.starts_with("👤 User saved: "));
        assert!(line.contains("Sanvika"));
        assert!(line.contains("sanvika@example.com"));
        assert!(line.contains(&user.id_string()));
        assert!(!line.contains('\n'));
    }
}
