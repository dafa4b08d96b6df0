//! 部分更新（patch）语义
//!
//! 更新请求先转成 JSON 对象，去掉空值和“仅用于定位”的字段，剩下的才是真正要写入的变更。
//! 只包含定位字段的补丁不会产生任何变更。

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::errors::{MbtiError, Result};

/// 返回 `payload` 中不属于 `lookup_fields` 的字段，`null` 视为未提供
pub fn difference_set(payload: &Map<String, Value>, lookup_fields: &[&str]) -> Map<String, Value> {
    payload
        .iter()
        .filter(|(key, value)| !value.is_null() && !lookup_fields.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// 可按字段部分更新的请求体
pub trait PartialUpdate: Serialize + DeserializeOwned {
    /// 只用于定位或校验记录、不会被写入的字段
    const LOOKUP_FIELDS: &'static [&'static str];

    /// 提取真正需要写入的变更；没有变更时返回 `None`
    fn changes(&self) -> Result<Option<Self>> {
        let Value::Object(payload) = serde_json::to_value(self)? else {
            return Err(MbtiError::serialization(
                "partial update payload must serialize to a JSON object",
            ));
        };

        let remaining = difference_set(&payload, Self::LOOKUP_FIELDS);
        if remaining.is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(Value::Object(remaining))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answers::requests::UpdateAnswerRequest;
    use crate::models::courses::requests::UpdateCourseRequest;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::UpdateUserRequest;
    use serde_json::json;

    #[test]
    fn test_difference_set_drops_lookup_and_null_fields() {
        let payload = json!({
            "id": 7,
            "password": "secret",
            "email": "new@example.com",
            "role": null,
        });
        let Value::Object(payload) = payload else {
            unreachable!()
        };

        let remaining = difference_set(&payload, &["id", "password"]);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.get("email"), Some(&json!("new@example.com")));
    }

    #[test]
    fn test_lookup_only_user_patch_has_no_changes() {
        let update = UpdateUserRequest {
            password: Some("CurrentPass1".to_string()),
            ..Default::default()
        };
        assert!(update.changes().expect("serializable").is_none());
    }

    #[test]
    fn test_user_patch_keeps_non_lookup_fields() {
        let update = UpdateUserRequest {
            password: Some("CurrentPass1".to_string()),
            role: Some(UserRole::Admin),
            data_id: Some("result-7".to_string()),
            ..Default::default()
        };
        let changes = update
            .changes()
            .expect("serializable")
            .expect("has changes");

        assert!(changes.password.is_none());
        assert!(changes.email.is_none());
        assert_eq!(changes.role, Some(UserRole::Admin));
        assert_eq!(changes.data_id.as_deref(), Some("result-7"));
    }

    #[test]
    fn test_empty_patches_have_no_changes() {
        assert!(
            UpdateCourseRequest::default()
                .changes()
                .expect("serializable")
                .is_none()
        );
        assert!(
            UpdateAnswerRequest::default()
                .changes()
                .expect("serializable")
                .is_none()
        );
    }

    #[test]
    fn test_renamed_fields_survive_the_round_trip() {
        let update = UpdateAnswerRequest {
            answer_type: Some("EI".to_string()),
            ..Default::default()
        };
        let changes = update
            .changes()
            .expect("serializable")
            .expect("has changes");
        assert_eq!(changes.answer_type.as_deref(), Some("EI"));
        assert!(changes.contents.is_none());
    }
}
