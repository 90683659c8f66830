//! # 패치 병합 엔진
//!
//! 부분 수정 요청([`UpdateUserRequest`])을 편집 가능한 전체 표현([`UserProfile`])에
//! 필드 단위로 병합합니다.
//!
//! ## 병합 규칙
//!
//! - 패치에 값이 있는 필드: 대상 값을 패치 값으로 덮어씀
//! - 패치에 값이 없는 필드: 대상 값을 그대로 유지
//! - ID: 병합 대상이 아님. 서비스가 조회 키로 받은 ID를 그대로 사용
//!
//! 필드 사이에 파생 관계가 없으므로 적용 순서는 결과에 영향을 주지 않습니다.
//! 선택 필드(`address`, `phone_number`)도 같은 규칙을 따르므로 패치로 값을 지울 수는 없습니다.
//!
//! ## Spring과의 비교
//!
//! | Spring (리플렉션 Patcher) | 이 모듈 |
//! |---------------------------|---------|
//! | `getDeclaredFields()` 순회 | 필드별 명시적 대입 |
//! | `IllegalAccessException` → "Error while applying patch" | 컴파일 타임 검사 |
//! | `UserDto` 전체를 in-place 변경 | 값을 받아 병합된 값을 반환 |

use mongodb::bson::oid::ObjectId;
use crate::{
    domain::{
        dto::users::request::UpdateUserRequest,
        entities::users::user::User,
        models::user_profile::UserProfile,
    },
    errors::{AppError, AppResult},
};

/// 패치를 대상에 병합한 결과를 반환합니다.
///
/// 빈 패치는 대상과 동일한 값을 돌려줍니다.
pub fn merge(mut target: UserProfile, patch: &UpdateUserRequest) -> UserProfile {
    assign(&mut target.email, &patch.email);
    assign(&mut target.first_name, &patch.first_name);
    assign(&mut target.last_name, &patch.last_name);
    assign(&mut target.birth_date, &patch.birth_date);
    assign_optional(&mut target.address, &patch.address);
    assign_optional(&mut target.phone_number, &patch.phone_number);
    target
}

/// 저장된 레코드를 ID와 편집 가능한 표현으로 나눕니다.
///
/// ID가 없는 레코드는 덮어쓸 대상을 특정할 수 없으므로 `MergeFailure`입니다.
pub fn project_for_edit(user: User) -> AppResult<(ObjectId, UserProfile)> {
    let id = user.id.ok_or_else(|| {
        AppError::MergeFailure("패치 적용 중 오류가 발생했습니다: 저장된 레코드에 ID가 없습니다".to_string())
    })?;

    Ok((id, UserProfile::from(user)))
}

fn assign<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

fn assign_optional<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}
