//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 생성, 부분 수정, 전체 교체, 조회, 삭제를 조율하는 비즈니스 로직입니다.
//! Spring Framework의 `UserServiceImpl`과 같은 역할을 수행합니다.
//!
//! ## 쓰기 파이프라인
//!
//! ```text
//! create_user  : 이메일 유일성 → 최소 나이 → save
//! patch_user   : find_by_id → 편집 표현 투영 → 병합 → 최소 나이(병합 결과) → save
//! put_user     : exists_by_id → 최소 나이 → save
//! ```
//!
//! 각 파이프라인은 선형이며, 어느 단계에서든 실패하면 `save` 전에 중단됩니다.
//! 재시도나 보상 로직은 없습니다.
//!
//! ## 동시성
//!
//! 서비스는 변경 불가능한 [`UserServiceConfig`]와 저장소 참조만 가지므로
//! 여러 워커에서 잠금 없이 공유할 수 있습니다. 같은 레코드에 대한 경쟁 쓰기의
//! 직렬화는 저장소가 담당하며, 마지막 `save`가 반영됩니다.
//!
//! ## 이메일 재검사
//!
//! 유일성 검사는 생성 경로에서만 수행합니다. 부분 수정이나 전체 교체로 이메일을
//! 바꾸면 다른 레코드와 중복될 수 있습니다.

use std::sync::Arc;
use chrono::NaiveDate;
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use crate::{
    config::UserServiceConfig,
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::UserResponse,
        },
        entities::users::user::User,
        models::{page::{Page, PageRequest}, user_profile::UserProfile},
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};
use super::{merge, rules};

/// 사용자 레코드 비즈니스 로직 서비스
///
/// # 에러 처리 전략
///
/// - **NotFound**: 대상 ID의 레코드가 없음
/// - **DuplicateEmail**: 생성 시 이메일 중복
/// - **UnderAge**: 최소 나이 미달
/// - **InvalidRange**: 범위 조회의 `from`이 `to`보다 늦음
/// - **ValidationError**: ID 형식 오류
/// - **MergeFailure**: 저장된 레코드를 편집 표현으로 투영할 수 없음
///
/// # 사용 예제
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(store, UserServiceConfig::from_env());
///
/// let id = service.create_user(request).await?;
/// service.patch_user(&id.to_hex(), UpdateUserRequest {
///     email: Some("b@x.com".to_string()),
///     ..Default::default()
/// }).await?;
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    config: UserServiceConfig,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, config: UserServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &UserServiceConfig {
        &self.config
    }

    /// 새 사용자 레코드를 생성하고 부여된 ID를 반환합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 유일성 검사 → `DuplicateEmail`
    /// 2. 최소 나이 검사 → `UnderAge`
    /// 3. 엔티티 변환 후 저장
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<ObjectId> {
        if let Err(e) = rules::ensure_email_available(self.store.as_ref(), &request.email).await {
            warn!("사용자 생성 거부 (이메일 중복): {}", request.email);
            return Err(e);
        }
        self.check_age(request.birth_date)?;

        let user = User::from_profile(None, UserProfile::from(request));
        let saved = self.store.save(user).await?;

        let id = saved.id.ok_or_else(|| {
            AppError::InternalError("저장소가 ID를 부여하지 않았습니다".to_string())
        })?;

        info!("사용자 생성 완료: {}", id);
        Ok(id)
    }

    /// 기존 레코드에 부분 수정을 적용합니다.
    ///
    /// 나이 검사는 병합된 생년월일로 수행하므로, 생년월일을 바꾸지 않는 패치도
    /// 기존 생년월일이 현재 기준을 만족해야 합니다.
    pub async fn patch_user(&self, id: &str, patch: UpdateUserRequest) -> AppResult<()> {
        let object_id = parse_user_id(id)?;
        if patch.is_empty() {
            debug!("빈 패치 요청: {}", object_id);
        }

        let existing = self.store
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let (_, profile) = merge::project_for_edit(existing)?;
        let merged = merge::merge(profile, &patch);

        self.check_age(merged.birth_date)?;

        self.store.save(User::from_profile(Some(object_id), merged)).await?;

        info!("사용자 부분 수정 완료: {}", object_id);
        Ok(())
    }

    /// 기존 레코드의 변경 가능한 속성을 모두 교체합니다.
    pub async fn put_user(&self, id: &str, request: CreateUserRequest) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        if !self.store.exists_by_id(&object_id).await? {
            return Err(not_found(id));
        }
        self.check_age(request.birth_date)?;

        let user = User::from_profile(Some(object_id), UserProfile::from(request));
        self.store.save(user).await?;

        info!("사용자 전체 교체 완료: {}", object_id);
        Ok(())
    }

    /// 생년월일이 `[from, to]`에 속하는 사용자를 한 페이지 조회합니다.
    ///
    /// `from`이 `to`보다 늦으면 저장소를 조회하지 않고 `InvalidRange`로 실패합니다.
    pub async fn find_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> AppResult<Page<UserResponse>> {
        if from > to {
            return Err(AppError::InvalidRange(
                "'from' 날짜는 'to' 날짜보다 늦을 수 없습니다".to_string(),
            ));
        }

        let users = self.store
            .find_all_by_birth_date_between(from, to, &page)
            .await?;

        Ok(users.map(UserResponse::from))
    }

    pub async fn find_all(&self, page: PageRequest) -> AppResult<Page<UserResponse>> {
        let users = self.store.find_all(&page).await?;

        Ok(users.map(UserResponse::from))
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let object_id = parse_user_id(id)?;

        let user = self.store
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자를 삭제합니다. 존재하지 않는 ID도 성공으로 처리합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        self.store.delete_by_id(&object_id).await?;

        info!("사용자 삭제 요청 처리: {}", object_id);
        Ok(())
    }

    fn check_age(&self, birth_date: NaiveDate) -> AppResult<()> {
        let today = chrono::Local::now().date_naive();

        rules::ensure_minimum_age(birth_date, self.config.adult_age, today).inspect_err(|_| {
            warn!(
                "최소 나이 미달로 거부: 생년월일 {}, 기준 {}세",
                birth_date, self.config.adult_age
            );
        })
    }
}

/// 경로의 사용자 ID 문자열을 `ObjectId`로 변환합니다.
pub fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}
