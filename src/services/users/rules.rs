//! 저장 전 비즈니스 규칙
//!
//! 두 규칙은 서로 독립적이며, 후보 값과 저장소 조회 한 번(유일성) 또는
//! 오늘 날짜(나이)에만 의존합니다.

use chrono::{Datelike, NaiveDate};
use crate::{
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

/// 이메일이 다른 레코드에서 사용 중이면 `DuplicateEmail`로 실패합니다.
pub async fn ensure_email_available(store: &dyn UserStore, email: &str) -> AppResult<()> {
    if store.find_by_email(email).await?.is_some() {
        return Err(AppError::DuplicateEmail(format!("이미 등록된 이메일입니다: {}", email)));
    }
    Ok(())
}

/// `today` 기준 만 나이를 계산합니다.
///
/// 올해 생일이 아직 지나지 않았으면 연도 차이에서 1을 뺍니다.
/// 2월 29일생은 평년에는 3월 1일에 나이가 올라갑니다. 미래 생년월일은 0세입니다.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// 만 나이가 `min_age`보다 적으면 `UnderAge`로 실패합니다.
pub fn ensure_minimum_age(birth_date: NaiveDate, min_age: u32, today: NaiveDate) -> AppResult<()> {
    if age_on(birth_date, today) < min_age {
        return Err(AppError::UnderAge(min_age));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::InMemoryUserRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_whole_years_since_birthday() {
        let today = date(2026, 10, 14);

        assert_eq!(age_on(date(2008, 10, 14), today), 18);
        assert_eq!(age_on(date(2008, 10, 15), today), 17);
        assert_eq!(age_on(date(2008, 10, 13), today), 18);
        assert_eq!(age_on(date(1996, 12, 31), today), 29);
    }

    #[test]
    fn test_age_of_leap_day_birthday() {
        assert_eq!(age_on(date(2008, 2, 29), date(2026, 2, 28)), 17);
        assert_eq!(age_on(date(2008, 2, 29), date(2026, 3, 1)), 18);
        assert_eq!(age_on(date(2008, 2, 29), date(2028, 2, 29)), 20);
    }

    #[test]
    fn test_future_birth_date_is_age_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2026, 10, 14)), 0);
    }

    #[test]
    fn test_minimum_age_boundary() {
        let today = date(2026, 10, 14);

        assert!(ensure_minimum_age(date(2008, 10, 14), 18, today).is_ok());
        assert!(matches!(
            ensure_minimum_age(date(2008, 10, 15), 18, today),
            Err(AppError::UnderAge(18))
        ));
    }

    #[test]
    fn test_zero_threshold_accepts_everyone() {
        assert!(ensure_minimum_age(date(2030, 1, 1), 0, date(2026, 10, 14)).is_ok());
    }

    #[actix_web::test]
    async fn test_email_availability() {
        let store = InMemoryUserRepository::new();
        store
            .save(User {
                id: None,
                email: "a@x.com".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                birth_date: date(1990, 1, 1),
                address: None,
                phone_number: None,
            })
            .await
            .unwrap();

        assert!(matches!(
            ensure_email_available(&store, "a@x.com").await,
            Err(AppError::DuplicateEmail(_))
        ));
        assert!(ensure_email_available(&store, "b@x.com").await.is_ok());
    }
}
