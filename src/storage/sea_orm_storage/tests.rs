use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::errors::MbtiError;
use crate::models::common::pagination::MAX_PAGE;
use crate::models::{
    answers::requests::{CreateAnswerRequest, UpdateAnswerRequest},
    courses::{
        entities::CourseSort,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    questions::requests::CreateQuestionRequest,
    users::{
        entities::UserRole,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 2,
        timeout: 5,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should start")
}

fn course(title: &str, rating: f64, price: i64) -> CreateCourseRequest {
    CreateCourseRequest {
        title: title.to_string(),
        link: format!("https://courses.example.com/{title}"),
        img_link: format!("https://img.example.com/{title}.png"),
        rating,
        price,
    }
}

#[test]
fn test_build_database_url() {
    assert_eq!(
        SeaOrmStorage::build_database_url("mbti.db").unwrap(),
        "sqlite://mbti.db?mode=rwc"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url(":memory:").unwrap(),
        "sqlite::memory:"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url("postgres://u:p@localhost/mbti").unwrap(),
        "postgres://u:p@localhost/mbti"
    );
    assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
}

#[tokio::test]
async fn test_user_create_and_lookup() {
    let storage = memory_storage().await;

    let user = storage
        .create_user_impl(CreateUserRequest {
            email: "alice@example.com".to_string(),
            password: "$argon2id$fake".to_string(),
            role: None,
            data_id: None,
        })
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::User);
    assert!(!user.data_id.is_empty());
    assert!(user.last_login.is_none());

    let by_id = storage.get_user_by_id_impl(user.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some("alice@example.com".to_string()));

    let by_email = storage
        .get_user_by_email_impl("alice@example.com")
        .await
        .unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    assert!(storage.get_user_by_id_impl(9999).await.unwrap().is_none());
    assert!(
        storage
            .get_user_by_email_impl("nobody@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let storage = memory_storage().await;
    let req = CreateUserRequest {
        email: "dup@example.com".to_string(),
        password: "hash".to_string(),
        role: None,
        data_id: None,
    };

    storage.create_user_impl(req.clone()).await.unwrap();
    let err = storage.create_user_impl(req).await.unwrap_err();
    assert!(matches!(err, MbtiError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_update_last_login() {
    let storage = memory_storage().await;
    let user = storage
        .create_user_impl(CreateUserRequest {
            email: "login@example.com".to_string(),
            password: "hash".to_string(),
            role: Some(UserRole::Admin),
            data_id: Some("INTJ".to_string()),
        })
        .await
        .unwrap();

    assert!(storage.update_last_login_impl(user.id).await.unwrap());
    assert!(!storage.update_last_login_impl(user.id + 100).await.unwrap());

    let reloaded = storage.get_user_by_id_impl(user.id).await.unwrap().unwrap();
    assert!(reloaded.last_login.is_some());
    assert_eq!(reloaded.role, UserRole::Admin);
    assert_eq!(reloaded.data_id, "INTJ");
}

#[tokio::test]
async fn test_user_patch_ignores_lookup_fields() {
    let storage = memory_storage().await;
    let user = storage
        .create_user_impl(CreateUserRequest {
            email: "patch@example.com".to_string(),
            password: "stored-hash".to_string(),
            role: None,
            data_id: Some("old".to_string()),
        })
        .await
        .unwrap();

    // 只有定位字段，不产生变更
    let unchanged = storage
        .update_user_impl(
            user.id,
            UpdateUserRequest {
                password: Some("whatever".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.data_id, "old");
    assert_eq!(unchanged.password_hash, "stored-hash");

    let updated = storage
        .update_user_impl(
            user.id,
            UpdateUserRequest {
                password: Some("whatever".to_string()),
                data_id: Some("ENFP".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.data_id, "ENFP");
    assert_eq!(updated.password_hash, "stored-hash");
    assert_eq!(updated.email, "patch@example.com");

    let missing = storage
        .update_user_impl(
            user.id + 1,
            UpdateUserRequest {
                data_id: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_course_crud_by_title() {
    let storage = memory_storage().await;

    let created = storage
        .create_course_impl(course("rust-101", 4.5, 100))
        .await
        .unwrap();
    assert_eq!(created.title, "rust-101");

    let err = storage
        .create_course_impl(course("rust-101", 3.0, 50))
        .await
        .unwrap_err();
    assert!(matches!(err, MbtiError::UniqueViolation(_)));

    let by_title = storage.get_course_by_title_impl("rust-101").await.unwrap();
    assert_eq!(by_title.as_ref().map(|c| c.id), Some(created.id));

    let updated = storage
        .update_course_by_title_impl(
            "rust-101",
            UpdateCourseRequest {
                title: Some("rust-102".to_string()),
                price: Some(120),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "rust-102");
    assert_eq!(updated.price, 120);
    assert_eq!(updated.rating, 4.5);

    assert!(
        storage
            .get_course_by_title_impl("rust-101")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .update_course_by_title_impl(
                "rust-101",
                UpdateCourseRequest {
                    price: Some(1),
                    ..Default::default()
                }
            )
            .await
            .unwrap()
            .is_none()
    );

    let unchanged = storage
        .update_course_by_title_impl("rust-102", UpdateCourseRequest::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.id, created.id);
    assert_eq!(unchanged.title, "rust-102");
    assert_eq!(unchanged.price, 120);
    assert_eq!(unchanged.rating, 4.5);
}

#[tokio::test]
async fn test_course_pagination_search_and_sort() {
    let storage = memory_storage().await;
    for (title, rating, price) in [
        ("alpha", 3.0, 30),
        ("beta", 5.0, 10),
        ("gamma", 4.0, 20),
        ("100%_off", 1.0, 0),
    ] {
        storage
            .create_course_impl(course(title, rating, price))
            .await
            .unwrap();
    }

    let all = storage.list_courses_impl().await.unwrap();
    assert_eq!(all.len(), 4);

    let page = storage
        .list_courses_with_pagination_impl(CourseListQuery {
            page: Some(2),
            size: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pagination.total, 4);
    assert_eq!(page.pagination.total_pages, 2);

    let by_rating = storage
        .list_courses_with_pagination_impl(CourseListQuery {
            sort: Some(CourseSort::Rating),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_rating.items[0].title, "beta");

    // 通配符按字面匹配
    let literal = storage
        .list_courses_with_pagination_impl(CourseListQuery {
            search: Some("%_".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(literal.items.len(), 1);
    assert_eq!(literal.items[0].title, "100%_off");

    let substring = storage
        .list_courses_with_pagination_impl(CourseListQuery {
            search: Some("mm".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(substring.items.len(), 1);
    assert_eq!(substring.items[0].title, "gamma");

    let far = storage
        .list_courses_with_pagination_impl(CourseListQuery {
            page: Some(i64::MAX),
            size: Some(100),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(far.items.is_empty());
    assert_eq!(far.pagination.page, MAX_PAGE);
    assert_eq!(far.pagination.total, 4);
}

#[tokio::test]
async fn test_answers_and_questions() {
    let storage = memory_storage().await;

    let question = storage
        .create_question_impl(CreateQuestionRequest {
            question_type: "EI".to_string(),
            contents: "You enjoy large parties.".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(storage.list_questions_impl().await.unwrap().len(), 1);

    let answer = storage
        .create_answer_impl(CreateAnswerRequest {
            answer_type: "E".to_string(),
            question: question.id,
            contents: "Agree".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(answer.question, question.id);

    let err = storage
        .create_answer_impl(CreateAnswerRequest {
            answer_type: "I".to_string(),
            question: question.id + 42,
            contents: "Disagree".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MbtiError::ForeignKeyViolation(_)));

    let rows = storage
        .update_answer_impl(
            answer.id,
            UpdateAnswerRequest {
                contents: Some("Strongly agree".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let reloaded = storage.get_answer_by_id_impl(answer.id).await.unwrap().unwrap();
    assert_eq!(reloaded.contents, "Strongly agree");
    assert_eq!(reloaded.answer_type, "E");

    // 不存在的记录：更新照常执行，影响 0 行
    let rows = storage
        .update_answer_impl(
            answer.id + 10,
            UpdateAnswerRequest {
                contents: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let rows = storage
        .update_answer_impl(answer.id, UpdateAnswerRequest::default())
        .await
        .unwrap();
    assert_eq!(rows, 0);
    assert_eq!(storage.list_answers_impl().await.unwrap().len(), 1);
}
