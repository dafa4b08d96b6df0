/// 业务错误码
///
/// 0 表示成功；1xxx 通用错误；2xxx 用户；3xxx 课程；4xxx 问答。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    InternalServerError = 1005,
    RateLimitExceeded = 1029,

    UserNotFound = 2000,
    UserAlreadyExists = 2001,
    UserEmailInvalid = 2002,
    UserPasswordInvalid = 2003,
    UserCreationFailed = 2004,
    UserUpdateFailed = 2005,
    AuthFailed = 2006,

    CourseNotFound = 3000,
    CourseAlreadyExists = 3001,
    CourseInvalid = 3002,
    CourseCreationFailed = 3003,
    CourseUpdateFailed = 3004,

    QuestionNotFound = 4000,
    QuestionInvalid = 4001,
    AnswerNotFound = 4100,
    AnswerInvalid = 4101,
    AnswerCreationFailed = 4102,
    AnswerUpdateFailed = 4103,
}
