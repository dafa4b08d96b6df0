pub mod answers;
pub mod courses;
pub mod questions;
pub mod users;

pub use answers::AnswerService;
pub use courses::CourseService;
pub use questions::QuestionService;
pub use users::UserService;
