pub mod answers;

pub mod courses;

pub mod frontend;

pub mod questions;

pub mod users;


pub use answers::configure_answers_routes;
pub use courses::configure_courses_routes;
pub use frontend::configure_frontend_routes;
pub use questions::configure_questions_routes;
pub use users::configure_user_routes;
