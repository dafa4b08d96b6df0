use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::services::CourseService;
use crate::utils::{SafeCourseTitle, SafeIDI64};

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_all_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_all_courses(&req).await
}

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn get_course_by_title(
    req: HttpRequest,
    title: SafeCourseTitle,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course_by_title(&title.0, &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(course_data.into_inner(), &req).await
}

pub async fn update_course(
    req: HttpRequest,
    title: SafeCourseTitle,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&title.0, update_data.into_inner(), &req)
        .await
}

pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::get().to(list_all_courses))
            .route("", web::post().to(create_course))
            .route("/list", web::get().to(list_courses))
            .route("/title/{title}", web::get().to(get_course_by_title))
            .route("/title/{title}", web::patch().to(update_course))
            .route("/{id}", web::get().to(get_course)),
    );
}
