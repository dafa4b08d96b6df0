use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::LoginRequest, responses::UserResponse},
};
use crate::utils::password::verify_password;

pub async fn handle_login(
    service: &UserService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 根据邮箱获取用户
    let user = match storage.get_user_by_email(login_request.email.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Email or password is incorrect",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        )));
    }

    // 3. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    let user = match storage.get_user_by_id(user.id).await {
        Ok(Some(fresh)) => fresh,
        _ => user,
    };

    info!("User {} logged in successfully", user.email);

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "Login successful")))
}
