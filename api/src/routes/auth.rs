use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use hw_core::services::evaluate_password_strength;

use crate::dto::auth::{PasswordStrengthRequest, PasswordStrengthResponse};
use crate::handlers::{handle_validation_errors, ok};

/// Handler for POST /api/v1/auth/password-strength
///
/// The password is never logged.
pub async fn password_strength(
    req: HttpRequest,
    request: web::Json<PasswordStrengthRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let result = evaluate_password_strength(&request.password);
    ok(&req, PasswordStrengthResponse::from(result))
}
