use actix_web::{web, HttpRequest, HttpResponse};

use oa_core::domain::entities::user::UserFilter;
use oa_core::repositories::UserRepository;
use oa_core::services::auth::RateLimiterTrait;
use oa_core::services::otp::CacheServiceTrait;
use oa_shared::types::{BasicResponse, PaginatedResponse, Pagination};

use crate::app::AppState;
use crate::dto::{UserListQuery, UserResponse};
use crate::handlers::handle_domain_error;

/// Handler for GET /api/v1/users
///
/// Query parameters `page`, `page_size` and `phone_number` are optional.
/// Out-of-range or unparseable paging values fall back to the defaults.
pub async fn list_users<U, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, C, R>>,
    query: web::Query<UserListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CacheServiceTrait + 'static,
    R: RateLimiterTrait + 'static,
{
    let query = query.into_inner();
    let pagination = Pagination::from_query(query.page.as_deref(), query.page_size.as_deref());
    let filter = UserFilter::by_phone(query.phone_number.as_deref());

    match state.user_service.list_users(&filter, pagination).await {
        Ok(page) => {
            let base_url = request_base_url(&req, &filter);
            let users = page.users.into_iter().map(UserResponse::from).collect();
            let body = PaginatedResponse::new(users, page.pagination, page.total, &base_url);
            HttpResponse::Ok().json(BasicResponse::success(
                200,
                "Users retrieved successfully",
                body,
            ))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Absolute URL of the current path, keeping a URL-safe phone filter
fn request_base_url(req: &HttpRequest, filter: &UserFilter) -> String {
    let info = req.connection_info();
    let base = format!("{}://{}{}", info.scheme(), info.host(), req.path());
    match filter
        .phone_number
        .as_deref()
        .filter(|phone| phone.bytes().all(|b| b.is_ascii_alphanumeric()))
    {
        Some(phone) => format!("{}?phone_number={}", base, phone),
        None => base,
    }
}
