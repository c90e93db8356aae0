use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::{IntoParams, ToSchema};

use super::AddressView;
use crate::address::application::ports::incoming::use_cases::ListAddressesError;
use crate::address::application::ports::outgoing::address_query::{
    AddressListFilter, PageRequest,
};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::{ApiResponse, PaginationMeta};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAddressesQuery {
    /// Case-insensitive substring over name, email and phone
    pub search: Option<String>,
    /// Case-insensitive pattern
    pub city: Option<String>,
    /// Case-insensitive pattern
    pub country: Option<String>,
    /// 1-based; values below 1 fall back to 1
    pub page: Option<i64>,
    /// 1..=100; anything else falls back to 10
    pub limit: Option<i64>,
}

impl From<ListAddressesQuery> for (AddressListFilter, PageRequest) {
    fn from(q: ListAddressesQuery) -> Self {
        (
            AddressListFilter::new(q.search, q.city, q.country),
            PageRequest::new(q.page, q.limit),
        )
    }
}

#[derive(Serialize, ToSchema)]
pub struct AddressListResponse {
    pub addresses: Vec<AddressView>,
}

fn map_list_error(err: ListAddressesError) -> HttpResponse {
    match err {
        ListAddressesError::QueryError(e) => {
            error!(error = %e, "Failed to list addresses");
            ApiResponse::internal_error()
        }
    }
}

/// List the caller's addresses
#[utoipa::path(
    get,
    path = "/address/",
    tag = "address",
    params(ListAddressesQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "One page of addresses with pagination meta"),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 401, description = "Missing credentials", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn list_addresses_handler(
    user: AuthenticatedUser,
    query: web::Query<ListAddressesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    debug!(
        user_id = %user.user_id,
        page = page.page,
        limit = page.limit,
        "Listing addresses"
    );

    match data.address.list.execute(user.user_id, filter, page).await {
        Ok(result) => {
            let meta = PaginationMeta {
                page: result.page,
                limit: result.limit,
                total: result.total,
                total_pages: result.total_pages(),
            };
            let addresses = result.items.into_iter().map(AddressView::from).collect();
            ApiResponse::paginated(AddressListResponse { addresses }, meta)
        }
        Err(e) => map_list_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::adapter::incoming::web::routes::configure;
    use crate::address::application::domain::entities::Address;
    use crate::address::application::ports::incoming::use_cases::ListAddressesUseCase;
    use crate::address::application::ports::outgoing::address_query::PageResult;
    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::address_fixtures::sample_address;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    /// Returns `total` records worth of metadata around one sample row and
    /// records the filter and page it was called with.
    struct MockList {
        total: u64,
        fail: bool,
        received: Mutex<Option<(UserId, AddressListFilter, PageRequest)>>,
    }

    impl MockList {
        fn with_total(total: u64) -> Arc<Self> {
            Arc::new(Self {
                total,
                fail: false,
                received: Mutex::new(None),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                total: 0,
                fail: true,
                received: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl ListAddressesUseCase for MockList {
        async fn execute(
            &self,
            owner: UserId,
            filter: AddressListFilter,
            page: PageRequest,
        ) -> Result<PageResult<Address>, ListAddressesError> {
            *self.received.lock().unwrap() = Some((owner, filter, page));
            if self.fail {
                return Err(ListAddressesError::QueryError("db down".to_string()));
            }
            Ok(PageResult {
                items: vec![sample_address(owner)],
                page: page.page,
                limit: page.limit,
                total: self.total,
            })
        }
    }

    async fn get_list(mock: Arc<MockList>, owner: UserId, uri: &str) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_list_addresses(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .app_data(crate::shared::api::json_config::custom_query_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer_header(owner))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_list_returns_addresses_and_meta() {
        let owner = UserId::from(Uuid::new_v4());
        let mock = MockList::with_total(21);

        let (status, body) = get_list(mock, owner, "/address/?page=2&limit=10").await;

        assert_eq!(status, 200);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["addresses"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["addresses"][0]["user_id"], owner.to_string());
        assert_eq!(body["meta"]["page"], 2);
        assert_eq!(body["meta"]["limit"], 10);
        assert_eq!(body["meta"]["total"], 21);
        assert_eq!(body["meta"]["total_pages"], 3);
    }

    #[actix_web::test]
    async fn test_list_without_trailing_slash() {
        let (status, _) = get_list(
            MockList::with_total(1),
            UserId::from(Uuid::new_v4()),
            "/address",
        )
        .await;

        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_list_passes_filters_and_clamps_paging() {
        let owner = UserId::from(Uuid::new_v4());
        let mock = MockList::with_total(1);

        let (status, body) = get_list(
            mock.clone(),
            owner,
            "/address/?search=%20jan%20&city=Pune&country=&page=0&limit=500",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["meta"]["page"], 1);
        assert_eq!(body["meta"]["limit"], 10);

        let (received_owner, filter, page) = mock.received.lock().unwrap().clone().unwrap();
        assert_eq!(received_owner, owner);
        assert_eq!(filter.search.as_deref(), Some("jan"));
        assert_eq!(filter.city.as_deref(), Some("Pune"));
        assert_eq!(filter.country, None);
        assert_eq!(page, PageRequest::new(Some(1), Some(10)));
    }

    #[actix_web::test]
    async fn test_huge_page_is_accepted() {
        let owner = UserId::from(Uuid::new_v4());
        let mock = MockList::with_total(1);

        let (status, body) =
            get_list(mock.clone(), owner, "/address/?page=9223372036854775807&limit=10").await;

        assert_eq!(status, 200);
        assert_eq!(body["meta"]["page"], i64::MAX);

        let (_, _, page) = mock.received.lock().unwrap().clone().unwrap();
        assert_eq!(page.offset(), i64::MAX as u64);
    }

    #[actix_web::test]
    async fn test_malformed_page_is_bad_request() {
        let (status, body) = get_list(
            MockList::with_total(1),
            UserId::from(Uuid::new_v4()),
            "/address/?page=abc",
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_query_error_is_internal() {
        let (status, body) =
            get_list(MockList::failing(), UserId::from(Uuid::new_v4()), "/address/").await;

        assert_eq!(status, 500);
        assert_eq!(body["error"], "INTERNAL_ERROR");
    }
}
