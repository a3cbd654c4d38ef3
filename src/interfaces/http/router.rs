//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    AdminHandler, CustomerHandler, EmployeeHandler, InvoiceHandler, PermissionHandler,
    ReservationHandler, RoomHandler, ServiceHandler,
};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{
    admins, customers, employees, health, invoices, permissions, reservations, rooms, services,
};

/// Shared state for every route. Handlers are cheap to clone
/// behind `Arc`; the bare connection is kept for health checks.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerHandler>,
    pub reservations: Arc<ReservationHandler>,
    pub invoices: Arc<InvoiceHandler>,
    pub rooms: Arc<RoomHandler>,
    pub services: Arc<ServiceHandler>,
    pub employees: Arc<EmployeeHandler>,
    pub admins: Arc<AdminHandler>,
    pub permissions: Arc<PermissionHandler>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Customers
        customers::create_customer,
        customers::list_customers,
        customers::get_customer,
        customers::update_name,
        customers::update_email,
        customers::update_phone,
        customers::update_address,
        customers::update_date_of_birth,
        customers::delete_customer,
        // Reservations
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::update_expected_check_in,
        reservations::check_in,
        reservations::cancel_reservation,
        // Invoices
        invoices::create_invoice,
        invoices::list_invoices,
        invoices::get_invoice,
        invoices::delete_invoice,
        // Rooms
        rooms::create_room,
        rooms::list_rooms,
        rooms::get_room,
        rooms::update_room_price,
        rooms::disable_room,
        rooms::enable_room,
        rooms::delete_room,
        // Services
        services::create_service,
        services::list_services,
        services::get_service,
        services::update_service_price,
        services::update_service_priority,
        services::set_service_active,
        services::delete_service,
        // Employees
        employees::create_employee,
        employees::list_employees,
        employees::get_employee,
        employees::update_employee_salary,
        employees::list_employee_permissions,
        employees::attach_employee_permission,
        employees::detach_employee_permission,
        employees::delete_employee,
        // Admins
        admins::create_admin,
        admins::list_admins,
        admins::get_admin,
        admins::promote_admin,
        admins::list_admin_permissions,
        admins::attach_admin_permission,
        admins::detach_admin_permission,
        admins::delete_admin,
        // Permissions
        permissions::create_permission,
        permissions::list_permissions,
        permissions::get_permission,
        permissions::enable_permission,
        permissions::disable_permission,
        permissions::delete_permission,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Customers
            customers::CreateCustomerRequest,
            customers::UpdateNameRequest,
            customers::UpdateEmailRequest,
            customers::UpdatePhoneRequest,
            customers::UpdateAddressRequest,
            customers::UpdateDateOfBirthRequest,
            customers::CustomerDto,
            // Reservations
            reservations::CreateReservationRequest,
            reservations::UpdateExpectedCheckInRequest,
            reservations::ReservationDto,
            // Invoices
            invoices::CreateInvoiceRequest,
            invoices::InvoiceDto,
            // Rooms
            rooms::CreateRoomRequest,
            rooms::UpdateRoomPriceRequest,
            rooms::RoomDto,
            // Services
            services::CreateServiceRequest,
            services::UpdateServicePriceRequest,
            services::UpdateServicePriorityRequest,
            services::SetServiceActiveRequest,
            services::ServiceDto,
            // Employees
            employees::CreateEmployeeRequest,
            employees::UpdateSalaryRequest,
            employees::EmployeeDto,
            // Admins
            admins::CreateAdminRequest,
            admins::AdminDto,
            // Permissions
            permissions::CreatePermissionRequest,
            permissions::PermissionDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Customers", description = "Guest registry, kept in sync with the billing provider"),
        (name = "Reservations", description = "Room reservations with manual-capture payment intents"),
        (name = "Invoices", description = "Check-out invoices and payment capture"),
        (name = "Rooms", description = "Room inventory and pricing"),
        (name = "Services", description = "Hotel service catalog"),
        (name = "Employees", description = "Staff management and permission grants"),
        (name = "Admins", description = "Administrator accounts"),
        (name = "Permissions", description = "Named capabilities for staff"),
    ),
    info(
        title = "Hotel Back Office API",
        version = "1.0.0",
        description = "REST API for hotel management with transactional billing synchronization"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let customer_routes = Router::new()
        .route(
            "/",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/{id}",
            get(customers::get_customer).delete(customers::delete_customer),
        )
        .route("/{id}/name", put(customers::update_name))
        .route("/{id}/email", put(customers::update_email))
        .route("/{id}/phone", put(customers::update_phone))
        .route("/{id}/address", put(customers::update_address))
        .route("/{id}/date-of-birth", put(customers::update_date_of_birth));

    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/{id}", get(reservations::get_reservation))
        .route(
            "/{id}/expected-check-in",
            put(reservations::update_expected_check_in),
        )
        .route("/{id}/check-in", post(reservations::check_in))
        .route("/{id}/cancel", post(reservations::cancel_reservation));

    let invoice_routes = Router::new()
        .route(
            "/",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/{id}",
            get(invoices::get_invoice).delete(invoices::delete_invoice),
        );

    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route("/{id}", get(rooms::get_room).delete(rooms::delete_room))
        .route("/{id}/price", put(rooms::update_room_price))
        .route("/{id}/disable", post(rooms::disable_room))
        .route("/{id}/enable", post(rooms::enable_room));

    let service_routes = Router::new()
        .route(
            "/",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/{id}",
            get(services::get_service).delete(services::delete_service),
        )
        .route("/{id}/price", put(services::update_service_price))
        .route("/{id}/priority", put(services::update_service_priority))
        .route("/{id}/active", put(services::set_service_active));

    let employee_routes = Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/{id}",
            get(employees::get_employee).delete(employees::delete_employee),
        )
        .route("/{id}/salary", put(employees::update_employee_salary))
        .route(
            "/{id}/permissions",
            get(employees::list_employee_permissions),
        )
        .route(
            "/{id}/permissions/{permission_id}",
            post(employees::attach_employee_permission)
                .delete(employees::detach_employee_permission),
        );

    let admin_routes = Router::new()
        .route("/", get(admins::list_admins).post(admins::create_admin))
        .route("/{id}", get(admins::get_admin).delete(admins::delete_admin))
        .route("/{id}/promote", post(admins::promote_admin))
        .route("/{id}/permissions", get(admins::list_admin_permissions))
        .route(
            "/{id}/permissions/{permission_id}",
            post(admins::attach_admin_permission).delete(admins::detach_admin_permission),
        );

    let permission_routes = Router::new()
        .route(
            "/",
            get(permissions::list_permissions).post(permissions::create_permission),
        )
        .route(
            "/{id}",
            get(permissions::get_permission).delete(permissions::delete_permission),
        )
        .route("/{id}/enable", post(permissions::enable_permission))
        .route("/{id}/disable", post(permissions::disable_permission));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1/customers", customer_routes)
        .nest("/api/v1/reservations", reservation_routes)
        .nest("/api/v1/invoices", invoice_routes)
        .nest("/api/v1/rooms", room_routes)
        .nest("/api/v1/services", service_routes)
        .nest("/api/v1/employees", employee_routes)
        .nest("/api/v1/admins", admin_routes)
        .nest("/api/v1/permissions", permission_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
