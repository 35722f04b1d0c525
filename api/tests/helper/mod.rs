#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use adapter::auth::JwtTokenService;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use kernel::auth::TokenService;
use kernel::gateway::{
    mail::{Email, Mailer},
    payment::{PaymentGateway, PaymentIntent},
};
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, RoomId, UserId},
    role::Role,
    room::{
        event::{CreateRoom, RoomListFilter, UpdateRoom, UpdateRoomStatus},
        Room, RoomHost,
    },
    stat::{SalePoint, SalesScope},
    user::{
        event::{UpdateUserRole, UpsertUser},
        UpsertOutcome, User, UserStatus,
    },
};
use kernel::repository::{
    booking::BookingRepository, health::HealthCheckRepository, room::RoomRepository,
    user::UserRepository,
};
use registry::AppRegistry;
use shared::config::{
    AppConfig, AuthConfig, CookieSameSite, DatabaseConfig, MailConfig, PaymentConfig, ServerConfig,
};
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub struct HealthCheckOk;

#[async_trait]
impl HealthCheckRepository for HealthCheckOk {
    async fn check_db(&self) -> bool {
        true
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, event: UpsertUser) -> AppResult<UpsertOutcome> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.email == event.email) {
            return Ok(match event.status {
                Some(UserStatus::Requested) if user.status != UserStatus::Requested => {
                    user.status = UserStatus::Requested;
                    UpsertOutcome::StatusUpdated(user.clone())
                }
                _ => UpsertOutcome::Unchanged(user.clone()),
            });
        }
        let user = User {
            user_id: UserId::new(),
            user_name: event.user_name,
            email: event.email,
            role: event.role,
            status: event.status.unwrap_or_default(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(UpsertOutcome::Created(user))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.email == event.email) {
            Some(user) => {
                user.role = event.role;
                user.status = event.status.unwrap_or_default();
                Ok(())
            }
            None => Err(AppError::EntityNotFound(format!(
                "user ({}) not found",
                event.email
            ))),
        }
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<Vec<Room>>,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId> {
        let room_id = RoomId::new();
        self.rooms.lock().unwrap().push(Room {
            room_id,
            title: event.title,
            location: event.location,
            category: event.category,
            price: event.price,
            guests: event.guests,
            bedrooms: event.bedrooms,
            bathrooms: event.bathrooms,
            description: event.description,
            image: event.image,
            booked: false,
            host: RoomHost {
                name: event.host_name,
                email: event.host_email,
            },
            created_at: Utc::now(),
        });
        Ok(room_id)
    }

    async fn find_all(&self, filter: RoomListFilter) -> AppResult<Vec<Room>> {
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms
            .iter()
            .filter(|r| {
                filter
                    .category
                    .as_ref()
                    .map(|c| &r.category == c)
                    .unwrap_or(true)
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.room_id == room_id)
            .cloned())
    }

    async fn find_by_host(&self, host_email: &str) -> AppResult<Vec<Room>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.host.email == host_email)
            .cloned()
            .collect())
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<()> {
        let mut rooms = self.rooms.lock().unwrap();
        match rooms.iter_mut().find(|r| r.room_id == event.room_id) {
            Some(room) => {
                room.title = event.title;
                room.location = event.location;
                room.category = event.category;
                room.price = event.price;
                room.guests = event.guests;
                room.bedrooms = event.bedrooms;
                room.bathrooms = event.bathrooms;
                room.description = event.description;
                room.image = event.image;
                Ok(())
            }
            None => Err(AppError::EntityNotFound(format!(
                "room ({}) not found",
                event.room_id
            ))),
        }
    }

    async fn update_status(&self, event: UpdateRoomStatus) -> AppResult<()> {
        let mut rooms = self.rooms.lock().unwrap();
        match rooms.iter_mut().find(|r| r.room_id == event.room_id) {
            Some(room) => {
                room.booked = event.booked;
                Ok(())
            }
            None => Err(AppError::EntityNotFound(format!(
                "room ({}) not found",
                event.room_id
            ))),
        }
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let mut rooms = self.rooms.lock().unwrap();
        let before = rooms.len();
        rooms.retain(|r| r.room_id != room_id);
        if rooms.len() == before {
            return Err(AppError::EntityNotFound(format!(
                "room ({room_id}) not found"
            )));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.rooms.lock().unwrap().len() as i64)
    }

    async fn count_by_host(&self, host_email: &str) -> AppResult<i64> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.host.email == host_email)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let booking = Booking {
            booking_id: BookingId::new(),
            room_id: event.room_id,
            room_title: event.room_title,
            guest_name: event.guest_name,
            guest_email: event.guest_email,
            host_email: event.host_email,
            price: event.price,
            date: event.date,
            transaction_id: event.transaction_id,
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn find_by_guest(&self, guest_email: &str) -> AppResult<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.guest_email == guest_email)
            .cloned()
            .collect())
    }

    async fn find_by_host(&self, host_email: &str) -> AppResult<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.host_email == host_email)
            .cloned()
            .collect())
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<()> {
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.booking_id != booking_id);
        if bookings.len() == before {
            return Err(AppError::EntityNotFound(format!(
                "booking ({booking_id}) not found"
            )));
        }
        Ok(())
    }

    async fn find_sales(&self, scope: SalesScope) -> AppResult<Vec<SalePoint>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| match &scope {
                SalesScope::All => true,
                SalesScope::Host(email) => &b.host_email == email,
                SalesScope::Guest(email) => &b.guest_email == email,
            })
            .map(|b| SalePoint {
                date: b.date,
                price: b.price,
            })
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, Email)>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<(String, Email)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, email: Email) -> AppResult<()> {
        self.sent.lock().unwrap().push((to.to_string(), email));
        Ok(())
    }
}

#[derive(Default)]
pub struct StubPaymentGateway {
    calls: Mutex<Vec<(i64, String)>>,
}

impl StubPaymentGateway {
    pub fn calls(&self) -> Vec<(i64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> AppResult<PaymentIntent> {
        self.calls
            .lock()
            .unwrap()
            .push((amount, currency.to_string()));
        Ok(PaymentIntent {
            client_secret: "pi_stub_secret_123".to_string(),
        })
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            username: "app".to_string(),
            password: "passwd".to_string(),
            database: "app".to_string(),
        },
        auth: AuthConfig {
            token_secret: "test-secret".to_string(),
            token_ttl_days: 365,
            cookie_secure: false,
            cookie_same_site: CookieSameSite::Strict,
        },
        mail: MailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: "StayHub <no-reply@stayhub.example>".to_string(),
        },
        payment: PaymentConfig {
            secret_key: "sk_test".to_string(),
            currency: "usd".to_string(),
            api_base: "https://api.stripe.com".to_string(),
        },
    }
}

/// インメモリ実装だけで組んだルーター一式。DB も外部サービスも使わない。
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub rooms: Arc<InMemoryRoomRepository>,
    pub bookings: Arc<InMemoryBookingRepository>,
    pub mailer: Arc<RecordingMailer>,
    pub payments: Arc<StubPaymentGateway>,
    token_service: Arc<JwtTokenService>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = test_config();
        let users = Arc::new(InMemoryUserRepository::default());
        let rooms = Arc::new(InMemoryRoomRepository::default());
        let bookings = Arc::new(InMemoryBookingRepository::default());
        let mailer = Arc::new(RecordingMailer::default());
        let payments = Arc::new(StubPaymentGateway::default());
        let token_service = Arc::new(JwtTokenService::new(&config.auth));

        let registry = AppRegistry::from_parts(
            config,
            Arc::new(HealthCheckOk),
            users.clone(),
            rooms.clone(),
            bookings.clone(),
            token_service.clone(),
            payments.clone(),
            mailer.clone(),
        );
        let router = api::route::routes().with_state(registry);

        Self {
            router,
            users,
            rooms,
            bookings,
            mailer,
            payments,
            token_service,
        }
    }

    pub fn seed_user(&self, name: &str, email: &str, role: Role) {
        self.users.insert(User {
            user_id: UserId::new(),
            user_name: name.to_string(),
            email: email.to_string(),
            role,
            status: UserStatus::None,
            created_at: Utc::now(),
        });
    }

    /// 検証に通るセッション Cookie（ヘッダ値）を作る。
    pub fn session_for(&self, email: &str) -> String {
        let token = self.token_service.issue(email).unwrap();
        format!("token={token}")
    }

    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: serde_json::Value,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn delete(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(Method::DELETE).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }
}

pub async fn body_json(res: Response<Body>) -> serde_json::Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
