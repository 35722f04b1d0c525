use std::sync::Arc;

use adapter::auth::JwtTokenService;
use adapter::database::ConnectionPool;
use adapter::gateway::{smtp::SmtpMailer, stripe::StripeGateway};
use adapter::repository::{
    booking::BookingRepositoryImpl, health::HealthCheckRepositoryImpl, room::RoomRepositoryImpl,
    user::UserRepositoryImpl,
};
use kernel::auth::TokenService;
use kernel::gateway::{mail::Mailer, payment::PaymentGateway};
use kernel::repository::{
    booking::BookingRepository, health::HealthCheckRepository, room::RoomRepository,
    user::UserRepository,
};
use shared::{config::AppConfig, error::AppResult};

#[derive(Clone)]
pub struct AppRegistry {
    app_config: AppConfig,
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    token_service: Arc<dyn TokenService>,
    payment_gateway: Arc<dyn PaymentGateway>,
    mailer: Arc<dyn Mailer>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> AppResult<Self> {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let token_service = Arc::new(JwtTokenService::new(&app_config.auth));
        let payment_gateway = Arc::new(StripeGateway::new(&app_config.payment));
        let mailer = Arc::new(SmtpMailer::new(&app_config.mail)?);
        Ok(Self {
            app_config,
            health_check_repository,
            user_repository,
            room_repository,
            booking_repository,
            token_service,
            payment_gateway,
            mailer,
        })
    }

    /// 差し替え用のコンストラクタ。テストでインメモリ実装を注入する。
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        app_config: AppConfig,
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        room_repository: Arc<dyn RoomRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        token_service: Arc<dyn TokenService>,
        payment_gateway: Arc<dyn PaymentGateway>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            app_config,
            health_check_repository,
            user_repository,
            room_repository,
            booking_repository,
            token_service,
            payment_gateway,
            mailer,
        }
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        self.token_service.clone()
    }

    pub fn payment_gateway(&self) -> Arc<dyn PaymentGateway> {
        self.payment_gateway.clone()
    }

    pub fn mailer(&self) -> Arc<dyn Mailer> {
        self.mailer.clone()
    }
}
