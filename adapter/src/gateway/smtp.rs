use async_trait::async_trait;
use kernel::gateway::mail::{Email, Mailer};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use shared::{
    config::MailConfig,
    error::{AppError, AppResult},
};

/// SMTP (STARTTLS) での通知メール送信。
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(cfg: &MailConfig) -> AppResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_host)
            .map_err(|e| AppError::ExternalServiceError(format!("invalid SMTP relay: {e}")))?
            .port(cfg.smtp_port)
            .credentials(Credentials::new(
                cfg.username.clone(),
                cfg.password.clone(),
            ))
            .build();
        let from = cfg
            .from_address
            .parse()
            .map_err(|e| AppError::ExternalServiceError(format!("invalid MAIL_FROM: {e}")))?;
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, email: Email) -> AppResult<()> {
        let to = to
            .parse()
            .map_err(|e| AppError::ExternalServiceError(format!("invalid recipient: {e}")))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html)
            .map_err(|e| AppError::ExternalServiceError(format!("failed to build email: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("failed to send email: {e}")))?;
        Ok(())
    }
}
