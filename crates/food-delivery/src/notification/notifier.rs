use super::{
    Channel, EmailService, InAppService, Notification, Priority, PushService, SmsService,
    WhatsAppService, ALL_USERS,
};
use crate::model::UserId;
use tracing::info;

/// Reaches customers by email and push.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerNotifier;

impl EmailService for CustomerNotifier {
    fn send_email(&self, address: &str, subject: &str, body: &str) -> Notification {
        info!(channel = %Channel::Email, recipient = address, subject, "Email sent");
        Notification::new(Channel::Email, address, body).with_subject(subject)
    }
}

impl PushService for CustomerNotifier {
    fn send_push(&self, user_id: &UserId, title: &str, body: &str) -> Notification {
        info!(channel = %Channel::Push, recipient = %user_id, title, "Push sent");
        Notification::new(Channel::Push, user_id.as_str(), body).with_subject(title)
    }

    fn send_push_to_all(&self, title: &str, body: &str) -> Notification {
        info!(channel = %Channel::Push, title, "Push broadcast to all users");
        Notification::new(Channel::Push, ALL_USERS, body).with_subject(title)
    }
}

/// Reaches drivers by SMS and WhatsApp.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverNotifier;

impl SmsService for DriverNotifier {
    fn send_sms(&self, phone: &str, body: &str) -> Notification {
        info!(channel = %Channel::Sms, recipient = phone, "SMS sent");
        Notification::new(Channel::Sms, phone, body)
    }
}

impl WhatsAppService for DriverNotifier {
    fn send_whatsapp(&self, phone: &str, body: &str) -> Notification {
        info!(channel = %Channel::WhatsApp, recipient = phone, "WhatsApp message sent");
        Notification::new(Channel::WhatsApp, phone, body)
    }

    fn send_whatsapp_with_media(&self, phone: &str, body: &str, media_url: &str) -> Notification {
        info!(channel = %Channel::WhatsApp, recipient = phone, media_url, "WhatsApp media sent");
        Notification::new(Channel::WhatsApp, phone, body).with_media(media_url)
    }
}

/// Operations staff: every channel, including in-app messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminNotifier;

impl EmailService for AdminNotifier {
    fn send_email(&self, address: &str, subject: &str, body: &str) -> Notification {
        info!(audience = "admin", channel = %Channel::Email, recipient = address, subject, "Email sent");
        Notification::new(Channel::Email, address, body).with_subject(subject)
    }
}

impl SmsService for AdminNotifier {
    fn send_sms(&self, phone: &str, body: &str) -> Notification {
        info!(audience = "admin", channel = %Channel::Sms, recipient = phone, "SMS sent");
        Notification::new(Channel::Sms, phone, body)
    }
}

impl PushService for AdminNotifier {
    fn send_push(&self, user_id: &UserId, title: &str, body: &str) -> Notification {
        info!(audience = "admin", channel = %Channel::Push, recipient = %user_id, title, "Push sent");
        Notification::new(Channel::Push, user_id.as_str(), body).with_subject(title)
    }

    fn send_push_to_all(&self, title: &str, body: &str) -> Notification {
        info!(audience = "admin", channel = %Channel::Push, title, "Push broadcast to all users");
        Notification::new(Channel::Push, ALL_USERS, body).with_subject(title)
    }
}

impl WhatsAppService for AdminNotifier {
    fn send_whatsapp(&self, phone: &str, body: &str) -> Notification {
        info!(audience = "admin", channel = %Channel::WhatsApp, recipient = phone, "WhatsApp message sent");
        Notification::new(Channel::WhatsApp, phone, body)
    }

    fn send_whatsapp_with_media(&self, phone: &str, body: &str, media_url: &str) -> Notification {
        info!(audience = "admin", channel = %Channel::WhatsApp, recipient = phone, media_url, "WhatsApp media sent");
        Notification::new(Channel::WhatsApp, phone, body).with_media(media_url)
    }
}

impl InAppService for AdminNotifier {
    fn send_in_app(&self, user_id: &UserId, body: &str, priority: Priority) -> Notification {
        info!(audience = "admin", channel = %Channel::InApp, recipient = %user_id, %priority, "In-app notification sent");
        Notification::new(Channel::InApp, user_id.as_str(), body).with_priority(priority)
    }

    fn mark_as_read(&self, user_id: &UserId, notification_id: &str) {
        info!(audience = "admin", recipient = %user_id, notification_id, "Notification marked as read");
    }
}
