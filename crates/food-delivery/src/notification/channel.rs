//! One trait per delivery channel, so a notifier implements only the channels it uses.

use crate::model::UserId;
use serde::Serialize;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
    Push,
    WhatsApp,
    InApp,
}

impl Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Push => "push",
            Channel::WhatsApp => "whatsapp",
            Channel::InApp => "in_app",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        })
    }
}

/// Recipient of a broadcast push.
pub const ALL_USERS: &str = "all";

/// A message that was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub channel: Channel,
    /// Address, phone number or user id, depending on the channel.
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Notification {
    pub fn new(channel: Channel, recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            channel,
            recipient: recipient.into(),
            subject: None,
            body: body.into(),
            media_url: None,
            priority: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_media(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

pub trait EmailService: Send + Sync {
    fn send_email(&self, address: &str, subject: &str, body: &str) -> Notification;

    fn send_bulk_email(&self, addresses: &[&str], subject: &str, body: &str) -> Vec<Notification> {
        addresses
            .iter()
            .map(|address| self.send_email(address, subject, body))
            .collect()
    }
}

pub trait SmsService: Send + Sync {
    fn send_sms(&self, phone: &str, body: &str) -> Notification;

    fn send_bulk_sms(&self, phones: &[&str], body: &str) -> Vec<Notification> {
        phones.iter().map(|phone| self.send_sms(phone, body)).collect()
    }
}

pub trait PushService: Send + Sync {
    fn send_push(&self, user_id: &UserId, title: &str, body: &str) -> Notification;

    /// Broadcast to every user; the recipient is [`ALL_USERS`].
    fn send_push_to_all(&self, title: &str, body: &str) -> Notification;
}

pub trait WhatsAppService: Send + Sync {
    fn send_whatsapp(&self, phone: &str, body: &str) -> Notification;

    fn send_whatsapp_with_media(&self, phone: &str, body: &str, media_url: &str) -> Notification;
}

/// Messages shown inside the app.
pub trait InAppService: Send + Sync {
    fn send_in_app(&self, user_id: &UserId, body: &str, priority: Priority) -> Notification;

    fn mark_as_read(&self, user_id: &UserId, notification_id: &str);
}
