//! Simulated notifications. Sending logs the message and returns it as a
//! [`Notification`].

mod channel;
mod notifier;

pub use channel::{
    Channel, EmailService, InAppService, Notification, Priority, PushService, SmsService,
    WhatsAppService, ALL_USERS,
};
pub use notifier::{AdminNotifier, CustomerNotifier, DriverNotifier};

use crate::model::{Money, Order, User};

/// Confirmation email to the order's customer.
pub fn order_placed(email: &dyn EmailService, order: &Order, total: Money) -> Notification {
    email.send_email(
        &order.customer().email,
        &format!("Order {} Confirmed!", order.id()),
        &format!("Thank you for your order of {total}"),
    )
}

/// Push to the order's customer that the order went through.
pub fn order_placed_push(push: &dyn PushService, order: &Order) -> Notification {
    push.send_push(
        order.customer().id(),
        "Order Placed",
        &format!("Your order {} has been placed successfully!", order.id()),
    )
}

/// Pickup request to the driver.
pub fn driver_assigned(sms: &dyn SmsService, driver: &User, order: &Order) -> Notification {
    sms.send_sms(
        &driver.phone,
        &format!("New delivery: Order {} is ready for pickup!", order.id()),
    )
}

/// Promotional campaign: one email per address, then a push to every user.
pub fn promotion(
    email: &dyn EmailService,
    push: &dyn PushService,
    addresses: &[&str],
) -> Vec<Notification> {
    let mut sent = email.send_bulk_email(addresses, "Special Offer!", "Get 20% off your next order!");
    sent.push(push.send_push_to_all("Limited Time Offer", "20% off - Order now!"));
    sent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use std::sync::Arc;

    fn order() -> Order {
        let customer = Arc::new(User::new("c1", "John Doe", "john.doe@email.com", "+1234567890"));
        Order::new("ord1", customer)
    }

    #[test]
    fn test_order_placed_messages() {
        let order = order();

        let email = order_placed(&CustomerNotifier, &order, Money::from_cents(3487));
        assert_eq!(email.channel, Channel::Email);
        assert_eq!(email.recipient, "john.doe@email.com");
        assert_eq!(email.subject.as_deref(), Some("Order ord1 Confirmed!"));
        assert_eq!(email.body, "Thank you for your order of $34.87");

        let push = order_placed_push(&CustomerNotifier, &order);
        assert_eq!(push.channel, Channel::Push);
        assert_eq!(push.recipient, "c1");
    }

    #[test]
    fn test_driver_assigned_goes_to_the_drivers_phone() {
        let driver = User::new("d1", "Alex Driver", "alex.driver@delivery.com", "+1987654321");
        let sms = driver_assigned(&DriverNotifier, &driver, &order());
        assert_eq!(sms.channel, Channel::Sms);
        assert_eq!(sms.recipient, "+1987654321");
        assert_eq!(sms.body, "New delivery: Order ord1 is ready for pickup!");
        assert!(sms.subject.is_none());
    }

    #[test]
    fn test_bulk_sends_one_message_per_recipient() {
        let sent = CustomerNotifier.send_bulk_email(&["a@example.com", "b@example.com"], "Special Offer!", "20% off");
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].recipient, "b@example.com");

        let sent = DriverNotifier.send_bulk_sms(&["+1", "+2", "+3"], "Shift starts soon");
        assert_eq!(sent.len(), 3);

        let whatsapp = DriverNotifier.send_whatsapp("+1", "On my way");
        assert_eq!(whatsapp.channel, Channel::WhatsApp);
        assert_eq!(whatsapp.channel.to_string(), "whatsapp");
    }

    #[test]
    fn test_promotion_emails_each_address_then_broadcasts() {
        let sent = promotion(&CustomerNotifier, &CustomerNotifier, &["a@example.com", "b@example.com"]);
        let recipients: Vec<&str> = sent.iter().map(|n| n.recipient.as_str()).collect();
        assert_eq!(recipients, vec!["a@example.com", "b@example.com", ALL_USERS]);
        assert_eq!(sent[2].channel, Channel::Push);
        assert_eq!(sent[2].subject.as_deref(), Some("Limited Time Offer"));
    }

    #[test]
    fn test_whatsapp_media_is_attached() {
        let plain = DriverNotifier.send_whatsapp("+1", "On my way");
        assert!(plain.media_url.is_none());

        let with_media = DriverNotifier.send_whatsapp_with_media("+1", "Here is the route", "https://maps.example/r1");
        assert_eq!(with_media.media_url.as_deref(), Some("https://maps.example/r1"));
        assert_eq!(with_media.body, "Here is the route");
    }

    #[test]
    fn test_admin_reaches_every_channel() {
        let admin = AdminNotifier;
        let ops = UserId::from("admin1");

        let in_app = admin.send_in_app(&ops, "Driver d2 is offline", Priority::High);
        assert_eq!(in_app.channel, Channel::InApp);
        assert_eq!(in_app.recipient, "admin1");
        assert_eq!(in_app.priority, Some(Priority::High));
        admin.mark_as_read(&ops, "n-1");

        let channels = vec![
            admin.send_email("ops@example.com", "Daily report", "All good").channel,
            admin.send_sms("+1", "Call me").channel,
            admin.send_push(&ops, "Alert", "Check orders").channel,
            admin.send_push_to_all("Maintenance", "Back at 6").channel,
            admin.send_whatsapp_with_media("+1", "Invoice", "https://files.example/i.pdf").channel,
        ];
        assert_eq!(
            channels,
            vec![Channel::Email, Channel::Sms, Channel::Push, Channel::Push, Channel::WhatsApp]
        );
        assert_eq!(Channel::InApp.to_string(), "in_app");
    }

    #[test]
    fn test_optional_fields_are_left_out_of_json() {
        let sms = DriverNotifier.send_sms("+1", "Hi");
        let json = serde_json::to_value(&sms).unwrap();
        assert!(json.get("media_url").is_none());
        assert_eq!(json["channel"], "sms");

        let in_app = AdminNotifier.send_in_app(&UserId::from("u1"), "Hi", Priority::Low);
        assert_eq!(serde_json::to_value(&in_app).unwrap()["priority"], "low");
    }
}
