//! Shortlist notification: templating, request building, and dispatch

pub mod dispatcher;
pub mod templates;

pub use dispatcher::{
    build_notifications, dispatch, DispatchFailure, DispatchReport, DryRunMailSender, MailSender,
    NotificationRequest, SentNotification,
};
pub use templates::NotificationTemplate;
