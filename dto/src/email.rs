use crate::recipients::Recipients;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload of `POST /send-email`.
/// Every field is optional at this level so that missing fields can be reported one by one.
#[derive(Getters, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    to: Option<Recipients>,
    subject: Option<String>,
    body: Option<String>,
    sender_name: Option<String>,
    cc: Option<Recipients>,
    bcc: Option<Recipients>,
    /// File names, looked up in the relay's attachments folder.
    attachments: Option<Vec<String>>,
}

impl SendEmailRequest {
    pub fn new(
        to: Option<Recipients>,
        subject: Option<String>,
        body: Option<String>,
        sender_name: Option<String>,
        cc: Option<Recipients>,
        bcc: Option<Recipients>,
        attachments: Option<Vec<String>>,
    ) -> Self {
        Self {
            to,
            subject,
            body,
            sender_name,
            cc,
            bcc,
            attachments,
        }
    }

    /// Whether no known field was provided at all.
    pub fn is_empty(&self) -> bool {
        self.to.is_none()
            && self.subject.is_none()
            && self.body.is_none()
            && self.sender_name.is_none()
            && self.cc.is_none()
            && self.bcc.is_none()
            && self.attachments.is_none()
    }
}

/// Payload of `POST /send-email-simple`: a single recipient, no CC/BCC, no sender name.
#[derive(Getters, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SimpleEmailRequest {
    to: Option<String>,
    subject: Option<String>,
    body: Option<String>,
}

impl SimpleEmailRequest {
    pub fn new(to: Option<String>, subject: Option<String>, body: Option<String>) -> Self {
        Self { to, subject, body }
    }
}
