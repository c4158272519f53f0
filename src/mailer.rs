// src/mailer.rs

use log::info;
use reqwest::blocking::Client;
use serde::Serialize;

use crate::errors::ServerError;

/// Delivers sign-in links.
pub trait Mailer: Send + Sync {
    fn send_magic_link(&self, to_email: &str, magic_link: &str) -> Result<(), ServerError>;
}

/// Development mailer: writes the link to the log instead of sending it.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_magic_link(&self, to_email: &str, magic_link: &str) -> Result<(), ServerError> {
        info!("magic link for {to_email}: {magic_link}");
        Ok(())
    }
}

pub struct BrevoMailer {
    api_key: String,
    sender_email: String,
    sender_name: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoContact<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoContact<'a>,
    to: Vec<BrevoContact<'a>>,
    subject: &'a str,
    html_content: String,
}

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

impl BrevoMailer {
    pub fn new(api_key: String, sender_email: String, sender_name: String) -> Self {
        Self {
            api_key,
            sender_email,
            sender_name,
            client: Client::new(),
        }
    }
}

fn magic_link_html(link: &str) -> String {
    format!(
        r#"
        <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2>Your Conciera sign-in link</h2>
                    <p>Click below to carry on planning your move. The link works once and expires shortly.</p>
                    <p style="margin: 25px 0;">
                        <a href="{link}" style="background-color: #111827; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px; display: inline-block;">
                            Sign in
                        </a>
                    </p>
                    <p style="font-size: 0.9em; color: #666;">
                        Or paste this into your browser:<br>
                        <a href="{link}" style="color: #111827;">{link}</a>
                    </p>
                    <p style="font-size: 0.8em; color: #999;">
                        If you didn't ask for this, you can ignore this email.
                    </p>
                </div>
            </body>
        </html>
        "#
    )
}

impl Mailer for BrevoMailer {
    fn send_magic_link(&self, to_email: &str, magic_link: &str) -> Result<(), ServerError> {
        let payload = BrevoPayload {
            sender: BrevoContact {
                name: Some(&self.sender_name),
                email: &self.sender_email,
            },
            to: vec![BrevoContact {
                name: None,
                email: to_email,
            }],
            subject: "Your Conciera sign-in link",
            html_content: magic_link_html(magic_link),
        };

        let resp = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| ServerError::MailError(format!("send request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ServerError::MailError(format!(
                "Brevo API error: {status} - {text}"
            )));
        }

        info!("sent magic link to {to_email}");
        Ok(())
    }
}
