//! Shared test doubles: a Bot that records what it sends and a fixed ResultSource.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use gradecard_bot::alias::EnrollmentNumber;
use gradecard_bot::portal::ResultSource;
use gradecard_bot::{Bot, Chat, DbotError, FetchError, Message, Result, User};
use std::sync::Mutex;

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot: records every send; optionally fails from the n-th send on.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    fail_from: Option<usize>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends with index >= `n` return a transport error.
    pub fn failing_from(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_from: Some(n),
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let mut sent = self.sent.lock().unwrap();
        if let Some(n) = self.fail_from {
            if sent.len() >= n {
                return Err(DbotError::Bot("simulated send failure".to_string()));
            }
        }
        sent.push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// ResultSource returning a fixed outcome and recording requested numbers.
pub struct StubSource {
    outcome: std::result::Result<String, FetchError>,
    pub calls: Mutex<Vec<EnrollmentNumber>>,
}

impl StubSource {
    pub fn ok(html: impl Into<String>) -> Self {
        Self {
            outcome: Ok(html.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(err: FetchError) -> Self {
        Self {
            outcome: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ResultSource for StubSource {
    async fn fetch(&self, enrollment: EnrollmentNumber) -> std::result::Result<String, FetchError> {
        self.calls.lock().unwrap().push(enrollment);
        self.outcome.clone()
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("student".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// One `<tr valign="middle">` with nine cells.
pub fn result_row(subject: &str, assignment: &str, theory: &str, lab: &str, status: &str) -> String {
    format!(
        r#"<tr valign="middle"><td>{}</td><td>{}</td><td>-</td><td>-</td><td>-</td><td>-</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
        subject, assignment, theory, lab, status
    )
}

pub fn gradecard_page(rows: &[String]) -> String {
    format!(
        r#"<html><body><table border="1">
<tr valign="top"><th>Course</th><th>Asgn1</th><th>LAB1</th><th>LAB2</th><th>LAB3</th><th>LAB4</th><th>THEORY</th><th>PRACTICAL</th><th>Status</th></tr>
{}
</table></body></html>"#,
        rows.join("\n")
    )
}
