use chrono::{DateTime, Datelike};

/// Everything needed to render one reminder email. Plain data in,
/// strings out, so rendering stays deterministic and testable.
#[derive(Debug, Clone)]
pub struct ReminderMail {
    pub recipient_name: String,
    pub event_name: String,
    /// When the event takes place, unix millis
    pub event_date: i64,
    /// Empty when the event has no description or only a snapshot of
    /// a deleted event is available
    pub description: String,
    pub image_url: Option<String>,
    /// Footer copyright year, injected by the caller
    pub year: i32,
}

impl ReminderMail {
    pub fn subject(&self) -> String {
        format!("Reminder: {}", self.event_name)
    }

    pub fn render_html(&self) -> String {
        let when = format_event_date(self.event_date);
        let mut body = format!(
            r#"<p style="font-size:16px;color:#333333;">Hi {},</p>
<p style="font-size:16px;color:#333333;">This is a friendly reminder that <strong>{}</strong> is coming up on {}.</p>"#,
            self.recipient_name, self.event_name, when
        );
        if !self.description.is_empty() {
            body.push_str(&format!(
                r#"
<p style="font-size:14px;color:#555555;">{}</p>"#,
                self.description
            ));
        }
        if let Some(image_url) = &self.image_url {
            if !image_url.is_empty() {
                body.push_str(&format!(
                    r#"
<img src="{}" alt="{}" style="max-width:100%;border-radius:8px;" />"#,
                    image_url, self.event_name
                ));
            }
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<body style="margin:0;padding:0;background-color:#faf7f2;font-family:Georgia,serif;">
<div style="max-width:600px;margin:0 auto;padding:32px 24px;background-color:#ffffff;">
<h2 style="color:#b45309;margin-top:0;">{}</h2>
{}
<p style="font-size:16px;color:#333333;">We look forward to celebrating with you!</p>
<hr style="border:none;border-top:1px solid #eeeeee;" />
<p style="font-size:12px;color:#999999;">&copy; {} Festivo Events. All rights reserved.</p>
</div>
</body>
</html>"#,
            self.subject(),
            body,
            self.year
        )
    }
}

/// Calendar year of a unix millis timestamp in UTC
pub fn year_of(ts_millis: i64) -> i32 {
    DateTime::from_timestamp_millis(ts_millis)
        .map(|date| date.year())
        .unwrap_or(1970)
}

fn format_event_date(ts_millis: i64) -> String {
    match DateTime::from_timestamp_millis(ts_millis) {
        Some(date) => date.format("%A, %B %-d, %Y at %-I:%M %p UTC").to_string(),
        None => ts_millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT_DATE: i64 = 1772234700000; // Fri Feb 27 2026 23:25:00 GMT+0000

    fn mail() -> ReminderMail {
        ReminderMail {
            recipient_name: "maria".into(),
            event_name: "Garden Wedding".into(),
            event_date: EVENT_DATE,
            description: String::new(),
            image_url: None,
            year: 2026,
        }
    }

    #[test]
    fn subject_names_the_event() {
        assert_eq!(mail().subject(), "Reminder: Garden Wedding");
    }

    #[test]
    fn html_includes_greeting_event_and_readable_date() {
        let html = mail().render_html();
        assert!(html.contains("Hi maria,"));
        assert!(html.contains("<strong>Garden Wedding</strong>"));
        assert!(html.contains("Friday, February 27, 2026 at 11:25 PM UTC"));
        assert!(html.contains("&copy; 2026 Festivo Events"));
    }

    #[test]
    fn description_and_image_blocks_are_optional() {
        let bare = mail().render_html();
        assert!(!bare.contains("<img"));
        assert!(!bare.contains("color:#555555"));

        let mut with_extras = mail();
        with_extras.description = "Ceremony starts at sunset".into();
        with_extras.image_url = Some("https://cdn.example.com/wedding.jpg".into());
        let html = with_extras.render_html();
        assert!(html.contains("Ceremony starts at sunset"));
        assert!(html.contains(r#"<img src="https://cdn.example.com/wedding.jpg""#));

        // An empty image url renders no tag either
        let mut empty_image = mail();
        empty_image.image_url = Some(String::new());
        assert!(!empty_image.render_html().contains("<img"));
    }

    #[test]
    fn year_of_reads_utc_calendar_year() {
        assert_eq!(year_of(EVENT_DATE), 2026);
        assert_eq!(year_of(1767225599999), 2025); // Wed Dec 31 2025 23:59:59.999 GMT+0000
        assert_eq!(year_of(1767225600000), 2026); // Thu Jan 01 2026 00:00:00 GMT+0000
    }
}
