mod mailer;

pub use mailer::*;
