use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use validator::ValidateEmail;

/// A validated, lowercased email address
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(address: &str) -> Result<Self, InvalidEmailError> {
        let address = address.trim().to_lowercase();
        if address.validate_email() {
            Ok(Self(address))
        } else {
            Err(InvalidEmailError::Malformed(address))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the `@`, usable as a casual name to greet
    /// the recipient with when nothing better is known
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidEmailError {
    #[error("Email address: {0} is malformed")]
    Malformed(String),
}

impl FromStr for EmailAddress {
    type Err = InvalidEmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EmailAddressVisitor;

        impl<'de> Visitor<'de> for EmailAddressVisitor {
            type Value = EmailAddress;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid email address")
            }

            fn visit_str<E>(self, value: &str) -> Result<EmailAddress, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<EmailAddress>()
                    .map_err(|_| E::custom(format!("Malformed email address: {}", value)))
            }
        }

        deserializer.deserialize_str(EmailAddressVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_normalizes_valid_addresses() {
        let email = EmailAddress::new("  Maria.Lopez@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "maria.lopez@example.com");
        assert_eq!(email.local_part(), "maria.lopez");
    }

    #[test]
    fn it_rejects_malformed_addresses() {
        for bad_email in ["", "plainaddress", "@example.com", "maria@", "maria @example.com"] {
            assert!(EmailAddress::new(bad_email).is_err());
        }
    }
}
