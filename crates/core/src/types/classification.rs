//! Order classification enums: payment method and shipping zone.
//!
//! Both drive the refund channel decision. Seed documents carry them either as
//! numeric codes (`1`, `2`, `3`, with `0` meaning "not set") or as variant
//! names, so deserialization accepts both. Serialization always writes the
//! `snake_case` name.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Raw wire form of a classification value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClassificationCode {
    Code(u8),
    Name(String),
}

impl ClassificationCode {
    fn normalized_name(name: &str) -> String {
        name.chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

/// How the customer paid for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ClassificationCode")]
pub enum PaymentMethod {
    CreditCard,
    CashOnDelivery,
    Paypal,
}

impl PaymentMethod {
    const ALL: [Self; 3] = [Self::CreditCard, Self::CashOnDelivery, Self::Paypal];

    /// Numeric code used by seed documents.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::CreditCard => 1,
            Self::CashOnDelivery => 2,
            Self::Paypal => 3,
        }
    }
}

impl TryFrom<ClassificationCode> for PaymentMethod {
    type Error = String;

    fn try_from(value: ClassificationCode) -> Result<Self, Self::Error> {
        match value {
            ClassificationCode::Code(code) => Self::ALL
                .into_iter()
                .find(|method| method.code() == code)
                .ok_or_else(|| format!("invalid payment method code: {code}")),
            ClassificationCode::Name(name) => {
                match ClassificationCode::normalized_name(&name).as_str() {
                    "creditcard" => Ok(Self::CreditCard),
                    "cashondelivery" => Ok(Self::CashOnDelivery),
                    "paypal" => Ok(Self::Paypal),
                    _ => Err(format!("invalid payment method: {name}")),
                }
            }
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "credit_card"),
            Self::CashOnDelivery => write!(f, "cash_on_delivery"),
            Self::Paypal => write!(f, "paypal"),
        }
    }
}

/// Region an order ships to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ClassificationCode")]
pub enum ShippingZone {
    Europe,
    Mena,
    America,
}

impl ShippingZone {
    const ALL: [Self; 3] = [Self::Europe, Self::Mena, Self::America];

    /// Numeric code used by seed documents.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Europe => 1,
            Self::Mena => 2,
            Self::America => 3,
        }
    }
}

impl TryFrom<ClassificationCode> for ShippingZone {
    type Error = String;

    fn try_from(value: ClassificationCode) -> Result<Self, Self::Error> {
        match value {
            ClassificationCode::Code(code) => Self::ALL
                .into_iter()
                .find(|zone| zone.code() == code)
                .ok_or_else(|| format!("invalid shipping zone code: {code}")),
            ClassificationCode::Name(name) => {
                match ClassificationCode::normalized_name(&name).as_str() {
                    "europe" | "zoneeurope" => Ok(Self::Europe),
                    "mena" | "zonemena" => Ok(Self::Mena),
                    "america" | "zoneamerica" => Ok(Self::America),
                    _ => Err(format!("invalid shipping zone: {name}")),
                }
            }
        }
    }
}

impl fmt::Display for ShippingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Europe => write!(f, "europe"),
            Self::Mena => write!(f, "mena"),
            Self::America => write!(f, "america"),
        }
    }
}

/// Deserialize an optional classification where `null`, a missing field and
/// code `0` all mean "not set".
///
/// # Errors
///
/// Returns a deserialization error for unknown codes or names.
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<ClassificationCode, Error = String>,
{
    match Option::<ClassificationCode>::deserialize(deserializer)? {
        None | Some(ClassificationCode::Code(0)) => Ok(None),
        Some(code) => T::try_from(code).map(Some).map_err(serde::de::Error::custom),
    }
}
