//! Status and mode enums backed by Postgres enum types.
//!
//! Each enum serializes to the same snake_case string that is stored in
//! its database column, so API payloads and rows agree on spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $pg_type:literal, $label:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
        #[cfg_attr(feature = "sqlx", sqlx(type_name = $pg_type, rename_all = "snake_case"))]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored / wire spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $label,
                        [$($text),+].join(", ")
                    ))),
                }
            }
        }
    };
}

string_enum! {
    /// Sales state of a plot.
    PlotStatus, "plot_status", "plot status" {
        Available => "available",
        Booked => "booked",
        Sold => "sold",
    }
}

string_enum! {
    /// Lifecycle of a customer inquiry. Only admins move it past `inquired`.
    InquiryStatus, "inquiry_status", "inquiry status" {
        Inquired => "inquired",
        InProgress => "in_progress",
        Booked => "booked",
        Closed => "closed",
        Cancelled => "cancelled",
    }
}

string_enum! {
    /// How a plot's price is shown to visitors.
    PriceDisplay, "price_display", "price display" {
        Exact => "exact",
        Masked => "masked",
        Hidden => "hidden",
    }
}

string_enum! {
    UserRole, "user_role", "role" {
        User => "user",
        Admin => "admin",
    }
}

impl Default for PlotStatus {
    fn default() -> Self {
        PlotStatus::Available
    }
}

impl Default for InquiryStatus {
    fn default() -> Self {
        InquiryStatus::Inquired
    }
}

impl Default for PriceDisplay {
    fn default() -> Self {
        PriceDisplay::Exact
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}
