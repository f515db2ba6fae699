//! Strongly-typed resource id wrappers.
//!
//! Constellix addresses every resource by an integer id. Wrapping the raw
//! integers prevents id mix-ups (passing a template id where a domain id is
//! expected) at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use constellix_core::error::{Error, Result};

/// Macro to generate strongly-typed id wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new id wrapper from a raw integer.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw integer id.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.parse::<u64>()
                    .map(Self)
                    .map_err(|_| Error::InvalidArgument(format!("Invalid id: {s}")))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Generate all id types
id_type!(DomainId, "Domain resource id");
id_type!(TemplateId, "Template resource id");
id_type!(IpFilterId, "IP filter resource id");
id_type!(ContactListId, "Contact list resource id");
id_type!(EmailContactId, "Contact list email contact id");
id_type!(WebhookId, "Contact list webhook contact id");
