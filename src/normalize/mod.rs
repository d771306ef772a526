//! Field normalizers shared by both row layouts.
//!
//! - [`phone`] - canonical `<country code><national number>` phone strings
//! - [`datetime`] - canonical `YYYY-MM-DDTHH:MM:SS` timestamps

pub mod datetime;
pub mod phone;

pub use datetime::{CANONICAL_FORMAT, normalize_datetime, parse_datetime};
pub use phone::{DEFAULT_REGION, PhoneNormalizer, is_valid_phone_number, normalize_phone_number};
