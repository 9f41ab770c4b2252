pub mod booking;
pub mod category;
pub mod errors;
pub mod stats;
pub mod tutor;
pub mod user;

pub use booking::{Booking, NewBookingRequest};
pub use category::LanguageCategory;
pub use errors::{ApiError, ErrorResponse};
pub use stats::PlatformStats;
pub use tutor::{NewTutorRequest, Tutor, UpdateTutorRequest};
pub use user::{UpdateRoleRequest, UpsertUserRequest, UserRecord, UserRole};
