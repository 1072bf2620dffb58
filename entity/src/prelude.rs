pub use super::booking::Entity as Booking;
pub use super::business::Entity as Business;
pub use super::event::Entity as Event;
pub use super::owner_profile::Entity as OwnerProfile;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
