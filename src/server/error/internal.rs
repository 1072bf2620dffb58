use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user row carries a role string no `Role` variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("User {user_id} has unknown stored role '{value}'")]
    UnknownRole {
        /// Id of the user row
        user_id: i32,
        /// The stored role string
        value: String,
    },

    /// A stored booking row carries an unknown status string.
    #[error("Booking {booking_id} has unknown stored status '{value}'")]
    UnknownBookingStatus {
        /// Id of the booking row
        booking_id: i32,
        /// The stored status string
        value: String,
    },
}
