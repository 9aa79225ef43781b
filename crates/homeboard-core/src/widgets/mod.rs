//! Widget content.
//!
//! Feed renderers turn provider values into board lines; the local widgets
//! (calendar, analog clock, backdrop) are pure computations the front end
//! draws.

pub mod backdrop;
pub mod calendar;
pub mod clock_face;
pub mod currency;
pub mod news;
pub mod weather;

pub use backdrop::Backdrop;
pub use calendar::CalendarDay;
pub use clock_face::HandAngles;
