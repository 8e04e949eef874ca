// One builder per page region. Each is a pure function of the theme and the
// content it displays.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod services;

pub use about::about;
pub use contact::contact;
pub use footer::footer;
pub use hero::hero;
pub use navbar::navbar;
pub use services::services;
