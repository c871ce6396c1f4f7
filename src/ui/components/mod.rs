pub mod diagnosis;
pub mod home;
pub mod navbar;
pub mod toast;
pub mod toast_context;

pub use diagnosis::Diagnosis;
pub use home::Home;
pub use navbar::Navbar;
pub use toast::Toast;
