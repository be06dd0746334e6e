pub mod actions;
pub mod session_viewmodel;
pub mod navbar_viewmodel;
pub mod footer_viewmodel;
pub mod shell_viewmodel;

pub use actions::UiAction;
pub use session_viewmodel::SessionViewModel;
pub use navbar_viewmodel::NavbarViewModel;
pub use footer_viewmodel::FooterViewModel;
pub use shell_viewmodel::ShellViewModel;
