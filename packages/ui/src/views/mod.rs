mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod profile;
pub use profile::ProfileView;

mod filter_bar;
pub use filter_bar::FilterBar;

mod task_card;
pub use task_card::TaskCard;

mod task_dialog;
pub use task_dialog::TaskDialog;

mod dashboard;
pub use dashboard::DashboardView;
