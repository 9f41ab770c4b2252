mod add_tutor;
mod dashboard_overview;
mod find_tutors;
mod home;
mod login;
mod manage_tutors;
mod manage_users;
mod my_bookings;
mod my_tutors;
mod not_found;
mod register;
mod settings;
mod tutor_details;
mod update_tutor;

pub use add_tutor::AddTutorPage;
pub use dashboard_overview::DashboardOverviewPage;
pub use find_tutors::FindTutorsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use manage_tutors::ManageTutorsPage;
pub use manage_users::ManageUsersPage;
pub use my_bookings::MyBookingsPage;
pub use my_tutors::MyTutorsPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
pub use tutor_details::TutorDetailsPage;
pub use update_tutor::UpdateTutorPage;
