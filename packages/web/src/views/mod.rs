mod home;
pub use home::Home;

mod record;
pub use record::Record;
