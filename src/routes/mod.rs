pub mod add;
pub mod data;
pub mod home;
pub mod save_score;

pub use add::add_sample;
pub use data::get_data;
pub use home::home;
pub use save_score::{save_score, save_score_info};
