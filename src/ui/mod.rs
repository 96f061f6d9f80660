pub mod constants;
mod topic_select_panel;
pub mod traits;
pub mod utils;

pub use topic_select_panel::TopicSelectPanel;
