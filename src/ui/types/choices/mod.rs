mod export_choice;
mod schema;
mod source_choice;
mod task_choice;
mod ui_choice;

pub use export_choice::*;
pub use schema::*;
pub use source_choice::*;
pub use task_choice::*;
pub use ui_choice::UIChoice;
