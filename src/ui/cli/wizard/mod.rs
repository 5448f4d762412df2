mod wizard;

pub use wizard::{PathRule, prompt_choice, prompt_task};
