mod fit_task;

pub use fit_task::{FitReport, FitTask};
