use crate::tasks::FitTask;
use crate::ui::types::build::{BuildError, build_source};
use crate::ui::types::choices::TaskChoice;

fn to_usize(name: &str, v: u64) -> Result<usize, BuildError> {
    usize::try_from(v).map_err(|_| BuildError::InvalidParameter(format!("{name} is too large: {v}")))
}

pub fn build_task(choice: TaskChoice) -> Result<FitTask, BuildError> {
    match choice {
        TaskChoice::FitGaussian(p) => {
            let source = build_source(p.source)?;
            let task = FitTask::new(
                source,
                p.sample_correction,
                to_usize("n_spaces", p.n_spaces)?,
                to_usize("bins", p.bins)?,
                p.normalize_histogram,
            )?;
            Ok(match p.export {
                Some(export) => {
                    let format = export.format();
                    task.with_export(export.path().to_path_buf(), format)
                }
                None => task,
            })
        }
    }
}
