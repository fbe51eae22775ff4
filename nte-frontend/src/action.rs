use crate::{error::AppError, file, model::Model};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Save,
}

pub fn exec(model: &mut Model, actions: Vec<Action>) -> Result<(), AppError> {
    for action in actions {
        tracing::debug!("executing action: {:?}", action);

        match action {
            Action::Save => save(model)?,
        }
    }

    Ok(())
}

fn save(model: &mut Model) -> Result<(), AppError> {
    let path = &model.settings.path;
    if let Err(source) = file::write_lines(path, model.buffer.contents()) {
        tracing::error!("saving {:?} failed: {:?}", path, source);

        return Err(AppError::SaveFailed {
            path: path.to_path_buf(),
            source,
        });
    }

    model.modified = false;
    tracing::debug!(
        "saved {} lines to {:?}",
        model.buffer.line_count(),
        model.settings.path
    );

    Ok(())
}
