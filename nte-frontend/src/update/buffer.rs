use nte_buffer::{message::BufferMessage, model::BufferResult};

use crate::model::Model;

pub fn update(model: &mut Model, message: &BufferMessage) {
    let results = nte_buffer::update(&mut model.viewport, &mut model.buffer, vec![message]);
    for result in results {
        match result {
            BufferResult::Changes(changes) => {
                tracing::trace!("buffer changed: {:?}", changes);
                if !changes.is_empty() {
                    model.modified = true;
                }
            }
        }
    }
}
