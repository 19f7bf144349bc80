pub mod perplexity;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> BackendBox {
        return Box::<perplexity::Perplexity>::default();
    }
}
