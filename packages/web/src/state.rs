use std::sync::Arc;

use vocab_wordgen::WordGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<WordGenerator>,
}
