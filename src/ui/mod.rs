/// UI layer: panel rendering on top of [`crate::state::AppState`].
pub mod panels;
pub mod timeline;
