//! High-level runtime engine settings
//!
//! Selects how a built scenario is driven: headless batch run or the
//! interactive 2D viewer

#[derive(Debug, Clone)]
pub struct Engine {
    pub viewer: bool, // false = headless run, true = bevy 2D viewer
}
