//! UI State
//!
//! Pure state transitions behind the views. Nothing here touches the DOM.

pub mod counter;
pub mod filter;
pub mod modal;
pub mod navigation;
