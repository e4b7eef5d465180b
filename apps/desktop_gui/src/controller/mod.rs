//! Controller layer: backend events and command orchestration. View state
//! transitions themselves live in `view_core::reduce`.

pub mod events;
pub mod orchestration;
