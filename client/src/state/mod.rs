//! Page-local state models.
//!
//! DESIGN
//! ======
//! Each model is plain data owned by one mounted component through an
//! `RwSignal`; timers and DOM access stay in `components`.

pub mod carousel;
pub mod proposal;
