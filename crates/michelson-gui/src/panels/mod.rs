//! UI panels for the Michelson application.

pub mod controls;
pub mod response;
pub mod waves;
