//! Authorization rules evaluated on the client before a view renders.

pub mod guard;
