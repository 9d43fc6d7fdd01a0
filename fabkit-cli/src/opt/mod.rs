pub mod batch_opt;
pub mod rod_opt;
